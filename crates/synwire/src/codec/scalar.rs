// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Scalar payload types and their raw byte images.

use std::fmt;

/// A plain value that can be packed into buffer words.
///
/// `Bytes` is the value's in-memory image in native byte order; its length
/// must equal `size_of::<Self>()`. Zero-width types (`[u8; 0]`) encode to
/// nothing and are rejected by the event engine.
pub trait Scalar: Copy + fmt::Debug + Send + Sync + 'static {
    type Bytes: AsRef<[u8]> + AsMut<[u8]>;

    fn to_bytes(self) -> Self::Bytes;

    fn from_bytes(bytes: Self::Bytes) -> Self;

    /// All-zero image, filled in by the decoder.
    fn zeroed() -> Self::Bytes;
}

/// Generate `Scalar` impls for numeric primitives (native byte order)
macro_rules! impl_scalar_ne {
    ($($type:ty),* $(,)?) => {
        $(
            impl Scalar for $type {
                type Bytes = [u8; std::mem::size_of::<$type>()];

                #[inline]
                fn to_bytes(self) -> Self::Bytes {
                    self.to_ne_bytes()
                }

                #[inline]
                fn from_bytes(bytes: Self::Bytes) -> Self {
                    <$type>::from_ne_bytes(bytes)
                }

                #[inline]
                fn zeroed() -> Self::Bytes {
                    [0u8; std::mem::size_of::<$type>()]
                }
            }
        )*
    };
}

impl_scalar_ne!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize, f32, f64);

impl Scalar for bool {
    type Bytes = [u8; 1];

    #[inline]
    fn to_bytes(self) -> Self::Bytes {
        [u8::from(self)]
    }

    #[inline]
    fn from_bytes(bytes: Self::Bytes) -> Self {
        bytes[0] != 0
    }

    #[inline]
    fn zeroed() -> Self::Bytes {
        [0]
    }
}

// Opaque fixed-size records, e.g. packed 3- or 6-byte samples.
impl<const N: usize> Scalar for [u8; N] {
    type Bytes = [u8; N];

    #[inline]
    fn to_bytes(self) -> Self::Bytes {
        self
    }

    #[inline]
    fn from_bytes(bytes: Self::Bytes) -> Self {
        bytes
    }

    #[inline]
    fn zeroed() -> Self::Bytes {
        [0; N]
    }
}
