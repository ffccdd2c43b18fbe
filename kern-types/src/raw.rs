//! types for working with raw big-endian bytes

/// A trait for font scalars.
///
/// This is an internal trait for encoding and decoding big-endian bytes.
///
/// You do not need to implement this trait directly; it is implemented for
/// the primitive integer types, and the [`newtype_scalar`][crate::newtype_scalar]
/// macro implements it for newtypes around them.
pub trait Scalar: Sized {
    /// The raw big-endian byte representation of this type.
    type Raw: Copy + AsRef<[u8]>;

    /// Encode this type as raw big-endian bytes
    fn to_raw(self) -> Self::Raw;
    /// Create an instance of this type from raw big-endian bytes
    fn from_raw(raw: Self::Raw) -> Self;
}

/// A type with a known, constant size in raw font data.
pub trait FixedSize {
    /// The size of this type in raw bytes. Essentially an alias for `size_of`.
    const RAW_BYTE_LEN: usize;
}

/// A scalar that can be read from the front of a byte buffer.
pub trait ReadScalar: FixedSize + Sized {
    /// Interpret the first [`RAW_BYTE_LEN`][FixedSize::RAW_BYTE_LEN] bytes
    /// of `bytes` as `Self`, returning `None` if too few bytes remain.
    fn read(bytes: &[u8]) -> Option<Self>;
}

impl<T: Scalar> FixedSize for T {
    const RAW_BYTE_LEN: usize = std::mem::size_of::<T::Raw>();
}

impl<T> ReadScalar for T
where
    T: Scalar,
    T::Raw: for<'a> TryFrom<&'a [u8]>,
{
    fn read(bytes: &[u8]) -> Option<Self> {
        bytes
            .get(..Self::RAW_BYTE_LEN)
            .and_then(|bytes| bytes.try_into().ok())
            .map(Self::from_raw)
    }
}

/// An internal macro for implementing the `Scalar` trait for newtypes.
#[macro_export]
macro_rules! newtype_scalar {
    ($name:ident, $raw:ty) => {
        impl $crate::Scalar for $name {
            type Raw = $raw;
            fn to_raw(self) -> $raw {
                $crate::Scalar::to_raw(self.0)
            }

            fn from_raw(raw: $raw) -> Self {
                Self($crate::Scalar::from_raw(raw))
            }
        }
    };
}

macro_rules! int_scalar {
    ($ty:ty, $raw:ty) => {
        impl crate::raw::Scalar for $ty {
            type Raw = $raw;
            fn to_raw(self) -> $raw {
                self.to_be_bytes()
            }

            fn from_raw(raw: $raw) -> $ty {
                Self::from_be_bytes(raw)
            }
        }
    };
}

int_scalar!(u8, [u8; 1]);
int_scalar!(i8, [u8; 1]);
int_scalar!(u16, [u8; 2]);
int_scalar!(i16, [u8; 2]);
int_scalar!(u32, [u8; 4]);
int_scalar!(i32, [u8; 4]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_scalars() {
        let bytes = [0xFF, 0x88, 0x00, 0x32];
        assert_eq!(i16::read(&bytes), Some(-120));
        assert_eq!(u16::read(&bytes[2..]), Some(50));
        assert_eq!(u32::read(&bytes), Some(0xFF88_0032));
        assert_eq!(u32::read(&bytes[1..]), None);
    }

    #[test]
    fn round_trip_raw() {
        assert_eq!(i16::from_raw((-1234i16).to_raw()), -1234);
        assert_eq!(u16::RAW_BYTE_LEN, 2);
        assert_eq!(u32::RAW_BYTE_LEN, 4);
    }
}
