//! 16-bit signed font design units

/// A 16-bit signed quantity in font design units.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FWord(i16);

impl FWord {
    /// Construct a new `FWord` from a value in design units.
    pub const fn new(raw: i16) -> FWord {
        FWord(raw)
    }

    /// The value in design units.
    pub const fn to_i16(self) -> i16 {
        self.0
    }

    /// The memory representation of this value as big-endian bytes.
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<i16> for FWord {
    fn from(value: i16) -> Self {
        FWord(value)
    }
}

crate::newtype_scalar!(FWord, [u8; 2]);
