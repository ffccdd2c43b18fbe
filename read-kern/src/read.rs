//! Traits for interpreting font data

use kern_types::Tag;

use crate::font_data::FontData;

/// A type that can be read from raw table data.
///
/// In the case of a table, the `read` method is responsible for ensuring the
/// input data is consistent: version fields are checked before any
/// version-dependent fields are interpreted, and exhausted input surfaces as
/// an error rather than a partial result.
pub trait FontRead<'a>: Sized {
    /// Read an instance of `Self` from the provided data, performing validation.
    fn read(data: FontData<'a>) -> Result<Self, ReadError>;
}

/// A table that appears in a font's table directory.
pub trait TopLevelTable {
    /// The table's tag, as it appears in the table directory.
    const TAG: Tag;
}

/// An error that occurs when reading font data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// A read or skip went past the end of the buffer.
    OutOfBounds,
    /// The outer table version is not one this crate understands.
    UnsupportedTableVersion(u16),
    /// A version 0 table declared a subtable version other than 0.
    UnsupportedSubtableVersion(u16),
    /// A version 1 table's first subtable uses a format other than the
    /// simple pair list. Only returned by strict reads.
    UnsupportedSubtableFormat(u8),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "A read was out of bounds"),
            ReadError::UnsupportedTableVersion(version) => {
                write!(f, "Unsupported kern table version {version}")
            }
            ReadError::UnsupportedSubtableVersion(version) => {
                write!(f, "Unsupported kern subtable version {version}")
            }
            ReadError::UnsupportedSubtableFormat(format) => {
                write!(f, "Unsupported kern subtable format {format}")
            }
        }
    }
}

impl std::error::Error for ReadError {}
