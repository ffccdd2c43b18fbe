//! Scalar data types used in the `kern` table
//!
//! These are the handful of [scalar types][data types] that appear in
//! kerning data: glyph identifiers, signed design-unit quantities, and the
//! table tag, along with the traits used to convert them to and from raw
//! big-endian bytes.
//!
//! [data types]: https://docs.microsoft.com/en-us/typography/opentype/spec/otff#data-types

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fword;
mod glyph_id;
mod raw;
mod tag;

pub use fword::FWord;
pub use glyph_id::GlyphId16;
pub use raw::{FixedSize, ReadScalar, Scalar};
pub use tag::Tag;
