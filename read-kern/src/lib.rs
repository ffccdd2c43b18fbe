//! Reading the `kern` table
//!
//! This crate provides memory safe parsing of the [kerning table][kern] of
//! an OpenType or TrueType font: the structure holding pairwise glyph
//! adjustments. It understands both the OpenType (version 0) layout used on
//! Windows and the classic AAT (version 1) layout used on the Mac, and
//! decodes either into a single owned pair map.
//!
//! It is intended for use by a larger font reader, which locates the raw
//! table bytes and hands them to [`Kern::read`][tables::kern::Kern].
//!
//! # Example
//!
//! ```
//! use read_kern::{tables::kern::Kern, FontData, FontRead};
//!
//! let data = FontData::new(kern_test_data::kern::KERN_VER_0_FMT_0_DATA);
//! let kern = Kern::read(data).unwrap();
//! for (pair, value) in kern.pairs() {
//!     println!("({}, {}): {}", pair.left, pair.right, value.to_i16());
//! }
//! ```
//!
//! [kern]: https://learn.microsoft.com/en-us/typography/opentype/spec/kern

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod font_data;
mod read;
pub mod tables;

pub use font_data::{Cursor, FontData};
pub use read::{FontRead, ReadError, TopLevelTable};

/// Public re-export of the kern-types crate.
pub extern crate kern_types as types;
