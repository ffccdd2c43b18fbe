//! Writing the `kern` table
//!
//! This crate builds the binary [kerning table][kern] consumed by a larger
//! font compiler. Whatever layout the pairs came from, the output is always
//! the OpenType (version 0) layout with a single format 0 subtable, which
//! is the most widely understood encoding.
//!
//! # Example
//!
//! ```
//! use write_kern::tables::kern::Kern;
//!
//! let kern: Kern = [
//!     ((3u16, 5u16), -120i16),
//!     ((10u16, 20u16), 50i16),
//! ]
//! .into_iter()
//! .map(|((l, r), v)| (read_kern::tables::kern::KernPair::new(l, r), v.into()))
//! .collect();
//! let bytes = write_kern::dump_table(&kern).unwrap();
//! ```
//!
//! [kern]: https://learn.microsoft.com/en-us/typography/opentype/spec/kern

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod tables;
mod util;
pub mod validate;
mod write;

pub use util::SearchRange;
pub use write::{dump_table, FontWrite, TableWriter};

/// Public re-export of the kern-types crate.
pub extern crate kern_types as types;
/// Public re-export of the read-kern crate.
pub extern crate read_kern as read;
