//! The [kern](https://docs.microsoft.com/en-us/typography/opentype/spec/kern) table

use indexmap::IndexMap;
use kern_types::{FWord, GlyphId16, Tag};

use crate::font_data::{Cursor, FontData};
use crate::read::{FontRead, ReadError, TopLevelTable};

/// A left/right pair of glyphs with a kerning adjustment between them.
///
/// This is the key of the decoded pair map; the adjustment is the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KernPair {
    /// The glyph on the left of the pair.
    pub left: GlyphId16,
    /// The glyph on the right of the pair.
    pub right: GlyphId16,
}

impl KernPair {
    /// Construct a new `KernPair`.
    pub fn new(left: impl Into<GlyphId16>, right: impl Into<GlyphId16>) -> Self {
        KernPair {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// A decoded `kern` table.
///
/// Both the OpenType (version 0) and AAT (version 1) layouts decode into
/// this one representation: a map from [`KernPair`] to adjustment, in the
/// order pairs appear in the font. If the font repeats a pair, the last
/// value wins.
///
/// Only the first subtable is read, and only the simple pair-list format
/// (format 0) is understood; see [`Kern::read_strict`] for how other AAT
/// formats are surfaced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Kern {
    pairs: IndexMap<KernPair, FWord>,
}

impl TopLevelTable for Kern {
    const TAG: Tag = Tag::new(b"kern");
}

impl<'a> FontRead<'a> for Kern {
    /// Read a `kern` table.
    ///
    /// A version 1 table whose first subtable is not format 0 (class
    /// kerning, for instance) decodes to an empty table without error,
    /// matching the longstanding behavior of existing readers. Use
    /// [`Kern::read_strict`] to treat that case as an error instead.
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        Self::read_impl(data, false)
    }
}

impl Kern {
    /// Like [`read`][FontRead::read], but an unsupported AAT subtable
    /// format fails with [`ReadError::UnsupportedSubtableFormat`] instead
    /// of silently decoding to an empty table.
    pub fn read_strict(data: FontData<'_>) -> Result<Self, ReadError> {
        Self::read_impl(data, true)
    }

    fn read_impl(data: FontData<'_>, strict: bool) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let version: u16 = cursor.read()?;
        let pairs = match version {
            0 => read_ot_kern(&mut cursor)?,
            1 => read_aat_kern(&mut cursor, strict)?,
            other => return Err(ReadError::UnsupportedTableVersion(other)),
        };
        Ok(Kern { pairs })
    }

    /// The pair map, in the order pairs appear in the font.
    pub fn pairs(&self) -> &IndexMap<KernPair, FWord> {
        &self.pairs
    }

    /// The adjustment for a given pair of glyphs, if any.
    pub fn get(
        &self,
        left: impl Into<GlyphId16>,
        right: impl Into<GlyphId16>,
    ) -> Option<FWord> {
        self.pairs.get(&KernPair::new(left, right)).copied()
    }

    /// The number of kerning pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `true` if the table contains no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Consume the table, returning the pair map.
    pub fn into_pairs(self) -> IndexMap<KernPair, FWord> {
        self.pairs
    }
}

/// The OpenType layout: the dispatcher has consumed the u16 version.
fn read_ot_kern(cursor: &mut Cursor<'_>) -> Result<IndexMap<KernPair, FWord>, ReadError> {
    cursor.advance::<u16>()?; // nTables; only the first subtable is read
    let subtable_version: u16 = cursor.read()?;
    if subtable_version != 0 {
        return Err(ReadError::UnsupportedSubtableVersion(subtable_version));
    }
    cursor.advance::<u16>()?; // subtable length, not validated
    cursor.advance::<u16>()?; // coverage
    read_pair_list(cursor)
}

/// The AAT layout: the dispatcher has consumed the high half of the
/// 32-bit version (0x00010000).
fn read_aat_kern(
    cursor: &mut Cursor<'_>,
    strict: bool,
) -> Result<IndexMap<KernPair, FWord>, ReadError> {
    cursor.advance::<u16>()?; // low half of the version
    let n_tables: u32 = cursor.read()?;
    if n_tables > 1 {
        log::warn!("kern table contains {n_tables} subtables; only the first will be read");
    }
    cursor.advance::<u32>()?; // subtable length
    let coverage: u16 = cursor.read()?;
    cursor.advance::<u16>()?; // tupleIndex, used only by variation fonts
    let format = (coverage & 0xFF) as u8;
    if format != 0 {
        if strict {
            return Err(ReadError::UnsupportedSubtableFormat(format));
        }
        return Ok(IndexMap::new());
    }
    read_pair_list(cursor)
}

/// The format 0 pair list, identical in both layouts: a count, three
/// binary-search hints, then `nPairs` (left, right, value) records.
fn read_pair_list(cursor: &mut Cursor<'_>) -> Result<IndexMap<KernPair, FWord>, ReadError> {
    let n_pairs: u16 = cursor.read()?;
    cursor.advance::<u16>()?; // searchRange
    cursor.advance::<u16>()?; // entrySelector
    cursor.advance::<u16>()?; // rangeShift
    let mut pairs = IndexMap::with_capacity(n_pairs as usize);
    for _ in 0..n_pairs {
        let left: GlyphId16 = cursor.read()?;
        let right: GlyphId16 = cursor.read()?;
        let value: FWord = cursor.read()?;
        pairs.insert(KernPair { left, right }, value);
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(data: &[u8]) -> Result<Kern, ReadError> {
        Kern::read(FontData::new(data))
    }

    #[test]
    fn smoke_test() {
        let kern = read(kern_test_data::kern::KERN_VER_0_FMT_0_DATA).unwrap();
        assert_eq!(kern.len(), 2);
        assert_eq!(kern.get(3u16, 5u16), Some(FWord::new(-120)));
        assert_eq!(kern.get(10u16, 20u16), Some(FWord::new(50)));
        assert_eq!(kern.get(5u16, 3u16), None);
    }

    #[test]
    fn pairs_keep_font_order() {
        let kern = read(kern_test_data::kern::KERN_VER_0_FMT_0_DATA).unwrap();
        let keys: Vec<_> = kern.pairs().keys().copied().collect();
        assert_eq!(keys, [KernPair::new(3u16, 5u16), KernPair::new(10u16, 20u16)]);
    }

    #[test]
    fn last_duplicate_wins() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x00, 0x00, // version=0
            0x00, 0x01, // nTables=1
            0x00, 0x00, // subtable version=0
            0x00, 0x20, // length=32
            0x00, 0x01, // coverage=1
            0x00, 0x03, // nPairs=3
            0x00, 0x06, // searchRange
            0x00, 0x01, // entrySelector
            0x00, 0x0C, // rangeShift
            0x00, 0x04, 0x00, 0x0C, 0xFF, 0xD8, // (4, 12): -40
            0x00, 0x05, 0x00, 0x28, 0xFF, 0xCE, // (5, 40): -50
            0x00, 0x04, 0x00, 0x0C, 0x00, 0x28, // (4, 12): 40, replaces -40
        ];
        let kern = read(data).unwrap();
        assert_eq!(kern.len(), 2);
        assert_eq!(kern.get(4u16, 12u16), Some(FWord::new(40)));
        assert_eq!(kern.get(5u16, 40u16), Some(FWord::new(-50)));
    }

    #[test]
    fn unknown_table_version() {
        let err = read(&[0x00, 0x02]).unwrap_err();
        assert_eq!(err, ReadError::UnsupportedTableVersion(2));
        // the message carries the observed value
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn unknown_ot_subtable_version() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x00, 0x00, // version=0
            0x00, 0x01, // nTables=1
            0x00, 0x03, // subtable version=3
        ];
        assert_eq!(
            read(data),
            Err(ReadError::UnsupportedSubtableVersion(3))
        );
    }

    #[test]
    fn aat_smoke_test() {
        let kern = read(kern_test_data::kern::KERN_VER_1_FMT_0_DATA).unwrap();
        assert_eq!(kern.len(), 2);
        assert_eq!(kern.get(4u16, 12u16), Some(FWord::new(-40)));
        assert_eq!(kern.get(4u16, 28u16), Some(FWord::new(40)));
    }

    #[test]
    fn aat_reads_only_first_subtable() {
        let kern = read(kern_test_data::kern::KERN_VER_1_TWO_SUBTABLES_DATA).unwrap();
        assert_eq!(kern.len(), 1);
        assert_eq!(kern.get(5u16, 40u16), Some(FWord::new(-50)));
        // pairs from the second subtable are never seen
        assert_eq!(kern.get(6u16, 7u16), None);
    }

    #[test]
    fn aat_unsupported_format_is_empty() {
        let kern = read(kern_test_data::kern::KERN_VER_1_FMT_2_DATA).unwrap();
        assert!(kern.is_empty());
    }

    #[test]
    fn aat_unsupported_format_strict() {
        let data = FontData::new(kern_test_data::kern::KERN_VER_1_FMT_2_DATA);
        assert_eq!(
            Kern::read_strict(data),
            Err(ReadError::UnsupportedSubtableFormat(2))
        );
    }

    #[test]
    fn truncated_data() {
        let data = kern_test_data::kern::KERN_VER_0_FMT_0_DATA;
        // cut mid-way through the second pair record
        assert_eq!(
            read(&data[..data.len() - 3]),
            Err(ReadError::OutOfBounds)
        );
    }

    #[test]
    fn table_tag() {
        assert_eq!(Kern::TAG, Tag::new(b"kern"));
    }
}
