//! The [kern](https://docs.microsoft.com/en-us/typography/opentype/spec/kern) table

use indexmap::IndexMap;
use kern_types::{FWord, FixedSize};
use read_kern::tables::kern::KernPair;

use crate::util::SearchRange;
use crate::validate::{Validate, ValidationCtx};
use crate::write::{FontWrite, TableWriter};

/// horizontal kerning, format 0, no minimum/cross-stream/override flags
const COVERAGE_HORIZONTAL: u16 = 0x0001;

/// size in bytes of one kerning pair record
const KERN_PAIR_LEN: usize = 6;

/// The `kern` table: version 0, with a single format 0 subtable.
///
/// Pair records are written in map iteration order; they are not sorted
/// here. The encoded layout expects records sorted ascending by
/// (left, right), so sort the map first (for instance with
/// [`IndexMap::sort_keys`]) if consumers will binary-search the output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Kern {
    /// The kerning adjustment for each glyph pair.
    pub kerning_pairs: IndexMap<KernPair, FWord>,
}

impl Kern {
    /// Construct a new `Kern` table from a pair map.
    pub fn new(kerning_pairs: IndexMap<KernPair, FWord>) -> Self {
        Kern { kerning_pairs }
    }

    fn compute_length(&self) -> u16 {
        let len = u16::RAW_BYTE_LEN * 7 + // version, length, coverage, nPairs,
                                          // searchRange, entrySelector, rangeShift
        self.kerning_pairs.len() * KERN_PAIR_LEN;
        u16::try_from(len).unwrap()
    }
}

impl FontWrite for Kern {
    fn write_into(&self, writer: &mut TableWriter) {
        let n_pairs = u16::try_from(self.kerning_pairs.len()).unwrap();
        let computed = SearchRange::compute(n_pairs as usize, KERN_PAIR_LEN);
        0u16.write_into(writer); // table version
        1u16.write_into(writer); // nTables
        0u16.write_into(writer); // subtable version
        self.compute_length().write_into(writer);
        COVERAGE_HORIZONTAL.write_into(writer);
        n_pairs.write_into(writer);
        computed.search_range.write_into(writer);
        computed.entry_selector.write_into(writer);
        computed.range_shift.write_into(writer);
        for (pair, value) in &self.kerning_pairs {
            pair.left.write_into(writer);
            pair.right.write_into(writer);
            value.write_into(writer);
        }
    }
}

impl Validate for Kern {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_table("Kern", |ctx| {
            ctx.in_field("kerning_pairs", |ctx| {
                const MAX_PAIRS: usize = (u16::MAX as usize - 14) / KERN_PAIR_LEN;
                if self.kerning_pairs.len() > MAX_PAIRS {
                    ctx.report("subtable length exceeds u16::MAX");
                }
            });
        });
    }
}

impl From<IndexMap<KernPair, FWord>> for Kern {
    fn from(kerning_pairs: IndexMap<KernPair, FWord>) -> Self {
        Kern::new(kerning_pairs)
    }
}

impl From<read_kern::tables::kern::Kern> for Kern {
    fn from(table: read_kern::tables::kern::Kern) -> Self {
        Kern::new(table.into_pairs())
    }
}

impl FromIterator<(KernPair, FWord)> for Kern {
    fn from_iter<T: IntoIterator<Item = (KernPair, FWord)>>(iter: T) -> Self {
        Kern::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use read_kern::{FontData, FontRead};

    use super::*;

    fn sample_pairs() -> IndexMap<KernPair, FWord> {
        // already sorted by (left, right)
        [
            (KernPair::new(3u16, 5u16), FWord::new(-120)),
            (KernPair::new(10u16, 20u16), FWord::new(50)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn smoke_test() {
        let kern = Kern::new(sample_pairs());
        let bytes = crate::dump_table(&kern).unwrap();
        assert_eq!(bytes, kern_test_data::kern::KERN_VER_0_FMT_0_DATA);
    }

    #[test]
    fn zero_pairs() {
        let bytes = crate::dump_table(&Kern::default()).unwrap();
        #[rustfmt::skip]
        let expected: &[u8] = &[
            0x00, 0x00, // version=0
            0x00, 0x01, // nTables=1
            0x00, 0x00, // subtable version=0
            0x00, 0x0E, // length=14 (header only)
            0x00, 0x01, // coverage=1
            0x00, 0x00, // nPairs=0
            0x00, 0x00, // searchRange=0
            0x00, 0x00, // entrySelector=0
            0x00, 0x00, // rangeShift=0
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn round_trip() {
        let kern = Kern::new(sample_pairs());
        let bytes = crate::dump_table(&kern).unwrap();
        let loaded = read_kern::tables::kern::Kern::read(FontData::new(&bytes)).unwrap();
        assert_eq!(*loaded.pairs(), kern.kerning_pairs);
    }

    #[test]
    fn round_trip_from_decoded() {
        let loaded =
            read_kern::tables::kern::Kern::read(FontData::new(kern_test_data::kern::KERN_VER_1_FMT_0_DATA))
                .unwrap();
        // AAT input re-encodes in the version 0 layout
        let bytes = crate::dump_table(&Kern::from(loaded.clone())).unwrap();
        let reread = read_kern::tables::kern::Kern::read(FontData::new(&bytes)).unwrap();
        assert_eq!(reread, loaded);
    }

    #[test]
    fn too_many_pairs() {
        let pairs: IndexMap<_, _> = (0..10921u32)
            .map(|i| {
                let pair = KernPair::new((i >> 8) as u16, (i & 0xFF) as u16);
                (pair, FWord::new(0))
            })
            .collect();
        assert_eq!(pairs.len(), 10921);
        let err = crate::dump_table(&Kern::new(pairs)).unwrap_err();
        assert!(err.to_string().contains("kerning_pairs"));
    }

    #[test]
    fn pairs_follow_iteration_order() {
        // records are emitted exactly as iterated, sorted or not
        let reversed: IndexMap<_, _> = sample_pairs().into_iter().rev().collect();
        let bytes = crate::dump_table(&Kern::new(reversed)).unwrap();
        assert_eq!(&bytes[18..24], &[0x00, 0x0A, 0x00, 0x14, 0x00, 0x32]);
        assert_eq!(&bytes[24..30], &[0x00, 0x03, 0x00, 0x05, 0xFF, 0x88]);
    }
}
