//! Static `kern` tables in both supported layouts.

/// An OpenType (version 0) table with one format 0 subtable.
///
/// This is also byte-for-byte what write-kern produces for the same pairs.
#[rustfmt::skip]
pub static KERN_VER_0_FMT_0_DATA: &[u8] = &[
    0x00, 0x00, //  0: version=0
    0x00, 0x01, //  2: nTables=1
    0x00, 0x00, //  4: subtable version=0
    0x00, 0x1A, //  6: length=26
    0x00, 0x01, //  8: coverage=1 (horizontal)
    0x00, 0x02, // 10: nPairs=2
    0x00, 0x06, // 12: searchRange=6
    0x00, 0x01, // 14: entrySelector=1
    0x00, 0x06, // 16: rangeShift=6
    0x00, 0x03, 0x00, 0x05, 0xFF, 0x88, // 18: l=3, r=5, v=-120
    0x00, 0x0A, 0x00, 0x14, 0x00, 0x32, // 24: l=10, r=20, v=50
];

/// An AAT (version 1) table with one format 0 subtable.
#[rustfmt::skip]
pub static KERN_VER_1_FMT_0_DATA: &[u8] = &[
    0x00, 0x01, //  0: version=1.0 (high)
    0x00, 0x00, //  2: version=1.0 (low)
    0x00, 0x00, 0x00, 0x01, //  4: nTables=1
    0x00, 0x00, 0x00, 0x1C, //  8: length=28
    0x00, 0x00, // 12: coverage=0 (horizontal, format 0)
    0x00, 0x00, // 14: tupleIndex=0
    0x00, 0x02, // 16: nPairs=2
    0x00, 0x0C, // 18: searchRange=12
    0x00, 0x01, // 20: entrySelector=1
    0x00, 0x00, // 22: rangeShift=0
    0x00, 0x04, 0x00, 0x0C, 0xFF, 0xD8, // 24: l=4, r=12, v=-40
    0x00, 0x04, 0x00, 0x1C, 0x00, 0x28, // 30: l=4, r=28, v=40
];

/// An AAT table declaring two subtables. Readers that only support a single
/// subtable are expected to decode the first and leave the rest untouched.
#[rustfmt::skip]
pub static KERN_VER_1_TWO_SUBTABLES_DATA: &[u8] = &[
    0x00, 0x01, //  0: version=1.0 (high)
    0x00, 0x00, //  2: version=1.0 (low)
    0x00, 0x00, 0x00, 0x02, //  4: nTables=2
    // first subtable
    0x00, 0x00, 0x00, 0x16, //  8: length=22
    0x00, 0x00, // 12: coverage=0 (horizontal, format 0)
    0x00, 0x00, // 14: tupleIndex=0
    0x00, 0x01, // 16: nPairs=1
    0x00, 0x06, // 18: searchRange=6
    0x00, 0x00, // 20: entrySelector=0
    0x00, 0x00, // 22: rangeShift=0
    0x00, 0x05, 0x00, 0x28, 0xFF, 0xCE, // 24: l=5, r=40, v=-50
    // second subtable
    0x00, 0x00, 0x00, 0x16, // 30: length=22
    0x00, 0x00, // 34: coverage=0 (horizontal, format 0)
    0x00, 0x00, // 36: tupleIndex=0
    0x00, 0x01, // 38: nPairs=1
    0x00, 0x06, // 40: searchRange=6
    0x00, 0x00, // 42: entrySelector=0
    0x00, 0x00, // 44: rangeShift=0
    0x00, 0x06, 0x00, 0x07, 0x00, 0x0A, // 46: l=6, r=7, v=10
];

/// An AAT table whose only subtable is format 2 (class kerning).
#[rustfmt::skip]
pub static KERN_VER_1_FMT_2_DATA: &[u8] = &[
    0x00, 0x01, //  0: version=1.0 (high)
    0x00, 0x00, //  2: version=1.0 (low)
    0x00, 0x00, 0x00, 0x01, //  4: nTables=1
    0x00, 0x00, 0x00, 0x18, //  8: length=24
    0x00, 0x02, // 12: coverage=2 (horizontal, format 2)
    0x00, 0x00, // 14: tupleIndex=0
    // class table data, opaque to a pair-list reader
    0x00, 0x06, 0x00, 0x10, 0x00, 0x14, 0x00, 0x18,
];
