//! Misc utility functions

/// The binary-search header fields of a record array.
///
/// These are the searchRange/entrySelector/rangeShift triple carried in
/// several table headers, derived from the record count and record size.
/// All three fields are zero when the record count is zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchRange {
    pub search_range: u16,
    pub entry_selector: u16,
    pub range_shift: u16,
}

impl SearchRange {
    /// Compute search fields for `n_items` records of `item_size` bytes each.
    ///
    /// `entry_selector` is ⌊log2(n_items)⌋, computed with integer bit math;
    /// `search_range` scales it by the record size and `range_shift` covers
    /// the records beyond it. Consumers should treat these as advisory.
    ///
    /// Panics if a computed field overflows u16; tables validate their
    /// record counts before calling this.
    pub fn compute(n_items: usize, item_size: usize) -> Self {
        if n_items == 0 {
            return SearchRange::default();
        }
        let log2 = n_items.ilog2() as usize;
        SearchRange {
            search_range: u16::try_from(log2 * item_size).unwrap(),
            entry_selector: u16::try_from(log2).unwrap(),
            range_shift: u16::try_from((n_items - log2) * item_size).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0, 0, 0)]
    #[case(1, 0, 0, 6)]
    #[case(2, 6, 1, 6)]
    #[case(3, 6, 1, 12)]
    #[case(8, 18, 3, 30)]
    #[case(100, 36, 6, 564)]
    fn compute_pair_records(
        #[case] n_items: usize,
        #[case] search_range: u16,
        #[case] entry_selector: u16,
        #[case] range_shift: u16,
    ) {
        assert_eq!(
            SearchRange::compute(n_items, 6),
            SearchRange {
                search_range,
                entry_selector,
                range_shift,
            }
        );
    }
}
