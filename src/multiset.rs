//! Decomposition of a multiset into per-symbol groups.

/// One distinct symbol of a multiset, with its multiplicity and the number of
/// slots still unclaimed when its placement problem is solved.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SymbolGroup<T> {
    /// The symbol this group describes.
    pub symbol: T,
    /// How many times the symbol occurs in the multiset.
    pub count: usize,
    /// The number of slots left for this and all later groups; that is, the
    /// multiset length minus the counts of all earlier groups. The first group
    /// sees the full length, the last group sees exactly its own count.
    pub remaining: usize,
}

/// Group a multiset by distinct symbol.
///
/// Groups are produced in ascending symbol order. This is the canonical
/// processing order for the whole crate: ranking and unranking both walk the
/// groups in this order, and two separately built codecs for the same multiset
/// (even listed in a different order) agree on every rank because of it.
///
/// An empty input produces an empty group list.
///
/// # Example
/// ```
/// use permdex::{decompose, SymbolGroup};
/// let groups = decompose(&[3,3,4,2,6,4]);
/// assert_eq!(groups,vec![
///     SymbolGroup{symbol:2,count:1,remaining:6},
///     SymbolGroup{symbol:3,count:2,remaining:5},
///     SymbolGroup{symbol:4,count:2,remaining:3},
///     SymbolGroup{symbol:6,count:1,remaining:1},
/// ]);
/// ```
pub fn decompose<T: Copy + Ord>(specification: &[T]) -> Vec<SymbolGroup<T>> {
    let mut sorted = specification.to_vec();
    sorted.sort_unstable();
    let mut groups: Vec<SymbolGroup<T>> = Vec::new();
    let mut remaining = sorted.len();
    let mut start = 0;
    while start < sorted.len() {
        let symbol = sorted[start];
        let mut count = 1;
        while start + count < sorted.len() && sorted[start + count] == symbol {
            count += 1;
        }
        groups.push(SymbolGroup {
            symbol,
            count,
            remaining,
        });
        remaining -= count;
        start += count;
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_length() {
        let spec = [5u8, 1, 5, 2, 2, 2, 9];
        let groups = decompose(&spec);
        assert_eq!(spec.len(), groups.iter().map(|g| g.count).sum::<usize>());
    }

    #[test]
    fn remaining_is_suffix_length() {
        let groups = decompose(&[1u32, 1, 2, 3, 3, 3]);
        let mut expected = 6;
        for g in &groups {
            assert_eq!(expected, g.remaining);
            expected -= g.count;
        }
        assert_eq!(0, expected);
    }

    #[test]
    fn empty_multiset() {
        assert!(decompose::<u32>(&[]).is_empty());
    }
}
