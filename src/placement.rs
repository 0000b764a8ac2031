//! Ranking and unranking the placement of one symbol's copies among open slots.
//!
//! This is the algorithmic core of the crate. Each distinct symbol of the
//! multiset gets one [SymbolPlacement], solving "which `count` of the `slots`
//! open positions hold this symbol" with the combinatorial number system; the
//! codec chains the placements together, each one compacting its own symbol out
//! of the working buffer so the next placement sees only the slots still open.

use num::PrimInt;

use crate::choose::ChooseTable;
use crate::CodecError;

/// The placement problem for a single distinct symbol: `count` indistinguishable
/// copies of `symbol` distributed over `slots` open positions (`count<=slots`).
///
/// There are C(slots,count) possible placements, and `rank`/`unrank` form a
/// bijection between them and `[0,size())`: a placement is ranked by scanning
/// the slots left to right and, for every slot the symbol skips, crediting the
/// number of completions that would have been enumerated first had the symbol
/// been placed there.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SymbolPlacement<T> {
    symbol: T,
    slots: usize,
    count: usize,
}

impl<T: Copy + Eq> SymbolPlacement<T> {
    /// Make a placement problem. Panics if `count>slots` as no placement exists.
    pub fn new(symbol: T, slots: usize, count: usize) -> Self {
        assert!(count <= slots, "cannot place more copies than open slots");
        SymbolPlacement {
            symbol,
            slots,
            count,
        }
    }

    /// The number of possible placements, C(slots,count).
    pub fn size<I: PrimInt>(&self, choose: &ChooseTable<I>) -> Result<I, CodecError> {
        choose.get(self.slots, self.count)
    }

    /// True iff `vals` contains exactly `count` occurrences of the symbol.
    /// The codec checks this for every placement before ranking, which is what
    /// makes the unguarded arithmetic in `rank` safe.
    pub fn is_consistent(&self, vals: &[T]) -> bool {
        vals.iter().filter(|&&v| v == self.symbol).count() == self.count
    }

    /// Rank this symbol's placement within `working` and compact the symbol out.
    ///
    /// `working` must hold exactly `slots` values containing exactly `count`
    /// copies of the symbol. On return it has been shrunk to the other
    /// `slots-count` values, in their original relative order, ready to be
    /// handed to the next placement in the chain.
    ///
    /// The returned rank is in `[0,size())`: each slot that does not hold the
    /// symbol, while copies are still pending, contributes C(s-1,r-1) where `s`
    /// is the number of slots not yet scanned and `r` the number of pending
    /// copies. That counts the placements that put a copy in this slot, all of
    /// which rank below the placement being scanned.
    pub fn rank<I: PrimInt>(
        &self,
        choose: &ChooseTable<I>,
        working: &mut Vec<T>,
    ) -> Result<I, CodecError> {
        debug_assert_eq!(self.slots, working.len());
        let mut rank = I::zero();
        let mut pending = self.count;
        let mut out = 0;
        for i in 0..self.slots {
            if working[i] == self.symbol {
                debug_assert!(pending > 0, "more copies in the buffer than count");
                pending -= 1;
            } else {
                if pending > 0 {
                    rank = rank + choose.get(self.slots - i - 1, pending - 1)?;
                }
                working[out] = working[i];
                out += 1;
            }
        }
        working.truncate(out);
        Ok(rank)
    }

    /// Write the `index`'th placement of this symbol into `target`.
    ///
    /// `target` is the shared output buffer for the whole arrangement; `None`
    /// marks a slot that is still open. Exactly the open slots are scanned (the
    /// placement sees them as positions `0..slots`), and `count` of them are
    /// set to the symbol. Slots already holding a value are untouched.
    ///
    /// `index` must be in `[0,size())`; the codec guarantees this by reducing
    /// the global index modulo `size` before calling.
    pub fn unrank<I: PrimInt>(
        &self,
        choose: &ChooseTable<I>,
        mut index: I,
        target: &mut [Option<T>],
    ) -> Result<(), CodecError> {
        let mut pending = self.count;
        let mut i = 0; // how many open slots have been scanned
        for slot in target.iter_mut() {
            if slot.is_some() {
                continue;
            }
            if pending > 0 {
                // Place a copy here if every remaining slot is needed anyway,
                // or if the index falls below the count of placements that use
                // this slot; otherwise skip the slot and discount the index.
                let forced = pending >= self.slots - i;
                let here = if forced {
                    I::zero()
                } else {
                    choose.get(self.slots - i - 1, pending - 1)?
                };
                if forced || index < here {
                    *slot = Some(self.symbol);
                    pending -= 1;
                } else {
                    index = index - here;
                }
            }
            i += 1;
        }
        debug_assert_eq!(0, pending, "index was not below size()");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The placements of 2 copies of 'a' over 4 slots, in rank order. The first
    // placement packs the copies leftmost; skipping the first slot costs
    // C(3,1)=3 ranks.
    const PLACEMENTS: [[char; 4]; 6] = [
        ['a', 'a', '.', '.'],
        ['a', '.', 'a', '.'],
        ['a', '.', '.', 'a'],
        ['.', 'a', 'a', '.'],
        ['.', 'a', '.', 'a'],
        ['.', '.', 'a', 'a'],
    ];

    #[test]
    fn rank_enumerates_in_order() {
        let choose = ChooseTable::<u64>::new(4, 2).unwrap();
        let placement = SymbolPlacement::new('a', 4, 2);
        assert_eq!(6, placement.size(&choose).unwrap());
        for (expected, vals) in PLACEMENTS.iter().enumerate() {
            let mut working = vals.to_vec();
            assert_eq!(expected as u64, placement.rank(&choose, &mut working).unwrap());
            // the symbol has been compacted out
            assert_eq!(vec!['.', '.'], working);
        }
    }

    #[test]
    fn unrank_inverts_rank() {
        let choose = ChooseTable::<u64>::new(4, 2).unwrap();
        let placement = SymbolPlacement::new('a', 4, 2);
        for (index, vals) in PLACEMENTS.iter().enumerate() {
            let mut target: Vec<Option<char>> = vec![None; 4];
            placement.unrank(&choose, index as u64, &mut target).unwrap();
            let produced: Vec<char> = target.iter().map(|&s| s.unwrap_or('.')).collect();
            assert_eq!(vals.to_vec(), produced);
        }
    }

    #[test]
    fn unrank_skips_filled_slots() {
        let choose = ChooseTable::<u64>::new(5, 2).unwrap();
        let placement = SymbolPlacement::new('a', 3, 2);
        // slots 1 and 3 are already taken; the placement sees slots 0,2,4.
        let mut target = vec![None, Some('x'), None, Some('y'), None];
        placement.unrank(&choose, 1, &mut target).unwrap();
        assert_eq!(
            vec![Some('a'), Some('x'), None, Some('y'), Some('a')],
            target
        );
    }

    #[test]
    fn is_consistent_checks_exact_count() {
        let placement = SymbolPlacement::new('a', 5, 2);
        assert!(placement.is_consistent(&['b', 'a', 'a', 'c', 'c']));
        assert!(!placement.is_consistent(&['a', 'b', 'c']));
        assert!(!placement.is_consistent(&['a', 'a', 'a', 'b', 'c']));
    }
}
