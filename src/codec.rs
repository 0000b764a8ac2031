//! The codec composing the per-symbol placements into a full bijection.

use std::ops::{Div, MulAssign};

use num::{Num, PrimInt};

use crate::choose::ChooseTable;
use crate::multiset::decompose;
use crate::placement::SymbolPlacement;
use crate::CodecError;

/// A bijection between the arrangements of a fixed multiset of symbols and the
/// integer range `[0,size())`.
///
/// Built once for a multiset specification, then immutable: `index` and `get`
/// take `&self` and use only call-local scratch buffers, so a codec can be
/// shared freely across threads.
///
/// `T` is the symbol type; it only needs equality and a total order (the order
/// fixes the canonical processing sequence of the distinct symbols). `I` is the
/// integer width used for indices, u64 by default; construction fails with
/// [CodecError::Overflow] if the number of arrangements does not fit in `I`.
///
/// # Example
/// ```
/// use permdex::PermutationCodec;
/// let codec = PermutationCodec::<u32>::new(&[1,1,2,3]).unwrap();
/// assert_eq!(12,codec.size());
/// for i in 0..codec.size() {
///     assert_eq!(i,codec.index(&codec.get(i).unwrap()).unwrap());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct PermutationCodec<T, I = u64> {
    length: usize,
    placements: Vec<SymbolPlacement<T>>,
    choose: ChooseTable<I>,
    size: I,
}

impl<T: Copy + Ord, I: PrimInt> PermutationCodec<T, I> {
    /// Build a codec for the given multiset specification.
    ///
    /// The order the symbols are listed in does not matter; two codecs built
    /// for the same multiset produce identical ranks.
    ///
    /// Fails with [CodecError::Overflow] if the number of arrangements, or any
    /// binomial coefficient needed along the way, does not fit in `I`. A codec
    /// whose size had wrapped would not be a bijection, so this is checked
    /// eagerly with checked arithmetic rather than discovered per call.
    pub fn new(specification: &[T]) -> Result<Self, CodecError> {
        let groups = decompose(specification);
        let max_count = groups.iter().map(|g| g.count).max().unwrap_or(0);
        let choose = ChooseTable::new(specification.len(), max_count)?;
        let placements: Vec<SymbolPlacement<T>> = groups
            .iter()
            .map(|g| SymbolPlacement::new(g.symbol, g.remaining, g.count))
            .collect();
        let mut size = I::one();
        for placement in &placements {
            let s = placement.size(&choose)?;
            size = size.checked_mul(&s).ok_or(CodecError::Overflow)?;
        }
        Ok(PermutationCodec {
            length: specification.len(),
            placements,
            choose,
            size,
        })
    }

    /// The number of distinct arrangements of the multiset.
    ///
    /// This equals the multinomial coefficient N!/(c₁!·c₂!·…·cₖ!) for the
    /// distinct symbol counts c₁..cₖ summing to N. An empty multiset has
    /// exactly one arrangement, the empty one, so its size is 1.
    pub fn size(&self) -> I {
        self.size
    }

    /// The length N of the multiset specification.
    pub fn len(&self) -> usize {
        self.length
    }

    /// True iff the specification was empty.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The rank of `arrangement` within `[0,size())`.
    ///
    /// Fails with [CodecError::InvalidInput] if `arrangement` has the wrong
    /// length or is not a rearrangement of the specified multiset (wrong
    /// symbols, or right symbols with wrong counts).
    ///
    /// # Example
    /// ```
    /// use permdex::{CodecError, PermutationCodec};
    /// let codec = PermutationCodec::<char>::new(&['a','a','b']).unwrap();
    /// assert_eq!(0,codec.index(&['a','a','b']).unwrap());
    /// assert_eq!(Err(CodecError::InvalidInput),codec.index(&['a','a']));
    /// assert_eq!(Err(CodecError::InvalidInput),codec.index(&['a','b','b']));
    /// ```
    pub fn index(&self, arrangement: &[T]) -> Result<I, CodecError> {
        if arrangement.len() != self.length {
            return Err(CodecError::InvalidInput);
        }
        if self
            .placements
            .iter()
            .any(|p| !p.is_consistent(arrangement))
        {
            return Err(CodecError::InvalidInput);
        }
        // Each placement ranks its symbol within the working buffer and
        // compacts it out; the local ranks combine by mixed radix:
        //   index = rank_0 + size_0*(rank_1 + size_1*(rank_2 + ...))
        let mut working = arrangement.to_vec();
        let mut index = I::zero();
        let mut base = I::one();
        for placement in &self.placements {
            let local = placement.rank(&self.choose, &mut working)?;
            index = index + base * local;
            base = base * placement.size(&self.choose)?;
        }
        Ok(index)
    }

    /// The arrangement at rank `index`, inverse of [PermutationCodec::index].
    ///
    /// Fails with [CodecError::OutOfRange] if `index>=size()`, or if `index`
    /// is negative (possible when `I` is a signed type).
    ///
    /// # Example
    /// ```
    /// use permdex::{CodecError, PermutationCodec};
    /// let codec = PermutationCodec::<char>::new(&['a','a','b']).unwrap();
    /// assert_eq!(vec!['a','a','b'],codec.get(0).unwrap());
    /// assert_eq!(Err(CodecError::OutOfRange),codec.get(3));
    /// ```
    pub fn get(&self, index: I) -> Result<Vec<T>, CodecError> {
        if index < I::zero() || index >= self.size {
            return Err(CodecError::OutOfRange);
        }
        let mut slots: Vec<Option<T>> = vec![None; self.length];
        let mut index = index;
        for placement in &self.placements {
            let size = placement.size(&self.choose)?;
            placement.unrank(&self.choose, index % size, &mut slots)?;
            index = index / size;
        }
        Ok(slots
            .into_iter()
            .map(|slot| slot.expect("group counts sum to the specification length"))
            .collect())
    }
}

//
// General utility functions to do with counting arrangements
//

/// The factorial n!, the number of arrangements of n distinct symbols, in
/// whatever integer type is asked for.
///
/// The result type must be wide enough to hold n!; pick a big integer for
/// anything sizeable.
///
/// # Example
/// ```
/// use permdex::factorial;
/// assert_eq!(720u64,factorial(6));
/// assert_eq!(15511210043330985984000000u128,factorial(25));
/// assert_eq!("263130836933693530167218012160000000",factorial::<num::bigint::BigUint>(32).to_str_radix(10));
/// ```
pub fn factorial<T: Num + MulAssign + TryFrom<u32>>(n: u32) -> T {
    let mut product = T::one();
    for i in 2..=n {
        let i: T = i
            .try_into()
            .map_err(|_| ())
            .expect("factorial result type must be convertible from u32");
        product *= i;
    }
    product
}

/// Compute the multinomial coefficient (Σcounts)!/∏(counts[i]!), the number of
/// distinct arrangements of a multiset with the given per-symbol counts.
///
/// It is computed in the obvious somewhat inefficient manner; it needs an
/// integer type large enough to hold (Σcounts)!
///
/// # Example
/// ```
/// use permdex::multinomial;
/// assert_eq!(60u64,multinomial(&[3,2,1]));
/// assert_eq!(24u64,multinomial(&[1,1,1,1]));
/// assert_eq!(1u64,multinomial(&[]));
/// ```
pub fn multinomial<T: Num + MulAssign + TryFrom<u32> + Div>(counts: &[u32]) -> T {
    let n: u32 = counts.iter().sum();
    let mut res = factorial::<T>(n);
    for &c in counts {
        res = res / factorial::<T>(c);
    }
    res
}
