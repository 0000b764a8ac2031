//! permdex is a library for ranking and unranking permutations of a multiset.
//!
//! Given a fixed sequence of symbols, possibly containing duplicates, a
//! [PermutationCodec] is a bijection between the distinct rearrangements of that
//! sequence and the dense integer range `[0,size())`. `index` maps a rearrangement
//! to its integer rank; `get` is the inverse, producing the rearrangement at a
//! given rank. The round trip `index(get(i))==i` holds for every valid `i`.
//!
//! The enumeration is based on the combinatorial number system: the multiset is
//! decomposed into one placement problem per distinct symbol ("which of the
//! remaining slots hold this symbol"), each placement is ranked with binomial
//! coefficients from a precomputed Pascal's triangle, and the per-symbol ranks
//! are combined into a single index with mixed radix arithmetic.
//!
//! The index width is a type parameter (u64 by default) so the caller can choose
//! a width large enough for the multiset at hand; a multiset whose number of
//! arrangements does not fit in that width is rejected at construction time
//! rather than wrapping silently.
//!
//! # Example
//! ```
//! use permdex::PermutationCodec;
//! #[derive(Copy,Clone,Debug,Eq,PartialEq,Ord,PartialOrd)]
//! enum Kind { A, B, C }
//! use Kind::*;
//!
//! // Consider the arrangements of the multiset {A, A, A, B, B, C}
//! let codec = PermutationCodec::<Kind>::new(&[A,A,A,B,B,C]).unwrap();
//! assert_eq!(60,codec.size());
//! assert_eq!(10,codec.index(&[B,A,A,A,B,C]).unwrap());
//! assert_eq!(vec![B,A,A,A,B,C],codec.get(10).unwrap());
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod choose;
pub mod codec;
pub mod multiset;
pub mod placement;

pub use choose::ChooseTable;
pub use codec::{factorial, multinomial, PermutationCodec};
pub use multiset::{decompose, SymbolGroup};
pub use placement::SymbolPlacement;

/// The ways a codec operation can fail.
///
/// All three are surfaced to the caller; nothing is clamped or silently
/// corrected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CodecError {
    /// An index passed to `get`, or a coefficient lookup, is outside the valid domain.
    OutOfRange,
    /// A permutation passed to `index` has the wrong length or does not use
    /// exactly the symbols of the multiset the codec was built for.
    InvalidInput,
    /// The number of arrangements does not fit in the chosen integer width.
    /// Detected eagerly at construction time.
    Overflow,
}

impl Error for CodecError {}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::OutOfRange => write!(f, "Index out of range"),
            CodecError::InvalidInput => {
                write!(f, "Input is not an arrangement of the expected multiset")
            }
            CodecError::Overflow => {
                write!(f, "The number of arrangements overflows the index type")
            }
        }
    }
}
