//! A precomputed table of binomial coefficients.

use num::PrimInt;

use crate::CodecError;

/// A table serving the binomial coefficient C(n,m) for all `n<=n_max` and
/// `m<=m_max` in O(1) per lookup after an O(n_max*m_max) build.
///
/// The table is filled with Pascal's rule C(n,m) = C(n-1,m) + C(n-1,m-1), which
/// keeps every intermediate value an exact integer; there are no factorials and
/// no floating point involved, so the only way a coefficient can be wrong is if
/// it does not fit in `I` at all, and that is reported as an error at build time.
///
/// # Example
/// ```
/// use permdex::ChooseTable;
/// let choose = ChooseTable::<u64>::new(4,2).unwrap();
/// assert_eq!(6,choose.get(4,2).unwrap());
/// assert_eq!(0,choose.get(1,2).unwrap());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChooseTable<I> {
    n_max: usize,
    m_max: usize,
    /// vals[n*(m_max+1)+m] = C(n,m), rows n=0..=n_max.
    vals: Vec<I>,
}

impl<I: PrimInt> ChooseTable<I> {
    /// Build the table of C(n,m) for `n<=n_max`, `m<=m_max`.
    ///
    /// Fails with [CodecError::Overflow] if any tabulated coefficient does not
    /// fit in `I`.
    pub fn new(n_max: usize, m_max: usize) -> Result<Self, CodecError> {
        let stride = m_max + 1;
        let mut vals = vec![I::zero(); (n_max + 1) * stride];
        for n in 0..=n_max {
            vals[n * stride] = I::one(); // C(n,0) = 1
            for m in 1..=m_max.min(n) {
                let without = vals[(n - 1) * stride + m];
                let with = vals[(n - 1) * stride + m - 1];
                vals[n * stride + m] = without.checked_add(&with).ok_or(CodecError::Overflow)?;
            }
        }
        Ok(ChooseTable { n_max, m_max, vals })
    }

    /// Look up C(n,m).
    ///
    /// Returns 0 for `m>n` (there is no way to choose more elements than are
    /// available), and fails with [CodecError::OutOfRange] when `n>n_max` or
    /// `m>m_max`.
    ///
    /// # Example
    /// ```
    /// use permdex::{ChooseTable, CodecError};
    /// let choose = ChooseTable::<u64>::new(5,2).unwrap();
    /// assert_eq!(10,choose.get(5,2).unwrap());
    /// assert_eq!(Err(CodecError::OutOfRange),choose.get(5,3));
    /// ```
    pub fn get(&self, n: usize, m: usize) -> Result<I, CodecError> {
        if m > n {
            Ok(I::zero())
        } else if n > self.n_max || m > self.m_max {
            Err(CodecError::OutOfRange)
        } else {
            Ok(self.vals[n * (self.m_max + 1) + m])
        }
    }
}
