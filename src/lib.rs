//! Suffix array construction in O(N+|Σ|) time by induced sorting (SA-IS).
//!
//! The implementation follows the algorithm proposed in the paper [*Linear Suffix Array Construction by Almost Pure Induced-Sorting*](https://doi.org/10.1109/DCC.2009.42).
//!
//! Texts are slices of symbols already mapped into a dense alphabet `[0, alphabet_size)`; use
//! [`rank_symbols`] to get such a mapping for arbitrary ordered symbols. Every text is followed by
//! a logical sentinel that is smaller than all symbols. The sentinel is not stored in the text and
//! has no entry in the result unless [`compute_suffix_array_with_sentinel`] is used.
//!
//! # Example
//! ```
//! let s = b"abracadabra";
//! let sa: Vec<u32> = sais::compute_suffix_array(s, 256).unwrap();
//! assert_eq!(sa, vec![10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
//! ```
use contracts::*;

mod bucket;
mod error;
mod induce;
mod reduce;
mod sais;
mod types;

pub use error::Error;

mod private {
    use num::{traits::WrappingSub, PrimInt};
    use std::fmt::Debug;
    use std::ops::{AddAssign, SubAssign};

    pub trait Char: PrimInt + AddAssign + SubAssign + Copy + Debug + WrappingSub {
        fn of_u(v: usize) -> Self;
        fn to_u(&self) -> usize;
    }

    macro_rules! impl_char {
        ($uint:ty) => {
            impl Char for $uint {
                #[inline]
                fn of_u(v: usize) -> Self {
                    v as $uint
                }
                #[inline]
                fn to_u(&self) -> usize {
                    *self as usize
                }
            }
        };
    }

    impl_char!(u8);

    impl_char!(u16);

    #[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
    impl_char!(u32);

    #[cfg(target_pointer_width = "64")]
    impl_char!(u64);

    impl_char!(usize);
}

/// A trait that represents both symbol and index: primitive unsigned integer type that fit into `usize`.
///
/// The symbol type fixes the width of a text (`u8` for raw bytes, wider for texts of names). The
/// largest value of an index type is reserved as the empty marker, so an index type `I` can sort
/// texts of at most `I::max_value()` symbols.
///
/// This is a [sealed trait](https://rust-lang.github.io/api-guidelines/future-proofing.html).
pub trait Char: private::Char {}

macro_rules! impl_char {
    ($uint:ty) => {
        impl Char for $uint {}
    };
}

impl_char!(u8);

impl_char!(u16);

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
impl_char!(u32);

#[cfg(target_pointer_width = "64")]
impl_char!(u64);

impl_char!(usize);

#[inline]
pub(crate) fn empty<I: Char>() -> I {
    I::max_value()
}

#[inline]
pub(crate) fn is_empty<I: Char>(v: I) -> bool {
    v == empty()
}

/// Number of buckets needed to sort `text`: one past its largest symbol.
///
/// Sizing the bucket table from the text keeps a generous `alphabet_size` from costing memory.
fn bucket_count<C: Char>(text: &[C]) -> usize {
    text.iter().max().map_or(0, |c| c.to_u() + 1)
}

/// Checks the preconditions of suffix sorting `text` into `len` entries of `I` and returns the
/// number of buckets the sort needs.
fn validate<C: Char, I: Char>(
    text: &[C],
    alphabet_size: usize,
    len: usize,
) -> Result<usize, Error> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }

    let max = I::max_value().to_u();
    if len > max {
        return Err(Error::IndexOverflow { len, max });
    }

    match text.iter().position(|c| c.to_u() >= alphabet_size) {
        Some(position) => Err(Error::SymbolOutOfRange {
            position,
            symbol: text[position].to_u(),
            alphabet_size,
        }),
        None => Ok(bucket_count(text)),
    }
}

/// Construct the suffix array of `text`.
///
/// Runs in O(N+|Σ|) time. The result is a permutation of `0..text.len()` listing the suffixes
/// in ascending lexicographic order; a suffix that is a prefix of another sorts first.
///
/// # Arguments
/// - `text`: Input text, every symbol in `[0, alphabet_size)`
/// - `alphabet_size`: Number of distinct values a symbol may take
///
/// # Errors
///
/// Returns an error if `text` is empty, if a symbol is not below `alphabet_size` or if
/// `text.len()` does not fit into `I` with one value to spare.
///
/// # Example
/// ```
/// let s = [1u8, 1, 0, 0, 3, 3, 0, 0, 3, 3, 0, 0, 2, 2, 0, 0]; // "mmiissiissiippii"
///
/// let sa: Vec<u8> = sais::compute_suffix_array(&s, 4).unwrap();
///
/// assert_eq!(sa, vec![15, 14, 10, 6, 2, 11, 7, 3, 1, 0, 13, 12, 9, 5, 8, 4]);
/// ```
pub fn compute_suffix_array<C: Char, I: Char>(
    text: &[C],
    alphabet_size: usize,
) -> Result<Vec<I>, Error> {
    let buckets = validate::<C, I>(text, alphabet_size, text.len())?;

    let mut sa = vec![I::zero(); text.len()];
    sais::sais(text, buckets, &mut sa, 0);

    Ok(sa)
}

/// Construct the suffix array of `text` including the suffix that consists of the sentinel only.
///
/// The result has `text.len() + 1` entries and always starts with `text.len()`, the position of
/// the sentinel.
///
/// # Errors
///
/// Same as [`compute_suffix_array`], with one more entry to fit into `I`.
///
/// # Example
/// ```
/// let s = b"abracadabra";
///
/// let sa: Vec<u8> = sais::compute_suffix_array_with_sentinel(s, 256).unwrap();
///
/// assert_eq!(sa, vec![11, 10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
/// ```
pub fn compute_suffix_array_with_sentinel<C: Char, I: Char>(
    text: &[C],
    alphabet_size: usize,
) -> Result<Vec<I>, Error> {
    let buckets = validate::<C, I>(text, alphabet_size, text.len() + 1)?;

    let mut sa = vec![I::zero(); text.len() + 1];
    sa[0] = I::of_u(text.len());
    sais::sais(text, buckets, &mut sa[1..], 0);

    Ok(sa)
}

/// Construct the suffix array of `text` into `sa`.
///
/// In-place counterpart of [`compute_suffix_array`]: `sa` is overwritten and no output vector
/// is allocated.
///
/// # Panics
///
/// Panics if a precondition of [`compute_suffix_array`] does not hold or if `sa` is not exactly
/// as long as `text`.
///
/// # Example
/// ```
/// let s = b"abracadabra";
///
/// let mut sa = vec![0u8; s.len()];
///
/// sais::construct(s, 256, &mut sa);
///
/// assert_eq!(sa, vec![10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
/// ```
#[requires(!text.is_empty(), "`text` has 1 or more characters")]
#[requires(text.len() == sa.len(), "`text` and `sa` have same length")]
#[requires(I::max_value().to_u() >= text.len(), "indexes of `text` fit into `I`")]
#[requires(text.iter().all(|c| c.to_u() < alphabet_size), "characters of `text` lie in the alphabet")]
pub fn construct<C: Char, I: Char>(text: &[C], alphabet_size: usize, sa: &mut [I]) {
    sais::sais(text, bucket_count(text), sa, 0);
}

/// Maps every symbol of `text` to its rank among the distinct symbols of `text`.
///
/// Returns the ranked text and the alphabet size, i.e. the number of distinct symbols. The
/// ranking preserves the order of symbols, so the suffix array of the ranked text is the suffix
/// array of `text`.
///
/// # Example
/// ```
/// let (ranks, alphabet_size) = sais::rank_symbols(b"banana");
///
/// assert_eq!(ranks, vec![1, 0, 2, 0, 2, 0]);
/// assert_eq!(alphabet_size, 3);
/// ```
pub fn rank_symbols<T: Ord>(text: &[T]) -> (Vec<usize>, usize) {
    let mut order = (0..text.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| text[a].cmp(&text[b]));

    let mut ranks = vec![0; text.len()];
    let mut alphabet_size = 0;
    for (k, &i) in order.iter().enumerate() {
        // a new rank starts wherever the sorted symbols change
        if k == 0 || text[order[k - 1]] != text[i] {
            alphabet_size += 1;
        }
        ranks[i] = alphabet_size - 1;
    }

    (ranks, alphabet_size)
}
