use crate::Char;
use bitvec::prelude::*;

/// S/L classification of every position of a text, plus one slot for the logical sentinel.
///
/// Bit `i` is set when the suffix at `i` is S-type. The slot at `len()` stands for the sentinel
/// and is always S-type, which makes `s.len()` an LMS position of every non-empty text.
#[derive(Debug)]
pub(crate) struct TypeArray {
    bits: BitVec,
}

impl TypeArray {
    /// Classifies `s` in one right-to-left scan.
    ///
    /// Equal neighbours copy the type of their right neighbour.
    pub(crate) fn classify<C: Char>(s: &[C]) -> Self {
        debug_assert!(!s.is_empty());

        let n = s.len();
        let mut bits = bitvec![0; n + 1];

        // the sentinel slot is S-type
        bits.set(n, true);

        // s[n-1] is L-type: it is followed by the sentinel
        let mut is_s = false;
        for i in (0..n - 1).rev() {
            is_s = s[i] < s[i + 1] || (s[i] == s[i + 1] && is_s);
            bits.set(i, is_s);
        }

        Self { bits }
    }

    /// Number of classified positions, the sentinel slot excluded.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bits.len() - 1
    }

    #[inline]
    pub(crate) fn is_s(&self, i: usize) -> bool {
        self.bits[i]
    }

    #[inline]
    pub(crate) fn is_l(&self, i: usize) -> bool {
        !self.bits[i]
    }

    /// `i` is S-type and `i-1` is L-type.
    #[inline]
    pub(crate) fn is_lms(&self, i: usize) -> bool {
        i > 0 && self.bits[i] && !self.bits[i - 1]
    }

    /// LMS positions in left-to-right order, the sentinel excluded.
    pub(crate) fn lms_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (1..self.len()).filter(move |&i| self.is_lms(i))
    }
}
