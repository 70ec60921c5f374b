use crate::Char;

/// Which end of each bucket the table points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Bound {
    /// First free slot, for left-to-right placement
    Heads,
    /// Last free slot, for right-to-left placement
    Tails,
}

#[inline]
fn clear<I: Char>(l: &mut [I]) {
    l.iter_mut().for_each(|e| *e = I::zero());
}

/// Fills `bucket` with the head or tail offset of every symbol's bucket in the suffix array.
///
/// The induced-sort passes consume the offsets in place, so the table is refilled before each
/// pass. Tails of empty buckets wrap around and are never read.
pub(crate) fn fill_bucket<C: Char, I: Char>(s: &[C], bucket: &mut [I], bound: Bound) {
    clear(bucket);

    s.iter().for_each(|c| bucket[c.to_u()] += I::one());

    (0..bucket.len()).fold(0usize, |sum, i| {
        let count = bucket[i].to_u();
        let sum = sum + count;
        bucket[i] = I::of_u(match bound {
            Bound::Heads => sum - count,
            Bound::Tails => sum.wrapping_sub(1),
        });
        sum
    });
}
