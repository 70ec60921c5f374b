use crate::bucket::{fill_bucket, Bound};
use crate::types::TypeArray;
use crate::{empty, is_empty, Char};

/// Seeds `sa` with every LMS position at the tail of its bucket and returns how many there are.
///
/// The sentinel is LMS too but never stored: it owns no slot in `sa`.
pub(crate) fn put_lms_substrings<C: Char, I: Char>(
    s: &[C],
    types: &TypeArray,
    bucket: &mut [I],
    sa: &mut [I],
) -> usize {
    debug_assert_eq!(s.len(), sa.len());

    sa.iter_mut().for_each(|e| *e = empty());

    fill_bucket(s, bucket, Bound::Tails);

    let mut lms_count = 0;
    for i in (1..s.len()).rev().filter(|&i| types.is_lms(i)) {
        let b = &mut bucket[s[i].to_u()];
        sa[b.to_u()] = I::of_u(i);
        *b = b.wrapping_sub(&I::one());
        lms_count += 1;
    }

    lms_count
}

/// Places the sorted LMS suffixes in `sa[..lms_count]` at the tails of their buckets, keeping
/// their order, and empties every other slot.
pub(crate) fn put_lms_suffixes<C: Char, I: Char>(
    s: &[C],
    lms_count: usize,
    bucket: &mut [I],
    sa: &mut [I],
) {
    debug_assert_eq!(s.len(), sa.len());

    sa[lms_count..].iter_mut().for_each(|e| *e = empty());

    fill_bucket(s, bucket, Bound::Tails);

    for i in (0..lms_count).rev() {
        let j = sa[i];
        let b = &mut bucket[s[j.to_u()].to_u()];
        debug_assert!(b.to_u() >= i);
        sa[i] = empty();
        sa[b.to_u()] = j;
        *b = b.wrapping_sub(&I::one());
    }
}

/// L-pass: scans left to right and places `j-1` at the head of its bucket for every placed `j`
/// whose predecessor is L-type.
pub(crate) fn induce_l<C: Char, I: Char>(
    s: &[C],
    types: &TypeArray,
    bucket: &mut [I],
    sa: &mut [I],
) {
    debug_assert_eq!(s.len(), sa.len());

    fill_bucket(s, bucket, Bound::Heads);

    // the sentinel sorts first and induces s[n-1], which is always L-type
    let last = s.len() - 1;
    {
        let b = &mut bucket[s[last].to_u()];
        sa[b.to_u()] = I::of_u(last);
        *b += I::one();
    }

    for i in 0..sa.len() {
        if is_empty(sa[i]) {
            continue;
        }

        let j = sa[i].to_u();
        if j > 0 && types.is_l(j - 1) {
            let b = &mut bucket[s[j - 1].to_u()];
            sa[b.to_u()] = I::of_u(j - 1);
            *b += I::one();
        }
    }
}

/// S-pass: scans right to left and places `j-1` at the tail of its bucket for every placed `j`
/// whose predecessor is S-type.
pub(crate) fn induce_s<C: Char, I: Char>(
    s: &[C],
    types: &TypeArray,
    bucket: &mut [I],
    sa: &mut [I],
) {
    debug_assert_eq!(s.len(), sa.len());

    fill_bucket(s, bucket, Bound::Tails);

    for i in (0..sa.len()).rev() {
        if is_empty(sa[i]) {
            continue;
        }

        let j = sa[i].to_u();
        if j > 0 && types.is_s(j - 1) {
            let b = &mut bucket[s[j - 1].to_u()];
            sa[b.to_u()] = I::of_u(j - 1);
            *b = b.wrapping_sub(&I::one());
        }
    }
}
