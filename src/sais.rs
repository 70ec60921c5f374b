use crate::induce::{induce_l, induce_s, put_lms_substrings, put_lms_suffixes};
use crate::reduce::reduce;
use crate::types::TypeArray;
use crate::Char;
use log::{debug, trace};

/// Sorts the suffixes of `s` into `sa`.
///
/// `s` is followed by a logical sentinel smaller than every symbol; the sentinel has no slot in
/// `sa`. Every symbol lies in `[0, alphabet_size)`.
pub(crate) fn sais<C: Char, I: Char>(s: &[C], alphabet_size: usize, sa: &mut [I], depth: usize) {
    debug_assert!(!s.is_empty());
    debug_assert_eq!(s.len(), sa.len());

    let n = s.len();

    if n == 1 {
        sa[0] = I::zero();
        return;
    }

    let types = TypeArray::classify(s);
    let mut bucket = vec![I::zero(); alphabet_size];

    // Stage 1: sort the LMS-substrings and name them
    let lms_count = put_lms_substrings(s, &types, &mut bucket, sa);

    debug_assert!(lms_count * 2 <= n);

    induce_l(s, &types, &mut bucket, sa);
    induce_s(s, &types, &mut bucket, sa);

    let name_count = reduce(s, &types, lms_count, sa);

    debug!(
        "sais depth {}: {} symbols, {} LMS-substrings, {} names",
        depth, n, lms_count, name_count
    );

    // Stage 2: sort the reduced text; sa[..lms_count] receives its suffix array
    {
        let (sa1, s1) = sa.split_at_mut(n - lms_count);
        if name_count < lms_count {
            sais(&*s1, name_count, &mut sa1[..lms_count], depth + 1);
        } else {
            trace!("sais depth {}: names are unique", depth);
            for (i, c) in s1.iter().enumerate() {
                sa1[c.to_u()] = I::of_u(i);
            }
        }

        // the reduced text is no longer needed: map ranks of s1 back to positions in s
        for (slot, p) in s1.iter_mut().zip(types.lms_positions()) {
            *slot = I::of_u(p);
        }
        sa1[..lms_count]
            .iter_mut()
            .for_each(|e| *e = s1[e.to_u()]);
    }

    // Stage 3: induce the suffix array of s from its sorted LMS suffixes
    put_lms_suffixes(s, lms_count, &mut bucket, sa);

    induce_l(s, &types, &mut bucket, sa);
    induce_s(s, &types, &mut bucket, sa);
}
