use crate::types::TypeArray;
use crate::{empty, is_empty, Char};

/// Compares the LMS-substrings starting at `i` and `j`, each running up to and including the
/// next LMS position.
///
/// A substring that reaches the sentinel equals no other one.
fn eq_lms_substr<C: Char>(s: &[C], types: &TypeArray, i: usize, j: usize) -> bool {
    let n = s.len();

    let mut d = 0;
    loop {
        if i + d == n || j + d == n {
            return false;
        }
        if s[i + d] != s[j + d] || types.is_s(i + d) != types.is_s(j + d) {
            return false;
        }
        if d > 0 && types.is_lms(i + d) && types.is_lms(j + d) {
            return true;
        }
        d += 1;
    }
}

/// Names the sorted LMS-substrings and packs the reduced text into `sa[n-lms_count..]`.
///
/// Returns the number of distinct names. On return `sa[..n-lms_count]` is empty.
///
/// Pre-condition: every LMS position is in `sa`, sorted by its LMS-substring.
pub(crate) fn reduce<C: Char, I: Char>(
    s: &[C],
    types: &TypeArray,
    lms_count: usize,
    sa: &mut [I],
) -> usize {
    debug_assert_eq!(s.len(), sa.len());
    debug_assert!(lms_count * 2 <= s.len());

    let n = sa.len();

    {
        let mut i = 0;
        for j in 0..n {
            let p = sa[j];
            if !is_empty(p) && types.is_lms(p.to_u()) {
                sa[i] = p;
                i += 1;
            }
        }
        debug_assert_eq!(i, lms_count);
    }

    let (sorted, names) = sa.split_at_mut(lms_count);
    names.iter_mut().for_each(|e| *e = empty());

    // the name of LMS position p is stored in names[p / 2]
    // no two LMS positions are adjacent, so no two share a slot
    let mut name_count = 0;
    let mut prev: Option<usize> = None;
    for &p in sorted.iter() {
        let p = p.to_u();
        if prev.map_or(true, |q| !eq_lms_substr(s, types, q, p)) {
            name_count += 1;
        }
        names[p / 2] = I::of_u(name_count - 1);
        prev = Some(p);
    }

    // squeeze the names to the end, keeping their text order
    let mut i = n;
    for j in (lms_count..n).rev() {
        if !is_empty(sa[j]) {
            i -= 1;
            sa[i] = sa[j];
        }
    }
    debug_assert_eq!(i, n - lms_count);

    sa[..n - lms_count].iter_mut().for_each(|e| *e = empty());

    name_count
}
