/// Map a possibly out-of-range index onto `0..len` with reflect-101
/// extrapolation (`gfedcb|abcdefgh|gfedcba`): the edge sample is the mirror
/// axis and is not repeated.
///
/// Reflection repeats, so offsets wider than the axis still land in range.
/// A single-sample axis maps every index to 0.
pub fn reflect_101(index: isize, len: usize) -> usize {
    debug_assert!(len > 0, "cannot reflect into an empty axis");
    if len <= 1 {
        return 0;
    }
    let n = len as isize;
    let period = 2 * (n - 1);
    let folded = index.rem_euclid(period);
    if folded >= n {
        (period - folded) as usize
    } else {
        folded as usize
    }
}
