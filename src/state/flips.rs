use super::BitSet;
use crate::error::InvalidArgument;

/// Number of ways to choose `k` items from `n`.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result = 1usize;
    for i in 1..=k {
        // Each step yields C(n - k + i, i), so the division is exact.
        result = result * (n - k + i) / i;
    }
    result
}

/// All masks over `n` coin positions with exactly `m` bits set, one per
/// combination of `m` positions chosen from `n`.
///
/// Masks are emitted in lexicographic order of their index tuples:
/// `{0, 1, 2}` first, then `{0, 1, 3}`, and so on up to
/// `{n - m, .., n - 1}`. The result always holds [`binomial`]`(n, m)`
/// entries.
pub fn generate_flips(n: usize, m: usize) -> Result<Vec<BitSet>, InvalidArgument> {
    check_arguments(n, m)?;
    let mut flips = Vec::with_capacity(binomial(n, m));
    let mut indices: Vec<usize> = (0..m).collect();
    loop {
        flips.push(indices.iter().copied().collect());
        // Rightmost index that has not reached its final position.
        let Some(i) = (0..m).rfind(|&i| indices[i] < n - m + i) else {
            break;
        };
        indices[i] += 1;
        for j in i + 1..m {
            indices[j] = indices[j - 1] + 1;
        }
    }
    Ok(flips)
}

/// Shared validation for puzzle construction and flip enumeration.
pub(crate) fn check_arguments(n: usize, m: usize) -> Result<(), InvalidArgument> {
    if n < 1 {
        return Err(InvalidArgument::NoCoins(n));
    }
    if m < 1 {
        return Err(InvalidArgument::NoFlipped(m));
    }
    if m > n {
        return Err(InvalidArgument::MoreFlippedThanCoins { n, m });
    }
    Ok(())
}
