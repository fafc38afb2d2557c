/// Number of candidates a search over `n` numbers with `k` operands visits:
/// `C(n, k) * k! * 4^(k - 1)`, i.e. `n! / (n - k)! * 4^(k - 1)`.
///
/// Returns `None` if the count does not fit in a `u128`.
pub fn candidate_count(n: usize, k: usize) -> Option<u128> {
    if k == 0 || k > n {
        return Some(0);
    }

    let n = u128::try_from(n).ok()?;
    let k = u128::try_from(k).ok()?;

    let arrangements = ((n - k + 1)..=n).try_fold(1u128, |acc, factor| acc.checked_mul(factor))?;
    let gaps = u32::try_from(k - 1).ok()?;
    let assignments = 4u128.checked_pow(gaps)?;

    arrangements.checked_mul(assignments)
}
