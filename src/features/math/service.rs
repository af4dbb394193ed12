use thiserror::Error;

/// Longest Fibonacci prefix whose values fit in a `u64`.
pub const MAX_FIBONACCI_TERMS: u32 = 94;

#[derive(Debug, Error)]
#[error("lcm result exceeds the supported integer range")]
pub struct LcmOverflow;

/// First `count` Fibonacci numbers starting 0, 1, 1, 2, 3, ...
pub fn fibonacci(count: u32) -> Vec<u64> {
    let count = count as usize;
    let mut series: Vec<u64> = Vec::with_capacity(count);
    for index in 0..count {
        let value = match index {
            0 => 0,
            1 => 1,
            _ => series[index - 1] + series[index - 2],
        };
        series.push(value);
    }
    series
}

/// Prime elements of `values`, original order preserved.
pub fn filter_primes(values: &[i64]) -> Vec<i64> {
    values
        .iter()
        .copied()
        .filter(|value| is_prime(*value))
        .collect()
}

fn is_prime(value: i64) -> bool {
    if value < 2 {
        return false;
    }
    if value == 2 {
        return true;
    }
    if value % 2 == 0 {
        return false;
    }

    let value = value as u64;
    let mut divisor = 3u64;
    while divisor * divisor <= value {
        if value % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Pairwise GCD fold; `None` when `values` is empty. gcd(0, x) = |x|, so the
/// result is always non-negative.
pub fn fold_hcf(values: &[i64]) -> Option<u64> {
    let (first, rest) = values.split_first()?;
    let mut result = first.unsigned_abs();
    for value in rest {
        result = gcd(result, value.unsigned_abs());
    }
    Some(result)
}

/// Pairwise LCM fold; `None` when `values` is empty. Any zero operand makes
/// the result 0; negative operands contribute their absolute value.
pub fn fold_lcm(values: &[i64]) -> Result<Option<u64>, LcmOverflow> {
    let Some((first, rest)) = values.split_first() else {
        return Ok(None);
    };

    let mut result = first.unsigned_abs();
    for value in rest {
        result = checked_lcm(result, value.unsigned_abs()).ok_or(LcmOverflow)?;
    }
    Ok(Some(result))
}

fn checked_lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}
