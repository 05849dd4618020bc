//! Ranking and unranking of permutations.
//!
//! A permutation of degree `n` is mapped to an integer in `[0, n!)` with
//! the linear-time swap-based scheme of Myrvold and Ruskey: at each step
//! the last element is swapped into place and the value it carried
//! becomes one digit of a factorial-base number.
//!
//! The ordering this induces is not lexicographic. In particular the
//! identity permutation has rank `n! - 1`, and rank 0 is the rotation
//! `[1, 2, ..., n - 1, 0]`.
//!
//! Ranks grow past 64 bits from degree 21 on, so all arithmetic is done
//! on arbitrary-precision [`BigUint`] values.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::permutation::inverse_permutation;
use crate::error::{Error, Result};

/// `n!` as an exact integer.
pub fn factorial(n: u32) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * BigUint::from(k))
}

/// Rank of the permutation given by `indices`.
///
/// # Errors
/// Returns [`Error::IndexNotFound`] if `indices` is not a permutation of
/// `0..indices.len()`.
pub fn rank(indices: &[u32]) -> Result<BigUint> {
    let inv = inverse_permutation(indices)?;

    Ok(rank_with_inverse(indices.to_vec(), inv))
}

/// Rank of `pi` given its inverse `inv`; both must describe the same
/// valid permutation.
pub(crate) fn rank_with_inverse(mut pi: Vec<u32>, mut inv: Vec<u32>) -> BigUint {
    let n = pi.len();
    let mut digits = Vec::with_capacity(n.saturating_sub(1));

    for m in (2..=n).rev() {
        let s = pi[m - 1];
        let j = inv[m - 1] as usize;

        pi.swap(m - 1, j);
        inv.swap(s as usize, m - 1);

        digits.push(s);
    }

    // digits[k] belongs to level n - k; fold from the innermost level out.
    let mut r = BigUint::zero();

    for (s, m) in digits.iter().rev().zip(2u64..) {
        r = r * BigUint::from(m) + BigUint::from(*s);
    }

    r
}

/// Permutation of degree `degree` whose rank is `r`.
///
/// # Errors
/// Returns [`Error::RankOutOfRange`] if `r >= degree!`.
pub fn unrank(r: &BigUint, degree: u32) -> Result<Vec<u32>> {
    if *r >= factorial(degree) {
        return Err(Error::RankOutOfRange { degree });
    }

    let mut pi: Vec<u32> = (0..degree).collect();
    let mut r = r.clone();

    for m in (1..=degree as usize).rev() {
        let modulus = BigUint::from(m);
        let digit = (&r % &modulus)
            .to_u64_digits()
            .first()
            .copied()
            .unwrap_or(0);

        pi.swap(m - 1, digit as usize);
        r /= modulus;
    }

    Ok(pi)
}
