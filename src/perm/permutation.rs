use std::fmt;
use std::ops::Mul;

use log::trace;
use num_bigint::BigUint;
use rand_core::RngCore;

use super::{rank, shuffle};
use crate::error::{Error, Result};

fn check_degree(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::DegreeTooLarge { degree: len })
}

/// Gathers `input` through `perm`: `out[i] = input[perm[i]]`.
///
/// # Errors
/// - [`Error::DegreeMismatch`] if the slices differ in length.
/// - [`Error::InvalidPermutation`] if an entry of `perm` is out of range.
pub fn apply_permutation<T: Clone>(input: &[T], perm: &[u32]) -> Result<Vec<T>> {
    if input.len() != perm.len() {
        return Err(Error::DegreeMismatch {
            left: perm.len(),
            right: input.len(),
        });
    }

    perm.iter()
        .map(|&p| input.get(p as usize).cloned().ok_or(Error::InvalidPermutation))
        .collect()
}

/// Inverse of the index sequence `indices`.
///
/// # Errors
/// - [`Error::IndexNotFound`] naming the smallest value in
///   `0..indices.len()` that does not occur in `indices`.
/// - [`Error::DegreeTooLarge`] if `indices` has 2³² entries or more.
pub fn inverse_permutation(indices: &[u32]) -> Result<Vec<u32>> {
    let n = indices.len();
    check_degree(n)?;

    let mut inv: Vec<Option<u32>> = vec![None; n];

    for (pos, &value) in (0u32..).zip(indices) {
        if let Some(slot) = inv.get_mut(value as usize) {
            slot.get_or_insert(pos);
        }
    }

    inv.into_iter()
        .enumerate()
        .map(|(index, pos)| pos.ok_or(Error::IndexNotFound { index }))
        .collect()
}

/// A permutation of `0..degree`.
///
/// The value always holds a bijection: every constructor validates its
/// input and every mutating operation preserves the invariant.
///
/// `p.apply(xs)[i] == xs[p[i]]`, and composition follows the same
/// convention, `(p * q).indices()[i] == q.indices()[p.indices()[i]]`, so
/// `(p * q).apply(xs) == p.apply(&q.apply(xs))`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Permutation {
    indices: Vec<u32>,
}

impl Permutation {
    /// The identity permutation of the given degree.
    pub fn new(degree: u32) -> Self {
        Self {
            indices: (0..degree).collect(),
        }
    }

    /// Number of elements permuted.
    pub fn degree(&self) -> u32 {
        self.indices.len() as u32
    }

    /// The image of every position, `indices()[i] = p(i)`.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<u32> {
        self.indices
    }

    pub fn is_identity(&self) -> bool {
        (0u32..).zip(&self.indices).all(|(i, &p)| i == p)
    }

    /// Shuffles in place with the Fisher–Yates algorithm.
    ///
    /// # Errors
    /// Returns [`Error::Entropy`] if `rng` fails; the permutation is then
    /// unchanged.
    pub fn shuffle<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        shuffle::fisher_yates(&mut self.indices, rng)
    }

    /// Shuffles in place with the recursive-splitting algorithm.
    ///
    /// # Errors
    /// Returns [`Error::Entropy`] if `rng` fails or keeps producing
    /// one-sided splits; the permutation is then still valid but not
    /// uniformly distributed.
    pub fn shuffle_rs<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        shuffle::recursive_split(&mut self.indices, rng)
    }

    /// Exchanges the images of positions `a` and `b`.
    ///
    /// # Errors
    /// Returns [`Error::PositionOutOfRange`] if either position is not
    /// below the degree.
    pub fn pivot(&mut self, a: u32, b: u32) -> Result<()> {
        let degree = self.indices.len();

        for position in [a, b] {
            if position as usize >= degree {
                return Err(Error::PositionOutOfRange {
                    position: position as usize,
                    degree,
                });
            }
        }

        self.indices.swap(a as usize, b as usize);

        Ok(())
    }

    /// The inverse permutation: `p.inverse().compose(&p)` is the identity.
    pub fn inverse(&self) -> Self {
        let mut indices = vec![0u32; self.indices.len()];

        for (pos, &value) in (0u32..).zip(&self.indices) {
            indices[value as usize] = pos;
        }

        Self { indices }
    }

    /// Composition: `out[i] = other[self[i]]`.
    ///
    /// # Errors
    /// Returns [`Error::DegreeMismatch`] if the degrees differ.
    pub fn compose(&self, other: &Permutation) -> Result<Permutation> {
        let indices = self.apply(other.indices())?;

        trace!("composed two permutations of degree {}", indices.len());

        Ok(Self { indices })
    }

    /// Rearranges `input`: `out[i] = input[self[i]]`.
    ///
    /// # Errors
    /// Returns [`Error::DegreeMismatch`] if `input` is not exactly
    /// `degree` elements long.
    pub fn apply<T: Clone>(&self, input: &[T]) -> Result<Vec<T>> {
        apply_permutation(input, &self.indices)
    }

    /// Rank in `[0, degree!)`; see [`rank::rank`].
    pub fn rank(&self) -> BigUint {
        rank::rank_with_inverse(self.indices.clone(), self.inverse().into_indices())
    }

    /// The permutation of degree `degree` with rank `r`.
    ///
    /// # Errors
    /// Returns [`Error::RankOutOfRange`] if `r >= degree!`.
    pub fn unrank(r: &BigUint, degree: u32) -> Result<Self> {
        Ok(Self {
            indices: rank::unrank(r, degree)?,
        })
    }
}

impl Default for Permutation {
    fn default() -> Self {
        Self::new(0)
    }
}

impl TryFrom<Vec<u32>> for Permutation {
    type Error = Error;

    fn try_from(indices: Vec<u32>) -> Result<Self> {
        check_degree(indices.len())?;

        let mut seen = vec![false; indices.len()];

        for &value in &indices {
            match seen.get_mut(value as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(Error::InvalidPermutation),
            }
        }

        Ok(Self { indices })
    }
}

impl From<Permutation> for Vec<u32> {
    fn from(perm: Permutation) -> Self {
        perm.indices
    }
}

impl Mul for &Permutation {
    type Output = Permutation;

    /// Composition, see [`Permutation::compose`].
    ///
    /// # Panics
    /// Panics if the degrees differ.
    fn mul(self, rhs: Self) -> Permutation {
        assert_eq!(
            self.degree(),
            rhs.degree(),
            "cannot compose permutations of different degrees"
        );

        let indices = self.indices.iter().map(|&p| rhs.indices[p as usize]).collect();

        Permutation { indices }
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        for (i, p) in self.indices.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }

        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_permutation_reports_first_missing_index() {
        assert_eq!(inverse_permutation(&[2, 0, 1]), Ok(vec![1, 2, 0]));
        assert_eq!(
            inverse_permutation(&[0, 0, 2]),
            Err(Error::IndexNotFound { index: 1 })
        );
        assert_eq!(
            inverse_permutation(&[5, 1]),
            Err(Error::IndexNotFound { index: 0 })
        );
    }

    #[test]
    fn try_from_rejects_duplicates_and_out_of_range() {
        assert_eq!(
            Permutation::try_from(vec![1, 1, 0]),
            Err(Error::InvalidPermutation)
        );
        assert_eq!(
            Permutation::try_from(vec![0, 3, 1]),
            Err(Error::InvalidPermutation)
        );
        assert!(Permutation::try_from(vec![2, 0, 1]).is_ok());
    }

    #[test]
    fn pivot_checks_positions() {
        let mut p = Permutation::new(3);

        p.pivot(0, 2).unwrap();
        assert_eq!(p.indices(), &[2, 1, 0]);

        assert_eq!(
            p.pivot(1, 3),
            Err(Error::PositionOutOfRange {
                position: 3,
                degree: 3
            })
        );
    }

    #[test]
    fn rank_agrees_with_checked_rank() {
        for r in [0u32, 1, 17, 359, 718] {
            let p = Permutation::unrank(&BigUint::from(r), 6).unwrap();

            assert_eq!(p.rank(), BigUint::from(r));
            assert_eq!(Ok(p.rank()), rank::rank(p.indices()));
        }

        assert_eq!(Permutation::new(6).rank(), BigUint::from(719u32));
        assert_eq!(Permutation::new(0).rank(), BigUint::from(0u32));
    }

    #[test]
    fn display_lists_indices() {
        let p = Permutation::try_from(vec![2, 0, 1]).unwrap();

        assert_eq!(p.to_string(), "[2, 0, 1]");
        assert_eq!(Permutation::new(0).to_string(), "[]");
    }
}
