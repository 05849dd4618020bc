//! In-place shuffles over arbitrary slices.
//!
//! Both algorithms read raw bytes from an injected [`RngCore`] and produce
//! a uniformly distributed permutation of the slice whenever the source is
//! uniform. Randomness is drawn in one `try_fill_bytes` call per shuffle
//! (or per split attempt), which keeps the number of counter blocks
//! consumed from a PRF stream predictable.

use log::trace;
use rand_core::RngCore;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Bytes drawn per position by [`fisher_yates`].
const WORD_BYTES: usize = 8;

fn check_degree(len: usize) -> Result<()> {
    if u32::try_from(len).is_err() {
        return Err(Error::DegreeTooLarge { degree: len });
    }

    Ok(())
}

/// Durstenfeld's in-place Fisher–Yates shuffle.
///
/// Draws `n - 1` little-endian 64-bit words for a slice of length `n`;
/// word `k` selects the partner of position `n - 1 - k` as
/// `word % (position + 1)`. The modulo bias is below `n / 2⁶⁴`.
///
/// Slices shorter than two elements are left untouched and draw nothing.
///
/// # Errors
/// - [`Error::DegreeTooLarge`] if the slice has 2³² elements or more.
/// - [`Error::Entropy`] if the source fails; the slice is unchanged.
pub fn fisher_yates<T, R: RngCore + ?Sized>(items: &mut [T], rng: &mut R) -> Result<()> {
    let n = items.len();

    check_degree(n)?;

    if n < 2 {
        return Ok(());
    }

    trace!("Fisher-Yates shuffle of degree {n}");

    let mut words = vec![0u8; (n - 1) * WORD_BYTES];
    rng.try_fill_bytes(&mut words).map_err(Error::entropy)?;

    for (i, chunk) in (1..n).rev().zip(words.chunks_exact(WORD_BYTES)) {
        let mut word = [0u8; WORD_BYTES];
        word.copy_from_slice(chunk);

        let j = (u64::from_le_bytes(word) % (i as u64 + 1)) as usize;
        items.swap(i, j);
    }

    words.zeroize();

    Ok(())
}

/// Recursive-splitting shuffle.
///
/// Each level draws one bit per element, moves the elements whose bit is
/// clear to the front and then shuffles both groups the same way. A pair
/// draws a single byte and is swapped when its low bit is set.
///
/// A draw that sends every element to the same side leaves the group as
/// it was and is repeated. Pending groups are kept on an explicit work
/// list, so stack usage does not depend on the drawn bits.
///
/// This consumes far fewer random bits than [`fisher_yates`] for small
/// slices, at the cost of a data-dependent number of draws.
///
/// # Errors
/// - [`Error::DegreeTooLarge`] if the slice has 2³² elements or more.
/// - [`Error::Entropy`] if the source fails, or if it produces
///   [`MAX_ONE_SIDED_DRAWS`] one-sided draws in a row for one group. The
///   slice is then a valid rearrangement of the input, but not a uniform
///   one.
pub fn recursive_split<T, R: RngCore + ?Sized>(items: &mut [T], rng: &mut R) -> Result<()> {
    check_degree(items.len())?;

    trace!("recursive-splitting shuffle of degree {}", items.len());

    // Half-open ranges still to shuffle; the left group is popped first.
    let mut pending = vec![(0, items.len())];

    while let Some((start, end)) = pending.pop() {
        let group = &mut items[start..end];

        match group.len() {
            0 | 1 => {}
            2 => {
                let mut bit = [0u8; 1];
                rng.try_fill_bytes(&mut bit).map_err(Error::entropy)?;

                if bit[0] & 1 == 1 {
                    group.swap(0, 1);
                }
            }
            _ => {
                let left = start + partition(group, rng)?;

                pending.push((left, end));
                pending.push((start, left));
            }
        }
    }

    Ok(())
}

/// Consecutive one-sided draws tolerated for a single group before the
/// source is rejected. A uniform source hits this with probability below
/// 2⁻¹²⁸ for groups of three or more.
pub const MAX_ONE_SIDED_DRAWS: usize = 64;

/// Splits `group` by fresh random bits, returning the size of the left
/// group, which is strictly between zero and `group.len()`.
fn partition<T, R: RngCore + ?Sized>(group: &mut [T], rng: &mut R) -> Result<usize> {
    let n = group.len();
    let mut bits = vec![0u8; n.div_ceil(8)];

    for _ in 0..MAX_ONE_SIDED_DRAWS {
        rng.try_fill_bytes(&mut bits).map_err(Error::entropy)?;

        let mut left = 0;

        for i in 0..n {
            if (bits[i / 8] >> (i % 8)) & 1 == 0 {
                group.swap(left, i);
                left += 1;
            }
        }

        if left != 0 && left != n {
            bits.zeroize();
            return Ok(left);
        }
    }

    bits.zeroize();

    Err(Error::Entropy(format!(
        "{MAX_ONE_SIDED_DRAWS} consecutive one-sided splits of {n} elements"
    )))
}
