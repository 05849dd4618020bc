#![allow(dead_code)]

/// Decodes a hex string into a 16-byte block.
pub fn block(hex: &str) -> [u8; 16] {
    let mut out = [0u8; 16];

    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).unwrap();
    }

    out
}

/// Pearson's chi-square statistic of `counts` against the uniform
/// distribution over `counts.len()` bins.
pub fn chi_square(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;

    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

/// Upper acceptance bound for [`chi_square`]: mean plus three standard
/// deviations of the chi-square distribution with `bins - 1` degrees of
/// freedom.
pub fn chi_square_bound(bins: usize) -> f64 {
    let df = (bins - 1) as f64;
    df + 3.0 * (2.0 * df).sqrt()
}

/// Asserts that the number of set bits in `bytes` is within three
/// standard deviations of half the bit count.
pub fn assert_bit_balance(bytes: &[u8]) {
    let bits = (bytes.len() * 8) as f64;
    let ones: u32 = bytes.iter().map(|b| b.count_ones()).sum();

    let deviation = (ones as f64 - bits / 2.0).abs();
    let sigma = (bits / 4.0).sqrt();

    assert!(
        deviation < 3.0 * sigma,
        "{ones} set bits out of {bits}, deviation {deviation:.1} exceeds 3 sigma ({sigma:.1})"
    );
}
