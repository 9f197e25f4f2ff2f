//! Static tables used by the primality test and the exponent annotation

/// The first 13 primes, used as trial divisors and as the ordered pool of Miller-Rabin witnesses
pub const SMALL_PRIMES: [u8; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Pairs of (witness count, exclusive upper bound), sorted by bound. Testing an integer below a
/// bound with the first `witness count` entries of [SMALL_PRIMES] gives an exact verdict.
///
/// References:
/// - G. Jaeschke, "On strong pseudoprimes to several bases", Math. Comp. 61 (1993)
/// - Y. Jiang, Y. Deng, "Strong pseudoprimes to the first eight prime bases", Math. Comp. 83 (2014)
/// - J. Sorenson, J. Webster, "Strong pseudoprimes to twelve prime bases", Math. Comp. 86 (2017)
pub const MILLER_RABIN_BOUNDS: [(usize, u128); 10] = [
    (1, 2_047),
    (2, 1_373_653),
    (3, 25_326_001),
    (4, 3_215_031_751),
    (5, 2_152_302_898_747),
    (6, 3_474_749_660_383),
    (7, 341_550_071_728_321),
    (9, 3_825_123_056_546_413_051),
    (12, 318_665_857_834_031_151_167_461),
    (13, 3_317_044_064_679_887_385_961_981),
];

/// Exponents p of the known Mersenne primes 2^p - 1 (OEIS A000043), sorted
pub const MERSENNE_EXPONENTS: [u64; 52] = [
    2, 3, 5, 7, 13, 17, 19, 31, 61, 89, 107, 127, 521, 607, 1279, 2203, 2281, 3217, 4253, 4423,
    9689, 9941, 11213, 19937, 21701, 23209, 44497, 86243, 110503, 132049, 216091, 756839, 859433,
    1257787, 1398269, 2976221, 3021377, 6972593, 13466917, 20996011, 24036583, 25964951,
    30402457, 32582657, 37156667, 42643801, 43112609, 57885161, 74207281, 77232917, 82589933,
    136279841,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        assert!(SMALL_PRIMES.windows(2).all(|w| w[0] < w[1]));
        assert!(MERSENNE_EXPONENTS.windows(2).all(|w| w[0] < w[1]));
        assert!(MILLER_RABIN_BOUNDS
            .windows(2)
            .all(|w| w[0].0 < w[1].0 && w[0].1 < w[1].1));
        let (count, _) = MILLER_RABIN_BOUNDS[MILLER_RABIN_BOUNDS.len() - 1];
        assert!(count <= SMALL_PRIMES.len());
    }
}
