/// The largest exponent accepted by mersenne.ca, used as the default validation ceiling
pub const DEFAULT_EXPONENT_CEILING: u128 = 9_999_999_967;

/// The largest exponent accepted by mersenne.org
pub const MERSENNE_ORG_CEILING: u128 = 999_999_937;

/// Configuration for validating exponent candidates.
///
/// The ceiling is inclusive. It may be raised above the range covered by the deterministic
/// witness table; candidates beyond the table are then reported as unsupported instead of
/// being tested with fewer witnesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentConfig {
    /// Largest exponent (inclusive) that is considered valid
    pub ceiling: u128,
}

impl ExponentConfig {
    pub fn new(ceiling: u128) -> Self {
        Self { ceiling }
    }

    /// Create a configuration limited to the exponents accepted by mersenne.org
    pub fn mersenne_org() -> Self {
        Self::new(MERSENNE_ORG_CEILING)
    }
}

impl Default for ExponentConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EXPONENT_CEILING)
    }
}

/// Bit access on unsigned integers, used by the binary modular algorithms
pub trait BitTest {
    /// Number of significant bits
    fn bits(&self) -> usize;

    /// Whether the bit at `position` (counting from the least significant bit) is set
    fn bit(&self, position: usize) -> bool;

    /// Number of trailing zero bits, zero is reported as having no trailing zeros
    fn trailing_zeros(&self) -> usize;
}

/// This trait describes modular arithmetic on a integer
pub trait ModInt<Rhs = Self, Modulus = Self> {
    type Output;

    /// Return (self + rhs) % m
    fn addm(self, rhs: Rhs, m: Modulus) -> Self::Output;

    /// Return (self * rhs) % m
    fn mulm(self, rhs: Rhs, m: Modulus) -> Self::Output;

    /// Return (self ^ exp) % m
    fn powm(self, exp: Rhs, m: Modulus) -> Self::Output;
}

/// Primality tests on a single integer
pub trait PrimalityUtils: Sized {
    /// Test if the integer is a strong probable prime (based on miller-rabin test) to the given base.
    ///
    /// Integers below 2 and even integers other than 2 are never strong probable primes.
    /// A base that is a multiple of the integer proves nothing, so the test passes.
    fn is_sprp(&self, base: Self) -> bool;
}
