use crate::traits::{BitTest, ModInt, PrimalityUtils};
use num_integer::Integer;
use num_traits::{RefNum, ToPrimitive};

/// Single witness round of the Miller-Rabin test, where `n - 1 = d * 2^r` and d is odd.
///
/// Returns true if `base` proves that n is composite. A false result is inconclusive.
pub fn is_composite<T>(n: &T, n_minus_1: &T, base: &T, d: &T, r: usize) -> bool
where
    T: Integer,
    for<'r> &'r T: ModInt<&'r T, &'r T, Output = T>,
{
    let mut x = base.powm(d, n);
    if x.is_one() || &x == n_minus_1 {
        return false;
    }

    for _ in 1..r {
        x = (&x).mulm(&x, n);
        if &x == n_minus_1 {
            return false;
        }
        if x.is_one() {
            // nontrivial square root of 1
            return true;
        }
    }
    true
}

impl<T: PrimalityBase> PrimalityUtils for T
where
    for<'r> &'r T: PrimalityRefBase<T>,
{
    fn is_sprp(&self, base: T) -> bool {
        let two = T::from(2u8);
        if self <= &two {
            return self == &two;
        }
        if self.is_even() {
            return false;
        }
        if (&base % self).is_zero() {
            return true;
        }

        // find 2^shift*u + 1 = n
        let tm1 = self - &T::one();
        let shift = tm1.trailing_zeros();
        let u = &tm1 >> shift;

        !is_composite(self, &tm1, &base, &u, shift)
    }
}

pub trait PrimalityBase: Integer + Clone + ToPrimitive + From<u8> + BitTest {}
impl<T: Integer + Clone + ToPrimitive + From<u8> + BitTest> PrimalityBase for T {}

pub trait PrimalityRefBase<Base>:
    RefNum<Base>
    + std::ops::Shr<usize, Output = Base>
    + for<'r> ModInt<&'r Base, &'r Base, Output = Base>
{
}
impl<T, Base> PrimalityRefBase<Base> for T where
    T: RefNum<Base>
        + std::ops::Shr<usize, Output = Base>
        + for<'r> ModInt<&'r Base, &'r Base, Output = Base>
{
}
