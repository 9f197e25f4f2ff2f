//! Backend implementations for integers

use crate::traits::{BitTest, ModInt};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::RefNum;

macro_rules! impl_bittest_prim {
    ($($T:ty)*) => {$(
        impl BitTest for $T {
            #[inline]
            fn bits(&self) -> usize {
                (<$T>::BITS - self.leading_zeros()) as usize
            }
            #[inline]
            fn bit(&self, position: usize) -> bool {
                (*self >> position) & 1 == 1
            }
            #[inline]
            fn trailing_zeros(&self) -> usize {
                if *self == 0 {
                    0
                } else {
                    <$T>::trailing_zeros(*self) as usize
                }
            }
        }
    )*}
}
impl_bittest_prim!(u8 u16 u32 u64 u128 usize);

impl BitTest for BigUint {
    #[inline]
    fn bits(&self) -> usize {
        BigUint::bits(self) as usize
    }
    #[inline]
    fn bit(&self, position: usize) -> bool {
        BigUint::bit(self, position as u64)
    }
    #[inline]
    fn trailing_zeros(&self) -> usize {
        match BigUint::trailing_zeros(self) {
            Some(a) => a as usize,
            None => 0,
        }
    }
}

// The modular operations are built only from comparison, subtraction and bit access, so
// intermediate values never exceed the modulus and fixed width types cannot overflow.
impl<T> ModInt<&T, &T> for &T
where
    T: Integer + BitTest,
    for<'r> &'r T: RefNum<T>,
{
    type Output = T;

    fn addm(self, rhs: &T, m: &T) -> T {
        let a = self % m;
        let b = rhs % m;
        let gap = m - &b; // a + b >= m iff a >= m - b
        if a >= gap {
            a - gap
        } else {
            a + b
        }
    }

    fn mulm(self, rhs: &T, m: &T) -> T {
        // double-and-add over the bits of rhs
        let mut a = self % m;
        let mut result = T::zero();
        for i in 0..rhs.bits() {
            if rhs.bit(i) {
                result = (&result).addm(&a, m);
            }
            a = (&a).addm(&a, m);
        }
        result
    }

    fn powm(self, exp: &T, m: &T) -> T {
        // square-and-multiply over the bits of exp
        let mut base = self % m;
        let mut result = &T::one() % m;
        for i in 0..exp.bits() {
            if exp.bit(i) {
                result = (&result).mulm(&base, m);
            }
            base = (&base).mulm(&base, m);
        }
        result
    }
}
