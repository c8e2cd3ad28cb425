/*!
Overflow-checked unsigned arithmetic.

Overflow is detected without widening: addition compares the wrapped sum against an operand, multiplication checks the quotient bound before multiplying.  On overflow the result is the all-ones `SENTINEL`, so a caller that ignores the error still sees an obviously saturated value rather than a silently wrapped one.
*/
use crate::error::{Error, Result};

/**
Unsigned integer widths supported by the checked helpers.
*/
pub trait Word: Copy + Eq + Ord {
    const ZERO: Self;

    /**
    The value stored as the result of an overflowing operation.  Always `MAX`.
    */
    const SENTINEL: Self;

    fn wrapping_add(self, other: Self) -> Self;
    fn wrapping_mul(self, other: Self) -> Self;

    /**
    Integer division.  Must only be called with a non-zero divisor.
    */
    fn div(self, other: Self) -> Self;
}

macro_rules! word_impl {
    ($($ty_name:ident),*) => {
        $(
            impl Word for $ty_name {
                const ZERO: Self = 0;
                const SENTINEL: Self = $ty_name::MAX;

                #[inline]
                fn wrapping_add(self, other: Self) -> Self {
                    $ty_name::wrapping_add(self, other)
                }

                #[inline]
                fn wrapping_mul(self, other: Self) -> Self {
                    $ty_name::wrapping_mul(self, other)
                }

                #[inline]
                fn div(self, other: Self) -> Self {
                    self / other
                }
            }
        )*
    };
}

word_impl! { u16, u32, u64, usize }

/**
The `u32` result sentinel.
*/
pub const DWORD_ERROR: u32 = 0xffff_ffff;

/**
The `usize` result sentinel.
*/
pub const SIZE_T_ERROR: usize = usize::MAX;

/**
Adds two words, failing with `Error::ArithmeticOverflow` if the sum wraps.
*/
pub fn checked_word_add<W>(augend: W, addend: W) -> Result<W> where W: Word {
    let sum = augend.wrapping_add(addend);
    if sum >= augend {
        Ok(sum)
    } else {
        Err(Error::ArithmeticOverflow)
    }
}

/**
Multiplies two words, failing with `Error::ArithmeticOverflow` if the product does not fit.

A zero operand always yields zero; the quotient bound is only computed for a non-zero multiplier.
*/
pub fn checked_word_mult<W>(multiplicand: W, multiplier: W) -> Result<W> where W: Word {
    if multiplicand == W::ZERO || multiplier == W::ZERO {
        return Ok(W::ZERO);
    }

    if multiplicand > W::SENTINEL.div(multiplier) {
        Err(Error::ArithmeticOverflow)
    } else {
        Ok(multiplicand.wrapping_mul(multiplier))
    }
}

/**
Stores the outcome of a checked operation in `result`: the value on success, `W::SENTINEL` on failure.
*/
#[inline]
pub fn store<W>(r: Result<W>, result: &mut W) -> Result<()> where W: Word {
    match r {
        Ok(v) => {
            *result = v;
            Ok(())
        },
        Err(err) => {
            *result = W::SENTINEL;
            Err(err)
        },
    }
}

pub fn dword_add(augend: u32, addend: u32) -> Result<u32> {
    checked_word_add(augend, addend)
}

pub fn dword_mult(multiplicand: u32, multiplier: u32) -> Result<u32> {
    checked_word_mult(multiplicand, multiplier)
}

pub fn size_t_add(augend: usize, addend: usize) -> Result<usize> {
    checked_word_add(augend, addend)
}

pub fn size_t_mult(multiplicand: usize, multiplier: usize) -> Result<usize> {
    checked_word_mult(multiplicand, multiplier)
}

/**
`dword_add`, storing the sum or `DWORD_ERROR` in `result`.
*/
pub fn dword_add_into(augend: u32, addend: u32, result: &mut u32) -> Result<()> {
    store(dword_add(augend, addend), result)
}

/**
`dword_mult`, storing the product or `DWORD_ERROR` in `result`.
*/
pub fn dword_mult_into(multiplicand: u32, multiplier: u32, result: &mut u32) -> Result<()> {
    store(dword_mult(multiplicand, multiplier), result)
}

pub fn size_t_add_into(augend: usize, addend: usize, result: &mut usize) -> Result<()> {
    store(size_t_add(augend, addend), result)
}

pub fn size_t_mult_into(multiplicand: usize, multiplier: usize, result: &mut usize) -> Result<()> {
    store(size_t_mult(multiplicand, multiplier), result)
}
