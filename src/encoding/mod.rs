/*!
Character width types and traits.

Every bounded operation in this crate is written once, generically over `Unit`.  The two widths that matter in practice are `u8` (narrow, "A" suffix) and `u16` (wide, "W" suffix).
*/
use libc::c_char;

macro_rules! naive_unit_impl {
    ($ty_name:ident) => {
        impl Unit for $ty_name {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0
            }
        }
    };
}

/**
Abstracts over a character width.

In practice, this will be implemented by a marker type (which is not intended to actually be instantiated anywhere), along with a concrete type that implements `Unit`.
*/
pub trait Encoding {
    /**
    The unit type used for buffers of this width.
    */
    type Unit: Unit + TextUnit;

    /**
    The type used for a single unit at the C boundary.  Must be binary-compatible with `Unit`.
    */
    type FfiUnit;
}

/**
A single character cell in a nul-terminated buffer.
*/
pub trait Unit: Copy {
    fn zero() -> Self;
    fn is_zero(&self) -> bool;
}

/**
Units which formatted text can be encoded into.

This is how `cch::printf` turns the output of `core::fmt` into units of the destination's width.
*/
pub trait TextUnit: Unit {
    /**
    Encodes `s`, passing each unit to `emit` in order.

    Encoding stops as soon as `emit` returns `false`; the return value is `false` in that case, `true` if all of `s` was emitted.
    */
    fn encode_str<F>(s: &str, emit: F) -> bool where F: FnMut(Self) -> bool;
}

naive_unit_impl! { u8 }
naive_unit_impl! { u16 }
naive_unit_impl! { u32 }

impl TextUnit for u8 {
    fn encode_str<F>(s: &str, mut emit: F) -> bool where F: FnMut(Self) -> bool {
        s.bytes().all(|b| emit(b))
    }
}

impl TextUnit for u16 {
    fn encode_str<F>(s: &str, mut emit: F) -> bool where F: FnMut(Self) -> bool {
        s.encode_utf16().all(|cu| emit(cu))
    }
}

/**
Narrow (8-bit) buffers, typically `char *` in foreign interfaces.

Formatted text is written as UTF-8.  No locale conversion is performed.
*/
pub enum Narrow {}

impl Encoding for Narrow {
    type Unit = u8;
    type FfiUnit = c_char;
}

/**
Wide (16-bit) buffers, typically `WCHAR *` or `char16_t *` in foreign interfaces.

Formatted text is written as UTF-16.
*/
pub enum Wide {}

impl Encoding for Wide {
    type Unit = u16;
    type FfiUnit = u16;
}
