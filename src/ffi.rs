/*!
C ABI exports.

Each export validates its arguments, calls into `raw` or `intsafe`, and returns one of the status codes in `error`.  Out-parameters may be null where noted; they are only written as documented.

With the `log` feature enabled, every rejected call is traced at `trace` level.
*/
use libc::{c_char, size_t};
use crate::encoding::{Encoding, Narrow, Wide};
use crate::error::{self, Error, Result, ERROR_INVALID_PARAMETER};
use crate::intsafe::{self, Word};
use crate::raw;

#[cfg(feature = "log")]
fn trace_failure(name: &str, err: Error) {
    log::trace!("{}: {} ({:#010x})", name, err, err.code());
}

#[cfg(not(feature = "log"))]
#[inline(always)]
fn trace_failure(_name: &str, _err: Error) {}

fn report<T>(name: &str, r: Result<T>) -> i32 {
    if let Err(ref err) = r {
        trace_failure(name, *err);
    }
    error::status(r)
}

unsafe fn length<E>(name: &str, psz: *const E::FfiUnit, cch_max: size_t, pcch: *mut size_t) -> i32
where E: Encoding {
    let r = raw::length(psz.cast::<E::Unit>(), cch_max);
    if let Ok(len) = r {
        if !pcch.is_null() {
            *pcch = len;
        }
    }
    report(name, r)
}

unsafe fn copy<E>(name: &str, dest: *mut E::FfiUnit, cch_dest: size_t, src: *const E::FfiUnit) -> i32
where E: Encoding {
    let r = raw::copy(dest.cast::<E::Unit>(), cch_dest, src.cast::<E::Unit>());
    report(name, r)
}

unsafe fn cat<E>(name: &str, dest: *mut E::FfiUnit, cch_dest: size_t, src: *const E::FfiUnit) -> i32
where E: Encoding {
    let r = raw::cat(dest.cast::<E::Unit>(), cch_dest, src.cast::<E::Unit>());
    report(name, r)
}

unsafe fn arith<W>(name: &str, r: Result<W>, result: *mut W) -> i32 where W: Word {
    if result.is_null() {
        trace_failure(name, Error::InvalidParameter);
        return ERROR_INVALID_PARAMETER;
    }
    let r = intsafe::store(r, &mut *result);
    report(name, r)
}

/**
Measures a narrow string.  On success, stores the length in `*pcch` unless `pcch` is null.
*/
#[no_mangle]
pub unsafe extern "C" fn strsafe_cch_length_a(psz: *const c_char, cch_max: size_t, pcch: *mut size_t) -> i32 {
    length::<Narrow>("strsafe_cch_length_a", psz, cch_max, pcch)
}

/**
Measures a wide string.  On success, stores the length in `*pcch` unless `pcch` is null.
*/
#[no_mangle]
pub unsafe extern "C" fn strsafe_cch_length_w(psz: *const u16, cch_max: size_t, pcch: *mut size_t) -> i32 {
    length::<Wide>("strsafe_cch_length_w", psz, cch_max, pcch)
}

#[no_mangle]
pub unsafe extern "C" fn strsafe_cch_copy_a(dest: *mut c_char, cch_dest: size_t, src: *const c_char) -> i32 {
    copy::<Narrow>("strsafe_cch_copy_a", dest, cch_dest, src)
}

#[no_mangle]
pub unsafe extern "C" fn strsafe_cch_copy_w(dest: *mut u16, cch_dest: size_t, src: *const u16) -> i32 {
    copy::<Wide>("strsafe_cch_copy_w", dest, cch_dest, src)
}

#[no_mangle]
pub unsafe extern "C" fn strsafe_cch_cat_a(dest: *mut c_char, cch_dest: size_t, src: *const c_char) -> i32 {
    cat::<Narrow>("strsafe_cch_cat_a", dest, cch_dest, src)
}

#[no_mangle]
pub unsafe extern "C" fn strsafe_cch_cat_w(dest: *mut u16, cch_dest: size_t, src: *const u16) -> i32 {
    cat::<Wide>("strsafe_cch_cat_w", dest, cch_dest, src)
}

/**
Stores `augend + addend` in `*result`, or `0xffffffff` on overflow.  Fails if `result` is null.
*/
#[no_mangle]
pub unsafe extern "C" fn strsafe_dword_add(augend: u32, addend: u32, result: *mut u32) -> i32 {
    arith("strsafe_dword_add", intsafe::dword_add(augend, addend), result)
}

/**
Stores `multiplicand * multiplier` in `*result`, or `0xffffffff` on overflow.  Fails if `result` is null.
*/
#[no_mangle]
pub unsafe extern "C" fn strsafe_dword_mult(multiplicand: u32, multiplier: u32, result: *mut u32) -> i32 {
    arith("strsafe_dword_mult", intsafe::dword_mult(multiplicand, multiplier), result)
}

#[no_mangle]
pub unsafe extern "C" fn strsafe_size_t_add(augend: size_t, addend: size_t, result: *mut size_t) -> i32 {
    arith("strsafe_size_t_add", intsafe::size_t_add(augend, addend), result)
}

#[no_mangle]
pub unsafe extern "C" fn strsafe_size_t_mult(multiplicand: size_t, multiplier: size_t, result: *mut size_t) -> i32 {
    arith("strsafe_size_t_mult", intsafe::size_t_mult(multiplicand, multiplier), result)
}
