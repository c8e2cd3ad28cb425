/*!
Bounded operations over raw pointers.

These mirror the functions in `cch` for callers holding foreign pointers and an explicit capacity.  Capacities are validated before any memory is touched, and a source string is never read past the capacity of the operation it is used in.
*/
use std::fmt;
use std::mem;
use std::slice;
use crate::cch::{self, STRSAFE_MAX_CCH};
use crate::encoding::{TextUnit, Unit};
use crate::error::{Error, Result};
use crate::intsafe::size_t_mult;

/**
Counts the units before the terminator of `psz`, reading at most `limit` units.

Returns `limit` if no terminator was found.
*/
unsafe fn scan<U>(psz: *const U, limit: usize) -> usize where U: Unit {
    let mut len = 0;
    let mut cur = psz;

    while len < limit && !(*cur).is_zero() {
        len += 1;
        cur = cur.offset(1);
    }

    len
}

/**
Re-borrows `cch` units at `ptr` as a slice, after checking that the capacity is in range and that its size in bytes can be addressed.
*/
unsafe fn dest_slice<'a, U>(ptr: *mut U, cch: usize) -> Result<&'a mut [U]> where U: Unit {
    cch::check_capacity(cch)?;
    let bytes = size_t_mult(cch, mem::size_of::<U>()).map_err(|_| Error::InvalidParameter)?;
    if bytes > isize::MAX as usize || ptr.is_null() {
        return Err(Error::InvalidParameter);
    }
    Ok(slice::from_raw_parts_mut(ptr, cch))
}

/**
Borrows the leading, non-terminator units of `psz`, reading at most `limit` units.
*/
unsafe fn src_slice<'a, U>(psz: *const U, limit: usize) -> Result<&'a [U]> where U: Unit {
    if psz.is_null() {
        return Err(Error::InvalidParameter);
    }
    Ok(slice::from_raw_parts(psz, scan(psz, limit)))
}

/**
Returns the number of units before the terminator of `psz`.

Fails without reading if `cch_max` is above `STRSAFE_MAX_CCH` or `psz` is null, and fails if there is no terminator in the first `cch_max` units.

# Safety

`psz` must be readable up to its terminator, or for `cch_max` units, whichever comes first.
*/
pub unsafe fn length<U>(psz: *const U, cch_max: usize) -> Result<usize> where U: Unit {
    if cch_max > STRSAFE_MAX_CCH || psz.is_null() {
        return Err(Error::InvalidParameter);
    }

    let len = scan(psz, cch_max);
    if len == cch_max {
        Err(Error::InvalidParameter)
    } else {
        Ok(len)
    }
}

/**
Copies the string at `src` into the `cch_dest` units at `dest`, and terminates it.  See `cch::copy`.

Fails without writing if `cch_dest` is zero or above `STRSAFE_MAX_CCH`, or either pointer is null.

# Safety

`dest` must be writable for `cch_dest` units.  `src` must be readable up to its terminator, or for `cch_dest` units, whichever comes first.  The two regions must not overlap.
*/
pub unsafe fn copy<U>(dest: *mut U, cch_dest: usize, src: *const U) -> Result<usize> where U: Unit {
    let dest = dest_slice(dest, cch_dest)?;
    let src = src_slice(src, cch_dest)?;
    cch::copy(dest, src)
}

/**
Appends the string at `src` to the string in the `cch_dest` units at `dest`.  See `cch::cat`.

Fails without reading if `cch_dest` is zero or above `STRSAFE_MAX_CCH`, or either pointer is null.

# Safety

`dest` must be readable and writable for `cch_dest` units.  `src` must be readable up to its terminator, or for `cch_dest` units, whichever comes first.  The two regions must not overlap.
*/
pub unsafe fn cat<U>(dest: *mut U, cch_dest: usize, src: *const U) -> Result<usize> where U: Unit {
    let dest = dest_slice(dest, cch_dest)?;
    let src = src_slice(src, cch_dest)?;
    cch::cat(dest, src)
}

/**
Writes formatted text into the `cch_dest` units at `dest`.  See `cch::printf`.

# Safety

`dest` must be writable for `cch_dest` units.
*/
pub unsafe fn printf<U>(dest: *mut U, cch_dest: usize, args: fmt::Arguments) -> Result<usize> where U: TextUnit {
    let dest = dest_slice(dest, cch_dest)?;
    cch::printf(dest, args)
}
