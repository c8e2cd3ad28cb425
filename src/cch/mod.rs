/*!
Counted-character string operations.

All functions here take the destination capacity from the length of the destination slice, measured in units (not bytes).  Source slices are read up to their first zero unit; the end of the slice also counts as a terminator.

Every function that writes to a destination leaves it zero-terminated, whether it succeeds or reports truncation.  Functions which fail a precondition do not touch the destination at all.
*/
use crate::encoding::Unit;
use crate::error::{Error, Result};

pub use self::printf::printf;

mod printf;

/**
The largest capacity, in units, any operation in this crate will accept.
*/
pub const STRSAFE_MAX_CCH: usize = 2_147_483_647;

/**
Checks that `cch` is a usable destination capacity: non-zero, and no larger than `STRSAFE_MAX_CCH`.
*/
#[inline]
pub fn check_capacity(cch: usize) -> Result<()> {
    if cch == 0 || cch > STRSAFE_MAX_CCH {
        Err(Error::InvalidParameter)
    } else {
        Ok(())
    }
}

/**
Returns the number of units in `psz` before its terminator.

The capacity is `psz.len()`.  Fails if the capacity is above `STRSAFE_MAX_CCH`, or if there is no terminator within it.  A zero-length slice therefore always fails.
*/
pub fn length<U>(psz: &[U]) -> Result<usize> where U: Unit {
    let cch_max = psz.len();
    if cch_max > STRSAFE_MAX_CCH {
        return Err(Error::InvalidParameter);
    }

    let mut remaining = cch_max;
    for unit in psz {
        if unit.is_zero() {
            break;
        }
        remaining -= 1;
    }

    if remaining == 0 {
        // no terminator within capacity
        Err(Error::InvalidParameter)
    } else {
        Ok(cch_max - remaining)
    }
}

/**
Copies `src` into `dest`, and terminates it.

On success, returns the number of units copied, not counting the terminator.

# Failure

Fails without writing if `dest` is empty or longer than `STRSAFE_MAX_CCH`.

If `src` does not fit, as many units as possible are copied, the last unit of `dest` is overwritten with the terminator, and `Error::InvalidParameter` is returned.
*/
pub fn copy<U>(dest: &mut [U], src: &[U]) -> Result<usize> where U: Unit {
    check_capacity(dest.len())?;

    let mut copied = 0;
    {
        let src = src.iter().take_while(|u| !u.is_zero());
        for (d, s) in dest.iter_mut().zip(src) {
            *d = *s;
            copied += 1;
        }
    }

    if copied == dest.len() {
        // out of room for the terminator; truncate
        dest[copied - 1] = U::zero();
        Err(Error::InvalidParameter)
    } else {
        dest[copied] = U::zero();
        Ok(copied)
    }
}

/**
Appends `src` to the string already in `dest`.

This is `length` on `dest`, followed by `copy` into the remainder of `dest`.  On success, returns the length of the combined string.

# Failure

Fails without scanning if the capacity is above `STRSAFE_MAX_CCH`.  If `dest` holds no terminator within its capacity, fails without writing.  Truncation behaves exactly as for `copy`.
*/
pub fn cat<U>(dest: &mut [U], src: &[U]) -> Result<usize> where U: Unit {
    if dest.len() > STRSAFE_MAX_CCH {
        return Err(Error::InvalidParameter);
    }

    let current = length(dest)?;
    copy(&mut dest[current..], src).map(|n| current + n)
}
