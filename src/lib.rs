/*!
This crate provides bounded operations on fixed-capacity, zero-terminated character buffers, and overflow-checked unsigned arithmetic.

None of the string operations ever write past the end of the destination, and every one that writes leaves the destination zero-terminated, even when it has to truncate.  Failures are reported, never hidden: truncation is an error, and an overflowing add or multiply yields an all-ones sentinel alongside the error.

For more details, see the [additional documentation](doc/index.html).

# Quick Reference

Capacities are always measured in *units* (characters of the buffer's width), not bytes, and include the terminator.  In the safe API the capacity of a buffer is the length of its slice.

| Operation | Safe API | Raw pointer API | C export |
| ---: | --- | --- | --- |
| Measure length | `cch::length` | `raw::length` | `strsafe_cch_length_a` / `_w` |
| Copy | `cch::copy` | `raw::copy` | `strsafe_cch_copy_a` / `_w` |
| Concatenate | `cch::cat` | `raw::cat` | `strsafe_cch_cat_a` / `_w` |
| Formatted write | `cch_printf!`, `cch::printf` | `raw::printf` | … |
| Checked add | `intsafe::dword_add` | … | `strsafe_dword_add` |
| Checked multiply | `intsafe::dword_mult` | … | `strsafe_dword_mult` |

Narrow buffers are `[u8]`, wide buffers are `[u16]`; every string operation is generic over the unit type.

```
use strsafe::cch;

let mut buf = [0u8; 8];
cch::copy(&mut buf, b"abc").unwrap();
assert_eq!(cch::cat(&mut buf, b"def"), Ok(6));
assert_eq!(cch::cat(&mut buf, b"ghi"), Err(strsafe::Error::InvalidParameter));
assert_eq!(&buf, b"abcdefg\0");
```
*/
extern crate libc;
#[cfg(feature = "log")]
extern crate log;

/**
Writes formatted text into a unit buffer, truncating to its capacity.

The first argument is the destination (`&mut [u8]` or `&mut [u16]`), the rest are as for `format!`.  Expands to a call to `cch::printf`, and evaluates to its result.

```
let mut buf = [0u16; 16];
let len = strsafe::cch_printf!(&mut buf, "{}+{}", 1, 2).unwrap();
assert_eq!(String::from_utf16_lossy(&buf[..len]), "1+2");
```
*/
#[macro_export]
macro_rules! cch_printf {
    ($dest:expr, $($args:tt)*) => {
        $crate::cch::printf($dest, format_args!($($args)*))
    };
}

#[doc(hidden)] pub mod doc;
pub mod cch;
pub mod encoding;
pub mod error;
pub mod intsafe;
pub mod raw;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use cch::STRSAFE_MAX_CCH;
pub use error::{Error, Result};
