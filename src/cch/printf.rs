use std::fmt::{self, Write};
use crate::encoding::TextUnit;
use crate::error::{Error, Result};
use super::check_capacity;

/**
Writes formatted text into `dest`, and terminates it.

Formatting is delegated entirely to `core::fmt`; this function only bounds the output.  Narrow destinations receive UTF-8, wide destinations receive UTF-16.  Usually invoked through the `cch_printf!` macro.

On success, returns the number of units written, not counting the terminator.

# Failure

Fails without writing if `dest` is empty or longer than `STRSAFE_MAX_CCH`.

If the formatted text does not fit, or a formatting implementation reports an error, the text produced so far (cut to capacity) is left in `dest`, terminated, and `Error::InvalidParameter` is returned.  Truncation happens at unit granularity: a narrow destination may end partway through a multi-byte sequence.
*/
pub fn printf<U>(dest: &mut [U], args: fmt::Arguments) -> Result<usize> where U: TextUnit {
    check_capacity(dest.len())?;

    let mut writer = BoundedWriter::new(dest);
    let r = writer.write_fmt(args);
    writer.finish(r)
}

/**
A `fmt::Write` sink over a unit buffer, which always reserves the last slot for the terminator.
*/
struct BoundedWriter<'a, U> where U: 'a {
    buf: &'a mut [U],
    pos: usize,
    truncated: bool,
}

impl<'a, U> BoundedWriter<'a, U> where U: TextUnit {
    fn new(buf: &'a mut [U]) -> Self {
        debug_assert!(!buf.is_empty());
        BoundedWriter {
            buf: buf,
            pos: 0,
            truncated: false,
        }
    }

    fn finish(mut self, r: fmt::Result) -> Result<usize> {
        self.buf[self.pos] = U::zero();
        if self.truncated || r.is_err() {
            Err(Error::InvalidParameter)
        } else {
            Ok(self.pos)
        }
    }
}

impl<'a, U> Write for BoundedWriter<'a, U> where U: TextUnit {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let limit = self.buf.len() - 1;
        let buf = &mut *self.buf;
        let pos = &mut self.pos;

        let done = U::encode_str(s, |unit| {
            if *pos < limit {
                buf[*pos] = unit;
                *pos += 1;
                true
            } else {
                false
            }
        });

        if done {
            Ok(())
        } else {
            // Stops `fmt` from producing text we would discard anyway.
            self.truncated = true;
            Err(fmt::Error)
        }
    }
}
