/*!
Additional documentation.

# Contracts

These tables summarise what each operation accepts, and what it leaves behind.  "Cap" is the destination capacity in units, including the terminator.

## String operations

| Operation | Accepts | On success | On failure |
| --------- | ------- | ---------- | ---------- |
| `length`  | cap in `[1, STRSAFE_MAX_CCH]` | units before the terminator | cap out of range, or no terminator within cap.  Nothing is written. |
| `copy`    | cap in `[1, STRSAFE_MAX_CCH]` | units copied; destination terminated | cap out of range: nothing is written.  Source too long: destination holds the first `cap - 1` units and a terminator. |
| `cat`     | cap in `[1, STRSAFE_MAX_CCH]` | combined length; destination terminated | cap out of range, or destination unterminated: nothing is written.  Otherwise as for `copy`. |
| `printf`  | cap in `[1, STRSAFE_MAX_CCH]` | units written; destination terminated | cap out of range: nothing is written.  Output too long, or a formatting error: destination holds what fit, and a terminator. |

## Arithmetic

| Operation | On success | On failure |
| --------- | ---------- | ---------- |
| `dword_add`, `size_t_add` | exact sum | `ArithmeticOverflow`; `_into` variants and C exports store the all-ones sentinel |
| `dword_mult`, `size_t_mult` | exact product (zero if either operand is zero) | as above |

## Status codes

| Constant | Value | `Error` |
| -------- | ----- | ------- |
| `S_OK` | `0` | … |
| `ERROR_INVALID_PARAMETER` | `87` | `InvalidParameter` |
| `INTSAFE_E_ARITHMETIC_OVERFLOW` | `0x80070216` | `ArithmeticOverflow` |

# Common Misconceptions and Mistakes

* *"Truncation is success."*  Every operation here that has to drop output reports `InvalidParameter`.  The buffer is still terminated, so the partial result is safe to print; it just isn't what you asked for.

* *"Capacity is in bytes."*  It is in units.  A wide buffer of capacity 16 is 32 bytes.

* *"An empty buffer can hold the empty string."*  It can't: there's no room for the terminator.  A capacity of zero is always rejected.

* *"`length` tells me how big the buffer is."*  It tells you how long the string *in* the buffer is, and only if there's a terminator within the capacity you give it.

* *"`cat` repairs an unterminated destination."*  It refuses to touch one.

* *"I can ignore the error from `dword_add` and check for zero."*  The failure value is the all-ones sentinel, not zero.  Zero is a perfectly good product.

* *"Narrow means ASCII."*  Narrow buffers are raw 8-bit units.  `printf` writes UTF-8 into them, and may cut a multi-byte sequence in half when truncating.
*/
