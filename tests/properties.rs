extern crate strsafe;

use proptest::prelude::*;
use strsafe::{cch, intsafe, Error};

/// Non-zero units, so the generated strings have no interior terminators.
fn units(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(1u8..=u8::MAX, 0..max_len)
}

fn wide_units(max_len: usize) -> impl Strategy<Value = Vec<u16>> {
    proptest::collection::vec(1u16..=u16::MAX, 0..max_len)
}

fn terminated<U: Copy + Default>(s: &[U]) -> Vec<U> {
    let mut v = s.to_vec();
    v.push(U::default());
    v
}

proptest! {
    #[test]
    fn prop_length_of_short_string(s in units(64), slack in 1usize..32) {
        let mut buf = terminated(&s);
        buf.resize(s.len() + slack, 0xaa);
        prop_assert_eq!(cch::length(&buf), Ok(s.len()));
    }

    #[test]
    fn prop_length_of_long_string(s in units(64), cap in 0usize..64) {
        prop_assume!(s.len() >= cap);
        // A capacity that doesn't reach the terminator.
        let buf = terminated(&s);
        prop_assert_eq!(cch::length(&buf[..cap]), Err(Error::InvalidParameter));
    }

    #[test]
    fn prop_copy_always_terminates(s in units(64), cap in 1usize..64) {
        let mut dest = vec![0xffu8; cap];
        let r = cch::copy(&mut dest, &terminated(&s));
        prop_assert!(dest.contains(&0));
        if s.len() < cap {
            prop_assert_eq!(r, Ok(s.len()));
            prop_assert_eq!(&dest[..s.len()], &s[..]);
        } else {
            prop_assert_eq!(r, Err(Error::InvalidParameter));
            prop_assert_eq!(&dest[..cap - 1], &s[..cap - 1]);
            prop_assert_eq!(dest[cap - 1], 0);
        }
    }

    #[test]
    fn prop_copy_then_length(s in wide_units(64), slack in 1usize..16) {
        let mut dest = vec![0xffffu16; s.len() + slack];
        prop_assert_eq!(cch::copy(&mut dest, &s), Ok(s.len()));
        prop_assert_eq!(cch::length(&dest), Ok(s.len()));
    }

    #[test]
    fn prop_cat_with_room(s1 in units(32), s2 in units(32), slack in 1usize..8) {
        let mut dest = vec![0u8; s1.len() + s2.len() + slack];
        cch::copy(&mut dest, &s1).unwrap();
        prop_assert_eq!(cch::cat(&mut dest, &terminated(&s2)), Ok(s1.len() + s2.len()));

        let mut expected = s1.clone();
        expected.extend_from_slice(&s2);
        expected.push(0);
        prop_assert_eq!(&dest[..expected.len()], &expected[..]);
    }

    #[test]
    fn prop_cat_without_room(s1 in units(32), s2 in units(32), cap in 1usize..64) {
        prop_assume!(s1.len() < cap && s1.len() + s2.len() >= cap);
        let mut dest = vec![0u8; cap];
        cch::copy(&mut dest, &s1).unwrap();
        prop_assert_eq!(cch::cat(&mut dest, &s2), Err(Error::InvalidParameter));
        prop_assert_eq!(dest[cap - 1], 0);
        prop_assert_eq!(cch::length(&dest), Ok(cap - 1));
        prop_assert_eq!(&dest[..s1.len()], &s1[..]);
    }

    #[test]
    fn prop_printf_matches_format(n in any::<i64>(), cap in 1usize..32) {
        let text = format!("n={}", n);
        let mut dest = vec![0xffu8; cap];
        let r = strsafe::cch_printf!(&mut dest, "n={}", n);
        let kept = text.len().min(cap - 1);
        prop_assert_eq!(&dest[..kept], &text.as_bytes()[..kept]);
        prop_assert_eq!(dest[kept], 0);
        if text.len() < cap {
            prop_assert_eq!(r, Ok(text.len()));
        } else {
            prop_assert_eq!(r, Err(Error::InvalidParameter));
        }
    }

    #[test]
    fn prop_dword_add(a in any::<u32>(), b in any::<u32>()) {
        let exact = a as u64 + b as u64;
        let mut result = 0;
        let r = intsafe::dword_add_into(a, b, &mut result);
        if exact <= 0xffff_ffff {
            prop_assert_eq!(r, Ok(()));
            prop_assert_eq!(result as u64, exact);
        } else {
            prop_assert_eq!(r, Err(Error::ArithmeticOverflow));
            prop_assert_eq!(result, 0xffff_ffff);
        }
    }

    #[test]
    fn prop_dword_mult(a in any::<u32>(), b in prop_oneof![Just(0u32), Just(1u32), any::<u32>()]) {
        let exact = a as u64 * b as u64;
        let mut result = 0;
        let r = intsafe::dword_mult_into(a, b, &mut result);
        if exact <= 0xffff_ffff {
            prop_assert_eq!(r, Ok(()));
            prop_assert_eq!(result as u64, exact);
        } else {
            prop_assert_eq!(r, Err(Error::ArithmeticOverflow));
            prop_assert_eq!(result, 0xffff_ffff);
        }
    }
}

#[test]
fn test_zero_capacity_copy_writes_nothing() {
    let mut backing = [0x55u8; 4];
    {
        let dest = &mut backing[..0];
        assert_eq!(cch::copy(dest, b"abc\0"), Err(Error::InvalidParameter));
    }
    assert_eq!(backing, [0x55; 4]);
}
