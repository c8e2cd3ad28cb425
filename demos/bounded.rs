extern crate strsafe;

use strsafe::{cch, cch_printf, intsafe};

fn show(label: &str, buf: &[u8], r: strsafe::Result<usize>) {
    let len = cch::length(buf).unwrap_or(0);
    println!("{:<8} {:?} -> {:?}", label, String::from_utf8_lossy(&buf[..len]), r);
}

fn main() {
    let mut buf = [0u8; 12];

    let r = cch::copy(&mut buf, b"gar\xc3\xa7on\0");
    show("copy", &buf, r);

    let r = cch::cat(&mut buf, b" du caf\xc3\xa9\0");
    show("cat", &buf, r);

    let r = cch_printf!(&mut buf, "{}/{}", 3, 4);
    show("printf", &buf, r);

    let r = cch_printf!(&mut buf, "{:?}", ["too", "long"]);
    show("printf", &buf, r);

    let mut wide = [0u16; 8];
    let r = cch_printf!(&mut wide, "w{}", '\u{e7}');
    println!("{:<8} {:?} -> {:?}", "printf", &wide[..3], r);

    let mut result = 0;
    let r = intsafe::dword_add_into(0xffff_fff0, 0x20, &mut result);
    println!("{:<8} {:#x} -> {:?}", "add", result, r);

    let r = intsafe::dword_mult_into(0x1_0000, 0xffff, &mut result);
    println!("{:<8} {:#x} -> {:?}", "mult", result, r);
}
