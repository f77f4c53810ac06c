// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Smoke driver: bridges a handful of literals, checks each against an
//! explicitly declared sequence, and prints pass/fail with the decoded text.

use typestr::{Nul, TypeStr, chars, same, tycat, typestr};

fn check<A: TypeStr, B: TypeStr>() {
    let verdict = if same::<A, B>() { "pass" } else { "fail" };
    println!("[{verdict}] {}", A::as_str());
}

#[rustfmt::skip]
type Greeting = chars![
    'H', 'e', 'l', 'l', 'o',
    ' ',
    'w', 'o', 'r', 'l', 'd',
    ',',
    ' ',
    'h', 'o', 'w',
    ' ',
    'i', 's',
    ' ',
    'i', 't',
    ' ',
    'g', 'o', 'i', 'n', 'g', '?',
];

#[rustfmt::skip]
type Uppercase = chars![
    'u', 'p', 'p', 'e', 'r', 'c', 'a', 's', 'e',
    ':',
    ' ',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K',
    'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V',
    'W', 'X', 'Y', 'Z',
];

#[rustfmt::skip]
type Lowercase = chars![
    'l', 'o', 'w', 'e', 'r', 'c', 'a', 's', 'e',
    ':',
    ' ',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k',
    'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v',
    'w', 'x', 'y', 'z',
];

#[rustfmt::skip]
type Floating = chars![
    'f', 'l', 'o', 'a', 't', 'i', 'n', 'g',
    ' ',
    ':',
    ' ',
    '1', '2', '3', '4', '5', '6', '7', '8', '9',
    '.',
    '1', '2', '3', '4', '5', '6', '7', '8', '9',
    '+',
    'e', '-', '1', '2', '3', '4',
];

#[rustfmt::skip]
type Symbols = chars![
    's', 'y', 'm', 'b', 'o', 'l', 's',
    ' ',
    ' ',
    ':',
    ' ',
    '~', '`', '!', '@', '#', '$', '%', '^', '&', '*', '(',
    ')', '_', '+', '=', '-', '[', ']', '\\', '{', '}', '|',
    ':', ';', '\'', ',', '.', '?', '/',
];

fn main() {
    check::<typestr!("Hello world, how is it going?"), Greeting>();
    check::<typestr!("uppercase: ABCDEFGHIJKLMNOPQRSTUVWXYZ"), Uppercase>();
    check::<typestr!("lowercase: abcdefghijklmnopqrstuvwxyz"), Lowercase>();
    check::<typestr!("floating : 123456789.123456789+e-1234"), Floating>();
    check::<typestr!("symbols  : ~`!@#$%^&*()_+=-[]\\{}|:;',.?/"), Symbols>();
    check::<typestr!(""), Nul>();
    check::<
        tycat!(typestr!("ABC"), typestr!("DEF"), typestr!("1234")),
        typestr!("ABCDEF1234"),
    >();
}
