// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Procedural macro backing the `typestr` crate.
//!
//! This crate only hosts the expansion; depend on `typestr` and use its
//! re-export rather than depending on this crate directly.

mod expand;

use proc_macro::TokenStream;

/// Expands a string literal into its character sequence type.
///
/// The macro is usable anywhere a type is expected. Each character of the
/// literal becomes one `Ch` const parameter, in order; the empty literal
/// expands to `Nul`, the empty sequence. Escapes and raw strings resolve
/// before expansion, and any `char` is accepted, not just ASCII.
///
/// Literals longer than 64 characters are rejected with a compile error
/// naming the ceiling; nothing is truncated. Anything other than exactly one
/// string literal is likewise a compile error.
///
/// ```rust,ignore
/// use typestr::{typestr, TypeStr};
///
/// type Greeting = typestr!("hello");
/// assert_eq!(Greeting::STR, "hello");
/// ```
///
/// The expansion names the `typestr` crate by its canonical path, so the
/// crate must not be renamed in `Cargo.toml` dependency tables.
#[proc_macro]
pub fn typestr(input: TokenStream) -> TokenStream {
    expand::expand(input.into()).into()
}
