// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;

/// Longest literal the bridge accepts, in characters.
///
/// Mirrored in the `typestr` crate docs; the crates cannot share a constant
/// without a dependency cycle.
pub(crate) const MAX_CHARS: usize = 64;

pub(crate) fn expand(input: TokenStream) -> TokenStream {
    let lit = match syn::parse2::<LitStr>(input) {
        Ok(lit) => lit,
        Err(err) => return err.to_compile_error(),
    };

    let value = lit.value();
    let count = value.chars().count();
    if count > MAX_CHARS {
        return syn::Error::new(
            lit.span(),
            format!("`typestr!` accepts at most {MAX_CHARS} characters, this literal has {count}"),
        )
        .to_compile_error();
    }

    // built back to front so each character wraps the tail it precedes
    let mut seq = quote!(::typestr::Nul);
    for c in value.chars().rev() {
        seq = quote!(::typestr::Ch<#c, #seq>);
    }
    seq
}
