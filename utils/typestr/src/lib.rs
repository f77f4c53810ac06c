// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! `typestr` turns string literals into zero-sized Rust types.
//!
//! A sequence of characters becomes a nested chain of [`Ch`] nodes terminated
//! by [`Nul`], one `char` const parameter per element. Because the contents
//! are part of the type, string literals can participate in generic argument
//! lists, trait dispatch, and type-level equality: two literals with the same
//! contents are the same type, and two different literals are unrelated
//! types. Everything is derived at compile time; the types carry no state.
//!
//! # Examples
//!
//! Bridge a literal with [`typestr!`] and decode it back:
//!
//! ```
//! use typestr::{TypeStr, typestr};
//!
//! type Greeting = typestr!("Hello world, how is it going?");
//! assert_eq!(Greeting::STR, "Hello world, how is it going?");
//! assert_eq!(Greeting::LEN, 29);
//! ```
//!
//! Equality is type identity:
//!
//! ```
//! use typestr::{same, typestr};
//!
//! assert!(same::<typestr!("ABC"), typestr!("ABC")>());
//! assert!(!same::<typestr!("ABC"), typestr!("ABD")>());
//! ```
//!
//! Concatenate with [`tycat!`]:
//!
//! ```
//! use typestr::{same, tycat, typestr};
//!
//! type Joined = tycat!(typestr!("ABC"), typestr!("DEF"), typestr!("1234"));
//! assert!(same::<Joined, typestr!("ABCDEF1234")>());
//! ```
//!
//! Sequence types make static string contents available to generic code, so
//! they can stand in wherever a type is dispatched on:
//!
//! ```
//! use core::marker::PhantomData;
//! use typestr::{TypeStr, typestr};
//!
//! trait Endpoint {
//!     fn path() -> &'static str;
//! }
//!
//! struct Route<T>(PhantomData<T>);
//!
//! impl<T: TypeStr> Endpoint for Route<T> {
//!     fn path() -> &'static str {
//!         T::STR
//!     }
//! }
//!
//! assert_eq!(<Route<typestr!("/health")> as Endpoint>::path(), "/health");
//! ```
//!
//! # Limits
//!
//! [`typestr!`] accepts at most 64 characters per literal and rejects longer
//! ones with a compile error; this keeps sequence types shallow enough for
//! downstream trait resolution under rustc's default recursion limit.
//! Decoding is backed by a fixed [`StrBuf::CAPACITY`]-byte buffer, so a
//! concatenation whose decoded contents exceed it fails constant evaluation.

// https://github.com/unicode-org/icu4x/blob/main/docs/process/boilerplate.md#library-annotations
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(
    not(test),
    deny(
        clippy::indexing_slicing,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::exhaustive_structs,
        clippy::exhaustive_enums,
        missing_debug_implementations,
    )
)]
#![warn(missing_docs)]

mod buf;
mod concat;
mod seq;
#[cfg(feature = "serde")]
mod serde;

pub use buf::{CapacityError, StrBuf};
pub use concat::{Cat, Concat};
pub use seq::{Ch, Nul, TypeStr, same};

pub use typestr_macros::typestr;
