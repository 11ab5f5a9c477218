//! You probably want the [`propwrap`] crate, which
//! has the documentation this crate lacks.
//!
//!   [`propwrap`]: https://docs.rs/propwrap/*/propwrap/

#![warn(
    missing_docs,
    unused_import_braces,
    unused_imports,
    unused_qualifications
)]
#![deny(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_must_use
)]
#![forbid(unsafe_code)]

extern crate proc_macro;

mod codegen;

use codegen::{AttrList, Params};
use proc_macro::TokenStream;
use syn::parse_macro_input;

/// Rewrites `#[wrap]` fields into transformed property cells
///
/// Available options:
/// * `constructor [ = "name" ]`
///   * Generates a memberwise constructor, named `new` unless specified
///
/// Available field options, following the transform type in `#[wrap(Transform, ..)]`:
/// * `get = "name"`
///   * Sets the name of the generated getter (default: the field name)
/// * `set = "name"`
///   * Sets the name of the generated setter (default: `set_` followed by the field name)
#[proc_macro_attribute]
pub fn properties(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args with AttrList::parse_terminated);
    let body = parse_macro_input!(input as syn::ItemStruct);

    Params::parse(&args)
        .and_then(|p| p.build(body))
        .map(|c| c.generate())
        .unwrap_or_else(|e| e.into_compile_error())
        .into()
}
