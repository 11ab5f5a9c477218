use std::fmt::{self, Display};
use syn::{Ident, Path};

#[derive(Copy, Clone, Debug)]
pub struct Symbol(&'static str);

pub const WRAP: Symbol = Symbol("wrap");
pub const GET: Symbol = Symbol("get");
pub const SET: Symbol = Symbol("set");
pub const CONSTRUCTOR: Symbol = Symbol("constructor");

impl PartialEq<Symbol> for Ident {
    fn eq(&self, word: &Symbol) -> bool {
        self == word.0
    }
}

impl<'a> PartialEq<Symbol> for &'a Ident {
    fn eq(&self, word: &Symbol) -> bool {
        *self == word.0
    }
}

impl PartialEq<Symbol> for Path {
    fn eq(&self, word: &Symbol) -> bool {
        self.is_ident(word.0)
    }
}

impl<'a> PartialEq<Symbol> for &'a Path {
    fn eq(&self, word: &Symbol) -> bool {
        self.is_ident(word.0)
    }
}

impl Display for Symbol {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.0)
    }
}

fn get_lit_str(attr_name: Symbol, value: &syn::Expr) -> Result<&syn::LitStr, syn::Error> {
    if let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(lit),
        ..
    }) = value
    {
        Ok(lit)
    } else {
        Err(syn::Error::new_spanned(
            value,
            format!(
                "expected attribute `{}` to have a string value (`{} = \"value\"`)",
                attr_name, attr_name
            ),
        ))
    }
}

pub fn parse_lit_into_ident(attr_name: Symbol, value: &syn::Expr) -> Result<Ident, syn::Error> {
    let string = get_lit_str(attr_name, value)?;
    string.parse::<Ident>().map_err(|_| {
        syn::Error::new_spanned(
            string,
            format!("failed to parse identifier: {:?}", string.value()),
        )
    })
}
