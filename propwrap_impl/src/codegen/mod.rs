use quote::ToTokens;
use syn::spanned::Spanned;

use self::{
    property::Member,
    symbol::{parse_lit_into_ident, Symbol},
};

mod property;
mod symbol;

pub type AttrList = syn::punctuated::Punctuated<syn::Meta, syn::Token![,]>;

#[derive(Default)]
pub struct Params {
    constructor: Option<syn::Ident>,
}

impl Params {
    pub fn parse(args: &AttrList) -> Result<Self, syn::Error> {
        let mut params = Self::default();

        for arg in args {
            match arg {
                syn::Meta::Path(p) if p == symbol::CONSTRUCTOR => {
                    let name = syn::Ident::new("new", p.span());
                    set_once(&mut params.constructor, name, symbol::CONSTRUCTOR, arg)?;
                }
                syn::Meta::NameValue(nv) if nv.path == symbol::CONSTRUCTOR => {
                    let name = parse_lit_into_ident(symbol::CONSTRUCTOR, &nv.value)?;
                    set_once(&mut params.constructor, name, symbol::CONSTRUCTOR, arg)?;
                }
                syn::Meta::Path(path) | syn::Meta::NameValue(syn::MetaNameValue { path, .. }) => {
                    return Err(unsupported_argument(arg, path));
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        arg,
                        "unsupported argument".to_string(),
                    ));
                }
            }
        }

        Ok(params)
    }

    pub fn build(self, mut body: syn::ItemStruct) -> Result<CodeGen, syn::Error> {
        let Params { constructor } = self;

        let named = if let syn::Fields::Named(fields) = &mut body.fields {
            &mut fields.named
        } else {
            return Err(syn::Error::new_spanned(
                &body.ident,
                "properties can only be attached to structs with named fields",
            ));
        };

        let members = named
            .iter_mut()
            .map(Member::extract)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CodeGen {
            body,
            members,
            constructor,
        })
    }
}

pub struct CodeGen {
    body: syn::ItemStruct,
    members: Vec<Member>,
    constructor: Option<syn::Ident>,
}

impl CodeGen {
    pub fn generate(&self) -> proc_macro2::TokenStream {
        let body = &self.body;
        let name = &body.ident;
        let (impl_generics, ty_generics, where_clause) = body.generics.split_for_impl();

        let constructor = self
            .constructor
            .as_ref()
            .map(|ctor| self.constructor_tokens(ctor));
        let accessors = self.members.iter().filter_map(Member::accessor_tokens);

        quote::quote! {
            #body

            impl #impl_generics #name #ty_generics #where_clause {
                #constructor
                #(#accessors)*
            }
        }
    }

    fn constructor_tokens(&self, ctor: &syn::Ident) -> proc_macro2::TokenStream {
        let vis = &self.body.vis;
        let params = self.members.iter().map(Member::param_tokens);
        let inits = self.members.iter().map(Member::init_tokens);

        quote::quote! {
            #[doc = "Constructs a new value, passing each wrapped field through its transform"]
            #[allow(clippy::too_many_arguments)]
            #[inline]
            #vis fn #ctor(#(#params),*) -> Self {
                Self {
                    #(#inits),*
                }
            }
        }
    }
}

fn set_once(
    slot: &mut Option<syn::Ident>,
    value: syn::Ident,
    name: Symbol,
    arg: &syn::Meta,
) -> Result<(), syn::Error> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(
            arg,
            format!("{} can only be specified once", name),
        ));
    }

    *slot = Some(value);
    Ok(())
}

fn unsupported_argument(arg: &syn::Meta, path: &syn::Path) -> syn::Error {
    syn::Error::new_spanned(
        arg,
        format!("unsupported argument `{}`", path.to_token_stream()),
    )
}
