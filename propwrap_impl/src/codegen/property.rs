use std::mem;

use quote::{format_ident, ToTokens};
use syn::{
    ext::IdentExt,
    parse::{Parse, ParseStream},
};

use super::{
    set_once,
    symbol::{self, parse_lit_into_ident},
    unsupported_argument, AttrList,
};

/// A named field of a `#[properties]` struct
pub struct Member {
    ident: syn::Ident,
    ty: syn::Type,
    property: Option<Property>,
}

/// The accessors to generate for a `#[wrap]` field
struct Property {
    vis: syn::Visibility,
    getter: syn::Ident,
    setter: syn::Ident,
    docs: Vec<syn::Attribute>,
}

impl Member {
    /// Strips the `#[wrap]` attribute from `field`, rewriting its storage into a
    /// private cell if one was present
    pub fn extract(field: &mut syn::Field) -> Result<Self, syn::Error> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(&*field, "expected a named field"))?;

        let mut args: Option<WrapArgs> = None;
        let mut attrs = Vec::with_capacity(field.attrs.len());
        for attr in mem::take(&mut field.attrs) {
            if attr.path() == symbol::WRAP {
                if args.is_some() {
                    return Err(syn::Error::new_spanned(
                        &attr,
                        format!("{} can only be specified once", symbol::WRAP),
                    ));
                }
                args = Some(attr.parse_args()?);
            } else {
                attrs.push(attr);
            }
        }
        field.attrs = attrs;

        let ty = field.ty.clone();
        let property = args.map(|WrapArgs { transform, getter, setter }| {
            let docs = field
                .attrs
                .iter()
                .filter(|a| a.path().is_ident("doc"))
                .cloned()
                .collect();

            field.ty = syn::parse_quote!(::propwrap::Cell<#transform>);

            Property {
                vis: mem::replace(&mut field.vis, syn::Visibility::Inherited),
                getter: getter.unwrap_or_else(|| ident.clone()),
                setter: setter.unwrap_or_else(|| format_ident!("set_{}", ident.unraw())),
                docs,
            }
        });

        Ok(Self {
            ident,
            ty,
            property,
        })
    }

    pub fn accessor_tokens(&self) -> Option<proc_macro2::TokenStream> {
        let Self {
            ident,
            ty,
            property,
        } = self;
        let Property {
            vis,
            getter,
            setter,
            docs,
        } = property.as_ref()?;

        let getter_doc = if docs.is_empty() {
            let doc = format!("Reads `{}`", ident.unraw());
            quote::quote! { #[doc = #doc] }
        } else {
            quote::quote! { #(#docs)* }
        };
        let setter_doc = format!(
            "Writes `{}`, storing the value produced by its transform",
            ident.unraw()
        );
        // Private accessors may go unused by the owning module
        let allow_unused = if let syn::Visibility::Inherited = vis {
            Some(quote::quote! { #[allow(dead_code)] })
        } else {
            None
        };

        Some(quote::quote! {
            #getter_doc
            #[inline]
            #allow_unused
            #vis fn #getter(&self) -> &#ty {
                ::propwrap::Cell::read(&self.#ident)
            }

            #[doc = #setter_doc]
            #[inline]
            #allow_unused
            #vis fn #setter(&mut self, value: #ty) {
                ::propwrap::Cell::write(&mut self.#ident, value)
            }
        })
    }

    pub fn param_tokens(&self) -> proc_macro2::TokenStream {
        let Self { ident, ty, .. } = self;
        quote::quote! { #ident: #ty }
    }

    pub fn init_tokens(&self) -> proc_macro2::TokenStream {
        let ident = &self.ident;
        if self.property.is_some() {
            quote::quote! { #ident: ::propwrap::Cell::new(#ident) }
        } else {
            ident.to_token_stream()
        }
    }
}

/// Arguments to `#[wrap(Transform, get = "..", set = "..")]`
struct WrapArgs {
    transform: syn::Type,
    getter: Option<syn::Ident>,
    setter: Option<syn::Ident>,
}

impl Parse for WrapArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = WrapArgs {
            transform: input.parse()?,
            getter: None,
            setter: None,
        };

        if input.is_empty() {
            return Ok(args);
        }

        input.parse::<syn::Token![,]>()?;
        let options = AttrList::parse_terminated(input)?;

        for option in &options {
            match option {
                syn::Meta::NameValue(nv) if nv.path == symbol::GET => {
                    let getter = parse_lit_into_ident(symbol::GET, &nv.value)?;
                    set_once(&mut args.getter, getter, symbol::GET, option)?;
                }
                syn::Meta::NameValue(nv) if nv.path == symbol::SET => {
                    let setter = parse_lit_into_ident(symbol::SET, &nv.value)?;
                    set_once(&mut args.setter, setter, symbol::SET, option)?;
                }
                syn::Meta::Path(path) | syn::Meta::NameValue(syn::MetaNameValue { path, .. }) => {
                    return Err(unsupported_argument(option, path));
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        option,
                        "unsupported argument".to_string(),
                    ));
                }
            }
        }

        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quote::quote;
    use syn::{parse::Parser, parse_quote};

    fn wrap_args(tokens: proc_macro2::TokenStream) -> syn::Result<WrapArgs> {
        syn::parse2(tokens)
    }

    #[test]
    fn parses_generic_transform() {
        let args = wrap_args(quote! { AtMost<12> }).unwrap();
        assert_eq!(
            args.transform.to_token_stream().to_string(),
            quote! { AtMost<12> }.to_string()
        );
        assert!(args.getter.is_none());
        assert!(args.setter.is_none());
    }

    #[test]
    fn parses_accessor_names() {
        let args = wrap_args(quote! { Capitalized, get = "given_name", set = "rename", }).unwrap();
        assert_eq!(args.getter.unwrap().to_string(), "given_name");
        assert_eq!(args.setter.unwrap().to_string(), "rename");
    }

    #[test]
    fn rejects_duplicate_getter() {
        let err = wrap_args(quote! { Capitalized, get = "a", get = "b" })
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "get can only be specified once");
    }

    #[test]
    fn rejects_unknown_option() {
        let err = wrap_args(quote! { Capitalized, default = "x" })
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "unsupported argument `default`");
    }

    #[test]
    fn rejects_invalid_identifier() {
        let err = wrap_args(quote! { Capitalized, set = "not an ident" })
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "failed to parse identifier: \"not an ident\""
        );
    }

    #[test]
    fn extract_rewrites_wrapped_field() {
        let mut field: syn::Field = syn::Field::parse_named
            .parse2(quote! {
                #[serde(default)]
                #[wrap(TwelveOrLess)]
                pub height: i64
            })
            .unwrap();

        let member = Member::extract(&mut field).unwrap();

        assert_eq!(
            field.to_token_stream().to_string(),
            quote! {
                #[serde(default)]
                height: ::propwrap::Cell<TwelveOrLess>
            }
            .to_string()
        );
        assert_eq!(
            member.param_tokens().to_string(),
            quote! { height: i64 }.to_string()
        );
        assert_eq!(
            member.init_tokens().to_string(),
            quote! { height: ::propwrap::Cell::new(height) }.to_string()
        );
    }

    #[test]
    fn extract_leaves_plain_field_alone() {
        let mut field: syn::Field = syn::Field::parse_named
            .parse2(quote! { pub label: String })
            .unwrap();
        let before = field.to_token_stream().to_string();

        let member = Member::extract(&mut field).unwrap();

        assert_eq!(field.to_token_stream().to_string(), before);
        assert!(member.accessor_tokens().is_none());
        assert_eq!(member.init_tokens().to_string(), "label");
    }

    #[test]
    fn extract_rejects_duplicate_wrap() {
        let mut field: syn::Field = parse_quote_field();
        let err = Member::extract(&mut field).err().unwrap();
        assert_eq!(err.to_string(), "wrap can only be specified once");
    }

    fn parse_quote_field() -> syn::Field {
        let item: syn::ItemStruct = parse_quote! {
            struct Doubled {
                #[wrap(TwelveOrLess)]
                #[wrap(TwelveOrLess)]
                height: i64,
            }
        };
        item.fields.into_iter().next().unwrap()
    }

    #[test]
    fn raw_identifiers_get_plain_setter_names() {
        let mut field: syn::Field = syn::Field::parse_named
            .parse2(quote! {
                #[wrap(Capitalized)]
                pub r#type: String
            })
            .unwrap();

        let member = Member::extract(&mut field).unwrap();
        let accessors = member.accessor_tokens().unwrap().to_string();

        assert!(accessors.contains("fn r#type"));
        assert!(accessors.contains("fn set_type"));
        assert!(accessors.contains("Reads `type`"));
        assert!(!accessors.contains("dead_code"));
    }

    #[test]
    fn private_accessors_allow_dead_code() {
        let mut field: syn::Field = syn::Field::parse_named
            .parse2(quote! {
                #[wrap(TwelveOrLess)]
                depth: i64
            })
            .unwrap();

        let member = Member::extract(&mut field).unwrap();
        let expected = quote! {
            #[doc = "Reads `depth`"]
            #[inline]
            #[allow(dead_code)]
            fn depth(&self) -> &i64 {
                ::propwrap::Cell::read(&self.depth)
            }

            #[doc = "Writes `depth`, storing the value produced by its transform"]
            #[inline]
            #[allow(dead_code)]
            fn set_depth(&mut self, value: i64) {
                ::propwrap::Cell::write(&mut self.depth, value)
            }
        };

        assert_eq!(
            expected.to_string(),
            member.accessor_tokens().unwrap().to_string()
        );
    }
}
