//! Derive macro implementation used by `gonio-core`.
//!
//! `gonio-derive` is an implementation detail of this workspace. The `AngleUnit` derive expands in
//! terms of `crate::AngleUnit`, so it is intended to be used by `gonio-core` (or by crates that
//! expose an identical crate-root API).
//!
//! Most users should depend on `gonio` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::AngleUnit for MyUnit`
//!
//! # Attributes
//!
//! The derive reads a required `#[angle_unit(...)]` attribute:
//!
//! - `symbol = "grad"`: displayed unit symbol
//! - `revolution = 400.0`: how many of this unit make one full revolution

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::AngleUnit` for a unit marker type.
///
/// The derive must be paired with an `#[angle_unit(...)]` attribute providing `symbol` and
/// `revolution`.
///
/// This macro is intended for use by `gonio-core`.
#[proc_macro_derive(AngleUnit, attributes(angle_unit))]
pub fn derive_angle_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_angle_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_angle_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    // Parse the #[angle_unit(...)] attribute
    let unit_attr = parse_angle_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let revolution = &unit_attr.revolution;

    let expanded = quote! {
        impl crate::AngleUnit for #name {
            const REVOLUTION: f64 = #revolution;
            const SYMBOL: &'static str = #symbol;
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[angle_unit(...)]` attribute.
struct AngleUnitAttribute {
    symbol: LitStr,
    revolution: Expr,
    // Future extensions:
    // long_name: Option<LitStr>,
    // plural: Option<LitStr>,
    // aliases: Option<Vec<LitStr>>,
}

impl Parse for AngleUnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut revolution: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "revolution" => {
                    revolution = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let revolution = revolution.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `revolution`")
        })?;

        Ok(AngleUnitAttribute { symbol, revolution })
    }
}

fn parse_angle_unit_attribute(attrs: &[Attribute]) -> syn::Result<AngleUnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("angle_unit") {
            return attr.parse_args::<AngleUnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[angle_unit(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_angle_unit_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[angle_unit(symbol = "grad", revolution = 400.0)]
            pub struct Grad;
        };

        let attr = parse_angle_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "grad");
    }

    #[test]
    fn test_parse_angle_unit_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct Grad;
        };

        let result = parse_angle_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_msg = err.to_string();
        assert!(err_msg.contains("missing #[angle_unit(...)] attribute"));
    }

    #[test]
    fn test_parse_angle_unit_attribute_missing_symbol() {
        let input: DeriveInput = parse_quote! {
            #[angle_unit(revolution = 400.0)]
            pub struct Grad;
        };

        let result = parse_angle_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_msg = err.to_string();
        assert!(err_msg.contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_parse_angle_unit_attribute_missing_revolution() {
        let input: DeriveInput = parse_quote! {
            #[angle_unit(symbol = "grad")]
            pub struct Grad;
        };

        let result = parse_angle_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_msg = err.to_string();
        assert!(err_msg.contains("missing required attribute `revolution`"));
    }

    #[test]
    fn test_parse_angle_unit_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[angle_unit(symbol = "grad", revolution = 400.0, unknown = "value")]
            pub struct Grad;
        };

        let result = parse_angle_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_msg = err.to_string();
        assert!(err_msg.contains("unknown attribute"));
    }

    #[test]
    fn test_derive_angle_unit_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[angle_unit(symbol = "grad", revolution = 400.0)]
            pub struct Grad;
        };

        let result = derive_angle_unit_impl(input);
        assert!(result.is_ok());
        let tokens = result.unwrap();
        let code = tokens.to_string();
        assert!(code.contains("impl crate :: AngleUnit for Grad"));
        assert!(code.contains("const REVOLUTION : f64 = 400.0"));
        assert!(code.contains("const SYMBOL : & 'static str = \"grad\""));
    }

    #[test]
    fn test_derive_angle_unit_impl_with_expression_revolution() {
        let input: DeriveInput = parse_quote! {
            #[angle_unit(symbol = "rad", revolution = core::f64::consts::TAU)]
            pub struct Radian;
        };

        let result = derive_angle_unit_impl(input);
        assert!(result.is_ok());
        let tokens = result.unwrap();
        let code = tokens.to_string();
        assert!(code.contains("TAU"));
    }

    #[test]
    fn test_angle_unit_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            symbol = "grad", revolution = 400.0,
        };
        let attr: AngleUnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "grad");
    }

    #[test]
    fn test_angle_unit_attribute_parse_duplicate_symbol() {
        // Parser accepts duplicates - last one wins
        let tokens = quote! {
            symbol = "grad", symbol = "gon", revolution = 400.0
        };
        let attr: AngleUnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "gon");
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<AngleUnitAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_angle_unit_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub struct Grad;
        };
        let result = derive_angle_unit_impl(input);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_tokens = err.to_compile_error();
        let code = err_tokens.to_string();
        assert!(code.contains("compile_error"));
    }
}
