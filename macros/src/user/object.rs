use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Type};

use crate::common::{parse_entry_list, parse_sig_list, parse_type_list, CallSig, KeyedEntry};

/// Collected `#[object(..)]` keys.
#[derive(Default)]
struct ObjectAttrs {
    bases: Vec<Type>,
    converts_to: Vec<Type>,
    converts_from: Vec<Type>,
    common_type: Vec<KeyedEntry>,
    common_reference: Vec<KeyedEntry>,
    eq: Vec<Type>,
    ord: Vec<Type>,
    invoke: Vec<CallSig>,
}

impl ObjectAttrs {
    fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let mut attrs = ObjectAttrs::default();
        for attr in input.attrs.iter().filter(|a| a.path().is_ident("object")) {
            attr.parse_nested_meta(|meta| {
                let content;
                syn::parenthesized!(content in meta.input);
                if meta.path.is_ident("bases") {
                    attrs.bases.extend(parse_type_list(&content)?);
                } else if meta.path.is_ident("converts_to") {
                    attrs.converts_to.extend(parse_type_list(&content)?);
                } else if meta.path.is_ident("converts_from") {
                    attrs.converts_from.extend(parse_type_list(&content)?);
                } else if meta.path.is_ident("common_type") {
                    attrs.common_type.extend(parse_entry_list(&content)?);
                } else if meta.path.is_ident("common_reference") {
                    attrs.common_reference.extend(parse_entry_list(&content)?);
                } else if meta.path.is_ident("eq") {
                    attrs.eq.extend(parse_type_list(&content)?);
                } else if meta.path.is_ident("ord") {
                    attrs.ord.extend(parse_type_list(&content)?);
                } else if meta.path.is_ident("invoke") {
                    attrs.invoke.extend(parse_sig_list(&content)?);
                } else {
                    return Err(meta.error(
                        "unknown `object` key, expected one of: bases, converts_to, \
                         converts_from, common_type, common_reference, eq, ord, invoke",
                    ));
                }
                Ok(())
            })?;
        }
        Ok(attrs)
    }
}

/// #[derive(Object)] generates a call to the declarative macro bridge.
/// This allows module_path!() to be expanded before the proc-macro processes it.
///
/// The three-layer architecture:
/// 1. #[derive(Object)] (proc-macro) -> generates impl_object! call
/// 2. impl_object! (decl-macro) -> passes concat!() to proc-macro
/// 3. make_routing_stream! (proc-macro) -> hashes the path in a const context
pub fn expand_derive_object(input: DeriveInput) -> TokenStream2 {
    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`Object` cannot be derived for generic types; register each instantiation with a newtype",
        ));
    }
    if let syn::Data::Union(_) = input.data {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`Object` can only be derived for structs and enums",
        ));
    }

    let ident = &input.ident;
    let ObjectAttrs {
        bases,
        converts_to,
        converts_from,
        common_type,
        common_reference,
        eq,
        ord,
        invoke,
    } = ObjectAttrs::from_input(input)?;

    let (ct_keys, ct_values): (Vec<_>, Vec<_>) =
        common_type.iter().map(|e| (&e.key, &e.value)).unzip();
    let (cr_keys, cr_values): (Vec<_>, Vec<_>) =
        common_reference.iter().map(|e| (&e.key, &e.value)).unzip();
    let sigs = invoke.iter().map(|CallSig { params, ret }| quote! { fn(#(#params),*) -> #ret });

    Ok(quote! {
        ::tola_concepts::impl_object!(#ident {
            kind: ::tola_concepts::Class,
            bases: [#(#bases),*],
            converts_to: [#(#converts_to),*],
            converts_from: [#(#converts_from),*],
            common_type: [#(#ct_keys => #ct_values),*],
            common_reference: [#(#cr_keys => #cr_values),*],
            equality: [#(#eq),*],
            ordering: [#(#ord),*],
            invoke: [#(#sigs),*],
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(src: &str) -> String {
        let input: DeriveInput = syn::parse_str(src).unwrap();
        expand_derive_object(input).to_string()
    }

    #[test]
    fn test_forwards_keys_to_bridge() {
        let out = expand_str(
            "#[object(bases(Base), common_type(Y => Z))] #[object(bases(Mixin))] struct D;",
        );
        assert!(out.contains("impl_object !"));
        assert!(out.contains("bases : [Base , Mixin]"));
        assert!(out.contains("common_type : [Y => Z]"));
    }

    #[test]
    fn test_forwards_operators_and_calls() {
        let out = expand_str("#[object(eq(Self, Other), ord(Self), invoke(fn(i32, f64) -> bool))] struct P;");
        assert!(out.contains("equality : [Self , Other]"));
        assert!(out.contains("ordering : [Self]"));
        assert!(out.contains("invoke : [fn (i32 , f64) -> bool]"));
    }

    #[test]
    fn test_rejects_call_without_return_type() {
        let out = expand_str("#[object(invoke(fn(i32)))] struct P;");
        assert!(out.contains("expected a return type"));
    }

    #[test]
    fn test_rejects_generics() {
        let out = expand_str("struct Wrapper<T>(T);");
        assert!(out.contains("compile_error"));
    }

    #[test]
    fn test_rejects_unknown_key() {
        let out = expand_str("#[object(derives(Base))] struct D;");
        assert!(out.contains("unknown `object` key"));
    }
}
