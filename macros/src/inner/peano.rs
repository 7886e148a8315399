//! Peano number generation macro.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, Ident, LitInt};

// Streams are 16 nibbles and packs at most 8 types; anything much larger is a typo.
const MAX_DEPTH: usize = 64;

pub struct PeanoInput {
    pub max: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max > MAX_DEPTH {
            return Err(syn::Error::new(
                lit.span(),
                format!("peano! depth {} exceeds {}", max, MAX_DEPTH),
            ));
        }
        Ok(PeanoInput { max })
    }
}

pub fn expand_peano(input: PeanoInput) -> TokenStream {
    let aliases = (1..=input.max).map(|n| {
        let curr = Ident::new(&format!("D{}", n), Span::call_site());
        let prev = Ident::new(&format!("D{}", n - 1), Span::call_site());
        let doc = format!("Peano {}", n);
        quote! {
            #[doc = #doc]
            pub type #curr = S<#prev>;
        }
    });

    quote! {
        /// Peano 0
        pub type D0 = Z;
        #(#aliases)*
    }
}
