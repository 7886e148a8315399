//! Identity streams.
//!
//! ```text
//! "my_crate::Base" -> FNV-1a (u64) -> HashStream16<n0, .., n15>
//! ```

use proc_macro2::TokenStream;
use quote::quote;

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

pub fn expand_make_routing_stream(input: TokenStream) -> TokenStream {
    // 1. String literal: hash here
    if let Ok(lit) = syn::parse2::<syn::LitStr>(input.clone()) {
        let hash = fnv1a_64(&lit.value());
        let nibbles = (0..16).map(|i| ((hash >> (i * 4)) & 0xF) as u8);

        return quote! {
            ::tola_concepts::primitives::stream::HashStream16<#(#nibbles),*>
        };
    }

    // 2. Anything else is a const &str expression (usually concat!(module_path!(), ..)),
    //    hashed by the const fn twin once the compiler has expanded it
    let nibbles = (0u8..16).map(|i| {
        quote! { { ::tola_concepts::primitives::const_utils::hash_nibble(#input, #i) } }
    });

    quote! {
        ::tola_concepts::primitives::stream::HashStream16<#(#nibbles),*>
    }
}

fn fnv1a_64(s: &str) -> u64 {
    s.bytes().fold(FNV_OFFSET, |hash, b| (hash ^ b as u64).wrapping_mul(FNV_PRIME))
}
