//! Exact identity strings.
//!
//! ```text
//! "my_crate::Base@4:10" -> 64 sampled bytes -> 128 nibbles
//!                       -> IdChunk<HashStream16<..>, .. IdEnd>   (8 chunks)
//! ```

use proc_macro2::TokenStream;
use quote::quote;

const CHUNKS: usize = 8;
const CHUNK_NIBBLES: usize = 16;

pub fn expand_make_identity(input: TokenStream) -> TokenStream {
    let literal = syn::parse2::<syn::LitStr>(input.clone()).ok().map(|lit| lit.value());

    // Build from the innermost chunk outwards.
    let mut out = quote! { ::tola_concepts::primitives::identity::IdEnd };
    for chunk in (0..CHUNKS).rev() {
        let nibbles = (0..CHUNK_NIBBLES).map(|i| {
            let n = chunk * CHUNK_NIBBLES + i;
            match &literal {
                // 1. String literal: spell the nibble here
                Some(s) => {
                    let nibble = identity_nibble(s, n);
                    quote! { #nibble }
                }
                // 2. Anything else: leave it to the const fn twin
                None => quote! { { ::tola_concepts::primitives::const_utils::identity_nibble(#input, #n) } },
            }
        });
        out = quote! {
            ::tola_concepts::primitives::identity::IdChunk<
                ::tola_concepts::primitives::stream::HashStream16<#(#nibbles),*>,
                #out
            >
        };
    }
    out
}

fn sample_byte(s: &str, i: usize) -> u8 {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let idx = match i {
        _ if len <= 64 => i,
        0..32 => i,
        32..48 => (len - 16) / 2 + (i - 32),
        _ => len - 16 + (i - 48),
    };
    bytes.get(idx).copied().unwrap_or(0)
}

fn identity_nibble(s: &str, n: usize) -> u8 {
    let byte = sample_byte(s, n / 2);
    if n % 2 == 0 { byte >> 4 } else { byte & 0xF }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_spelled_eagerly() {
        let out = expand_make_identity(quote! { "a::S" }).to_string();
        assert_eq!(out.matches("IdChunk").count(), CHUNKS);
        assert!(out.contains("HashStream16 < 6u8 , 1u8 , 3u8 , 10u8"));
        assert!(!out.contains("identity_nibble"));
    }

    #[test]
    fn test_expression_defers_to_const_fn() {
        let out = expand_make_identity(quote! { concat!(module_path!(), "::S") }).to_string();
        assert_eq!(out.matches("identity_nibble").count(), CHUNKS * CHUNK_NIBBLES);
    }

    #[test]
    fn test_sampling_matches_the_library() {
        let long = "x".repeat(40) + &"y".repeat(40);
        assert_eq!(sample_byte(&long, 0), b'x');
        assert_eq!(sample_byte(&long, 63), b'y');
        assert_eq!(sample_byte("ab", 2), 0);
    }
}
