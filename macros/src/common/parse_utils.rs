//! Common parsing utilities
//!
//! Shared parsing helpers for the `#[object(..)]` attribute lists.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    ReturnType, Token, Type, TypeBareFn,
};

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}

/// Parse comma-separated types (e.g., in `bases(A, B, C)`)
pub fn parse_type_list(input: ParseStream) -> syn::Result<Vec<Type>> {
    parse_comma_separated(input)
}

// =============================================================================
// Keyed Entries: `Other => Result`
// =============================================================================

/// One table entry: `Key => Value`
pub struct KeyedEntry {
    pub key: Type,
    pub value: Type,
}

impl Parse for KeyedEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Type = input.parse()?;
        input.parse::<Token![=>]>()?;
        let value: Type = input.parse()?;
        Ok(KeyedEntry { key, value })
    }
}

/// Parse comma-separated `Key => Value` entries
pub fn parse_entry_list(input: ParseStream) -> syn::Result<Vec<KeyedEntry>> {
    parse_comma_separated(input)
}

// =============================================================================
// Call Signatures: `fn(A, B) -> R`
// =============================================================================

/// Most parameters a registered call signature may take.
pub const MAX_PARAMS: usize = 4;

/// One call signature
pub struct CallSig {
    pub params: Vec<Type>,
    pub ret: Type,
}

impl Parse for CallSig {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let sig: TypeBareFn = input.parse()?;
        if let Some(variadic) = &sig.variadic {
            return Err(syn::Error::new_spanned(variadic, "variadic signatures are not supported"));
        }
        if sig.inputs.len() > MAX_PARAMS {
            return Err(syn::Error::new_spanned(
                &sig.inputs,
                format!("at most {MAX_PARAMS} parameters are supported"),
            ));
        }
        let ret = match &sig.output {
            ReturnType::Type(_, ty) => (**ty).clone(),
            ReturnType::Default => {
                return Err(syn::Error::new_spanned(&sig, "expected a return type, e.g. `fn(A) -> bool`"))
            }
        };
        let params = sig.inputs.iter().map(|arg| arg.ty.clone()).collect();
        Ok(CallSig { params, ret })
    }
}

/// Parse comma-separated `fn(..) -> R` signatures
pub fn parse_sig_list(input: ParseStream) -> syn::Result<Vec<CallSig>> {
    parse_comma_separated(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse::Parser;

    #[test]
    fn test_entry_list() {
        let entries = parse_entry_list
            .parse_str("Y => Z, Other => WithTQual<Base>,")
            .unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_entry_requires_arrow() {
        assert!(parse_entry_list.parse_str("Y, Z").is_err());
    }

    #[test]
    fn test_sig_list() {
        let sigs = parse_sig_list.parse_str("fn(f64) -> bool, fn(i32, &str) -> i64").unwrap();
        assert_eq!(sigs.len(), 2);
        assert_eq!(sigs[0].params.len(), 1);
        assert_eq!(sigs[1].params.len(), 2);
    }

    #[test]
    fn test_sig_needs_return_type() {
        assert!(parse_sig_list.parse_str("fn(i32)").is_err());
        assert!(parse_sig_list.parse_str("fn(u8, u8, u8, u8, u8) -> bool").is_err());
    }
}
