//! Unary type-level numbers as tokens.

use {proc_macro2::TokenStream, quote::quote};

/// Spell out `n` as nested successors of zero, e.g. `S<S<Z>>` for 2, rooted at `krate`.
pub fn to_tokens(n: usize, krate: &TokenStream) -> TokenStream {
    let mut tokens = quote! { #krate::unary::Z };
    for _ in 0..n {
        tokens = quote! { #krate::unary::S<#tokens> };
    }
    tokens
}

/// The `ToUnary`/`ToConstant` impls linking `Number<N>` and its unary spelling, for `0..=max`.
///
/// These are expanded inside the runtime crate, so paths are rooted at `crate`.
pub fn conversion_impls(max: usize) -> TokenStream {
    let krate = quote!(crate);
    let impls = (0..=max).map(|n| {
        let unary = to_tokens(n, &krate);
        quote! {
            impl crate::unary::ToUnary for crate::unary::Number<#n> {
                type AsUnary = #unary;
            }

            impl crate::unary::ToConstant for #unary {
                type AsConstant = crate::unary::Number<#n>;
            }
        }
    });
    quote! { #(#impls)* }
}
