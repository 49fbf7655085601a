//! The per-arity table: every trait the runtime crate implements once per native tuple arity.
//!
//! For each arity `n` in `0..=max` this emits, for the tuple `(T0, .., Tn-1)`:
//!
//! - `Tuple`/`List` conversions between the flat tuple and its inductive list;
//! - `Fields`, the decomposition shapes (shared aliases, mutable aliases, columns) and
//!   `ClonedFields`, the slot-wise copy out of shared aliases;
//! - one `Field<I>`, `Locate<Ti, I>` and `LocateMut<Ti, I>` impl per position `I`, and the
//!   `Locate`/`LocateMut` impls at `Aliased<I>` reaching through a `&Ti` or `&mut Ti` slot;
//! - `Compare` slot by slot;
//! - the traversals `ForEach`, `ForEachMut`, `ZipForEach` and `ZipForEachMut`, the latter two only
//!   between tuples of the same arity.
//!
//! The output is expanded inside the runtime crate, so every path is rooted at `crate`.

use {
    proc_macro2::{Ident, Literal, Span, TokenStream},
    quote::quote,
    syn::Index,
};

use crate::unary;

/// Emit the whole table for arities `0..=max`, preceded by the `MAX_ARITY` constant.
pub fn impl_arities(max: usize) -> TokenStream {
    let max_lit = Literal::usize_unsuffixed(max);
    let tables = (0..=max).map(Arity::new).map(|arity| arity.to_tokens());
    quote! {
        /// The largest record arity covered by the decomposition table.
        ///
        /// Deriving [`Record`](crate::Record) for a struct with more fields fails to build. The
        /// `wide` feature raises this bound.
        pub const MAX_ARITY: usize = #max_lit;

        #(#tables)*
    }
}

/// The type parameters and slot indices of one arity.
struct Arity {
    n: usize,
    types: Vec<Ident>,
    lefts: Vec<Ident>,
    rights: Vec<Ident>,
    bindings: Vec<Ident>,
    slots: Vec<Index>,
}

impl Arity {
    fn new(n: usize) -> Self {
        let idents = |prefix: &str| {
            (0..n)
                .map(|i| Ident::new(&format!("{}{}", prefix, i), Span::call_site()))
                .collect::<Vec<_>>()
        };
        Arity {
            n,
            types: idents("T"),
            lefts: idents("A"),
            rights: idents("B"),
            bindings: idents("f"),
            slots: (0..n).map(Index::from).collect(),
        }
    }

    fn to_tokens(&self) -> TokenStream {
        let mut tokens = self.tuple_list();
        tokens.extend(self.fields());
        tokens.extend(self.positions());
        tokens.extend(self.aliased_positions());
        tokens.extend(self.compare());
        tokens.extend(self.traversals());
        tokens
    }

    fn tuple_list(&self) -> TokenStream {
        let types = &self.types;
        let list = types
            .iter()
            .rev()
            .fold(quote!(()), |tail, head| quote!((#head, #tail)));
        quote! {
            impl<#(#types),*> crate::tuple::Tuple for (#(#types,)*) {
                type AsList = #list;
            }

            impl<#(#types),*> crate::tuple::List for #list {
                type AsTuple = (#(#types,)*);
            }
        }
    }

    fn fields(&self) -> TokenStream {
        let Arity {
            n,
            types,
            bindings,
            slots,
            ..
        } = self;
        let arity = Literal::usize_unsuffixed(*n);
        let unary = unary::to_tokens(*n, &quote!(crate));
        quote! {
            impl<#(#types),*> crate::record::Fields for (#(#types,)*) {
                const ARITY: usize = #arity;
                type Arity = #unary;
                type Refs<'a> = (#(&'a #types,)*) where Self: 'a;
                type Muts<'a> = (#(&'a mut #types,)*) where Self: 'a;
                type Columns = (#(::std::vec::Vec<#types>,)*);

                #[allow(clippy::unused_unit)]
                fn refs(&self) -> Self::Refs<'_> {
                    (#(&self.#slots,)*)
                }

                #[allow(clippy::unused_unit)]
                fn muts(&mut self) -> Self::Muts<'_> {
                    (#(&mut self.#slots,)*)
                }

                #[allow(unused_variables, clippy::unused_unit)]
                fn columns(capacity: usize) -> Self::Columns {
                    (#(::std::vec::Vec::<#types>::with_capacity(capacity),)*)
                }
            }

            impl<#(#types: ::core::clone::Clone),*> crate::record::ClonedFields for (#(#types,)*) {
                #[allow(clippy::unused_unit)]
                fn cloned((#(#bindings,)*): Self::Refs<'_>) -> Self {
                    (#(::core::clone::Clone::clone(#bindings),)*)
                }
            }
        }
    }

    fn positions(&self) -> TokenStream {
        let types = &self.types;
        let impls = self.slots.iter().zip(types).map(|(slot, ty)| {
            let index = unary::to_tokens(slot.index as usize, &quote!(crate));
            quote! {
                impl<#(#types),*> crate::flat::Field<#index> for (#(#types,)*) {
                    type Output = #ty;

                    fn field(&self) -> &#ty {
                        &self.#slot
                    }

                    fn field_mut(&mut self) -> &mut #ty {
                        &mut self.#slot
                    }
                }

                impl<#(#types),*> crate::flat::Locate<#ty, #index> for (#(#types,)*) {
                    fn locate(&self) -> &#ty {
                        &self.#slot
                    }
                }

                impl<#(#types),*> crate::flat::LocateMut<#ty, #index> for (#(#types,)*) {
                    fn locate_mut(&mut self) -> &mut #ty {
                        &mut self.#slot
                    }
                }
            }
        });
        quote! { #(#impls)* }
    }

    /// `Locate` impls reaching through a slot of type `&Ti` or `&mut Ti` to its `Ti`, indexed by
    /// `Aliased<I>` so they never overlap the impls of `positions`.
    fn aliased_positions(&self) -> TokenStream {
        let types = &self.types;
        let impls = self.slots.iter().zip(types).map(|(slot, ty)| {
            let index = unary::to_tokens(slot.index as usize, &quote!(crate));
            let with_slot = |replacement: TokenStream| {
                types
                    .iter()
                    .map(|other| if other == ty { replacement.clone() } else { quote!(#other) })
                    .collect::<Vec<_>>()
            };
            let shared = with_slot(quote!(&'__r #ty));
            let unique = with_slot(quote!(&'__r mut #ty));
            quote! {
                impl<'__r, #(#types),*> crate::flat::Locate<#ty, crate::flat::Aliased<#index>>
                    for (#(#shared,)*)
                {
                    fn locate(&self) -> &#ty {
                        self.#slot
                    }
                }

                impl<'__r, #(#types),*> crate::flat::Locate<#ty, crate::flat::Aliased<#index>>
                    for (#(#unique,)*)
                {
                    fn locate(&self) -> &#ty {
                        &*self.#slot
                    }
                }

                impl<'__r, #(#types),*> crate::flat::LocateMut<#ty, crate::flat::Aliased<#index>>
                    for (#(#unique,)*)
                {
                    fn locate_mut(&mut self) -> &mut #ty {
                        &mut *self.#slot
                    }
                }
            }
        });
        quote! { #(#impls)* }
    }

    /// Structural equality of tuples, slot by slot.
    fn compare(&self) -> TokenStream {
        let Arity { types, slots, .. } = self;
        quote! {
            impl<#(#types: crate::compare::Compare),*> crate::compare::Compare for (#(#types,)*) {
                #[allow(unused_variables)]
                fn compare(&self, other: &Self) -> bool {
                    #(crate::compare::Compare::compare(&self.#slots, &other.#slots) &&)* true
                }
            }
        }
    }

    fn traversals(&self) -> TokenStream {
        let Arity {
            types,
            lefts,
            rights,
            slots,
            ..
        } = self;
        let positions = slots
            .iter()
            .map(|slot| Literal::usize_unsuffixed(slot.index as usize))
            .collect::<Vec<_>>();
        quote! {
            impl<V, #(#types),*> crate::visit::ForEach<V> for (#(#types,)*)
            where
                #(V: crate::visit::Visit<#types>,)*
            {
                #[allow(unused_variables)]
                fn for_each(&self, visitor: &mut V) {
                    #(<V as crate::visit::Visit<#types>>::visit(visitor, #positions, &self.#slots);)*
                }
            }

            impl<V, #(#types),*> crate::visit::ForEachMut<V> for (#(#types,)*)
            where
                #(V: crate::visit::VisitMut<#types>,)*
            {
                #[allow(unused_variables)]
                fn for_each_mut(&mut self, visitor: &mut V) {
                    #(<V as crate::visit::VisitMut<#types>>::visit_mut(
                        visitor,
                        #positions,
                        &mut self.#slots,
                    );)*
                }
            }

            impl<V, #(#lefts,)* #(#rights),*> crate::visit::ZipForEach<(#(#rights,)*), V>
                for (#(#lefts,)*)
            where
                #(V: crate::visit::VisitZip<#lefts, #rights>,)*
            {
                #[allow(unused_variables)]
                fn zip_for_each(&self, other: &(#(#rights,)*), visitor: &mut V) {
                    #(<V as crate::visit::VisitZip<#lefts, #rights>>::visit_zip(
                        visitor,
                        #positions,
                        &self.#slots,
                        &other.#slots,
                    );)*
                }
            }

            impl<V, #(#lefts,)* #(#rights),*> crate::visit::ZipForEachMut<(#(#rights,)*), V>
                for (#(#lefts,)*)
            where
                #(V: crate::visit::VisitZipMut<#lefts, #rights>,)*
            {
                #[allow(unused_variables)]
                fn zip_for_each_mut(&self, other: &mut (#(#rights,)*), visitor: &mut V) {
                    #(<V as crate::visit::VisitZipMut<#lefts, #rights>>::visit_zip_mut(
                        visitor,
                        #positions,
                        &self.#slots,
                        &mut other.#slots,
                    );)*
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squash(tokens: TokenStream) -> String {
        tokens.to_string().replace(' ', "")
    }

    #[test]
    fn empty_tuple_is_its_own_list() {
        let tokens = squash(Arity::new(0).tuple_list());
        assert!(tokens.contains("impl<>crate::tuple::Tuplefor(){typeAsList=();}"));
        assert!(tokens.contains("impl<>crate::tuple::Listfor(){typeAsTuple=();}"));
    }

    #[test]
    fn list_nests_to_the_right() {
        let tokens = squash(Arity::new(3).tuple_list());
        assert!(tokens.contains("typeAsList=(T0,(T1,(T2,())));"));
    }

    #[test]
    fn one_position_impl_per_slot() {
        let tokens = Arity::new(4).positions().to_string();
        assert_eq!(tokens.matches("crate :: flat :: Field <").count(), 4);
        assert_eq!(tokens.matches("crate :: flat :: Locate <").count(), 4);
        assert_eq!(tokens.matches("crate :: flat :: LocateMut <").count(), 4);
    }

    #[test]
    fn aliased_positions_reach_through_references() {
        let tokens = squash(Arity::new(2).aliased_positions());
        assert!(tokens.contains(
            "Locate<T1,crate::flat::Aliased<crate::unary::S<crate::unary::Z>>>for(T0,&'__rT1,)"
        ));
        assert!(tokens.contains(
            "LocateMut<T0,crate::flat::Aliased<crate::unary::Z>>for(&'__rmutT0,T1,)"
        ));
        assert!(!tokens.contains(
            "LocateMut<T0,crate::flat::Aliased<crate::unary::Z>>for(&'__rT0,"
        ));
    }

    #[test]
    fn tuples_compare_slot_by_slot() {
        let tokens = squash(Arity::new(2).compare());
        assert!(tokens.contains("impl<T0:crate::compare::Compare,T1:crate::compare::Compare>"));
        assert!(tokens.contains(
            "crate::compare::Compare::compare(&self.0,&other.0)&&\
             crate::compare::Compare::compare(&self.1,&other.1)&&true"
        ));
        assert!(squash(Arity::new(0).compare()).contains("for(){"));
    }

    #[test]
    fn zips_pair_up_equal_arities() {
        let tokens = squash(Arity::new(2).traversals());
        assert!(tokens.contains("ZipForEach<(B0,B1,),V>for(A0,A1,)"));
    }

    #[test]
    fn table_starts_with_the_bound() {
        let tokens = squash(impl_arities(2));
        assert!(tokens.contains("pubconstMAX_ARITY:usize=2;"));
        assert!(tokens.contains("for(T0,T1,)"));
        assert!(!tokens.contains("for(T0,T1,T2,)"));
    }
}
