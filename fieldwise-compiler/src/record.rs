//! Parsing of derive inputs into record shapes, and the `Record`/`Compare` impls generated for them.

use {
    proc_macro2::{Ident, Literal, Span, TokenStream},
    quote::quote,
    syn::{Data, DeriveInput, Error, Fields, Generics, Type},
};

use crate::{crate_path, RecordError, MAX_ARITY};

/// A struct accepted as a record: its name, generics, and fields in declaration order.
#[derive(Debug, Clone)]
pub struct RecordShape {
    ident: Ident,
    generics: Generics,
    layout: Layout,
}

/// How the fields of a record are declared.
#[derive(Debug, Clone)]
enum Layout {
    /// `struct R { a: A, b: B }`, including `struct R {}`.
    Named(Vec<(Ident, Type)>),
    /// `struct R(A, B);`, including `struct R();`.
    Unnamed(Vec<Type>),
    /// `struct R;`
    Unit,
}

impl RecordShape {
    /// Accept a struct of at most [`MAX_ARITY`] fields; reject everything else.
    pub fn from_derive_input(input: DeriveInput) -> Result<Self, Error> {
        let name = input.ident.to_string();
        let reject = |error: RecordError| Error::new_spanned(&input.ident, error);

        let layout = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => Layout::Named(
                    named
                        .named
                        .iter()
                        .filter_map(|f| f.ident.clone().map(|ident| (ident, f.ty.clone())))
                        .collect(),
                ),
                Fields::Unnamed(unnamed) => {
                    Layout::Unnamed(unnamed.unnamed.iter().map(|f| f.ty.clone()).collect())
                }
                Fields::Unit => Layout::Unit,
            },
            Data::Enum(_) => return Err(reject(RecordError::Enum(name))),
            Data::Union(_) => return Err(reject(RecordError::Union(name))),
        };

        let shape = RecordShape {
            ident: input.ident.clone(),
            generics: input.generics.clone(),
            layout,
        };

        let found = shape.arity();
        if found > MAX_ARITY {
            return Err(reject(RecordError::TooManyFields {
                name,
                found,
                max: MAX_ARITY,
            }));
        }
        Ok(shape)
    }

    /// The number of fields, as counted from the declaration.
    pub fn arity(&self) -> usize {
        match &self.layout {
            Layout::Named(fields) => fields.len(),
            Layout::Unnamed(types) => types.len(),
            Layout::Unit => 0,
        }
    }

    fn types(&self) -> Vec<&Type> {
        match &self.layout {
            Layout::Named(fields) => fields.iter().map(|(_, ty)| ty).collect(),
            Layout::Unnamed(types) => types.iter().collect(),
            Layout::Unit => Vec::new(),
        }
    }

    /// The local names each field is bound to when the record is destructured.
    fn bindings(&self) -> Vec<Ident> {
        match &self.layout {
            Layout::Named(fields) => fields.iter().map(|(ident, _)| ident.clone()).collect(),
            Layout::Unnamed(types) => (0..types.len())
                .map(|i| Ident::new(&format!("__field{}", i), Span::call_site()))
                .collect(),
            Layout::Unit => Vec::new(),
        }
    }

    /// A pattern (or constructor expression, they are spelled the same) naming every binding.
    fn pattern(&self) -> TokenStream {
        let bindings = self.bindings();
        match &self.layout {
            Layout::Named(_) => quote! { Self { #(#bindings),* } },
            Layout::Unnamed(_) => quote! { Self(#(#bindings),*) },
            Layout::Unit => quote! { Self },
        }
    }

    /// The `Record` impl: field types, counted arity, and one destructuring per access mode.
    pub fn to_record_impl(&self) -> TokenStream {
        let c = crate_path();
        let ident = &self.ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let types = self.types();
        let arity = Literal::usize_unsuffixed(self.arity());

        let (into_fields, from_fields, fields, fields_mut) = if self.arity() == 0 {
            let constructor = self.pattern();
            (
                quote! { let _ = self; },
                quote! { let () = fields; #constructor },
                quote! { let _ = self; },
                quote! { let _ = self; },
            )
        } else {
            let pattern = self.pattern();
            let bindings = self.bindings();
            let tuple = quote! { (#(#bindings,)*) };
            (
                quote! { let #pattern = self; #tuple },
                quote! { let #tuple = fields; #pattern },
                quote! { let #pattern = self; #tuple },
                quote! { let #pattern = self; #tuple },
            )
        };

        quote! {
            impl #impl_generics #c::Record for #ident #ty_generics #where_clause {
                type Fields = (#(#types,)*);

                const ARITY: usize = #arity;

                fn into_fields(self) -> Self::Fields {
                    #into_fields
                }

                fn from_fields(fields: Self::Fields) -> Self {
                    #from_fields
                }

                fn fields(&self) -> <Self::Fields as #c::Fields>::Refs<'_> {
                    #fields
                }

                fn fields_mut(&mut self) -> <Self::Fields as #c::Fields>::Muts<'_> {
                    #fields_mut
                }
            }
        }
    }

    /// The `Compare` impl: structural equality through the record's reference tuple. Type
    /// parameters must be comparable in turn, so nested records recurse through their own impls.
    pub fn to_compare_impl(&self) -> TokenStream {
        let c = crate_path();
        let ident = &self.ident;
        let mut generics = self.generics.clone();
        for param in generics.type_params_mut() {
            param.bounds.push(syn::parse_quote!(#c::Compare));
        }
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        quote! {
            impl #impl_generics #c::Compare for #ident #ty_generics #where_clause {
                fn compare(&self, other: &Self) -> bool {
                    #c::compare(self, other)
                }
            }
        }
    }
}
