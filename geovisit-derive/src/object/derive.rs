// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::object::field_meta::{parse_container_meta, validate_external_names};
use crate::object::{manifest, visit};
use crate::util::{manifest_fields, source_fields};

pub fn derive_visit(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;

    if !ast.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &ast.generics,
            "#[derive(Visit)] does not support generic types: manifests are static",
        ));
    }

    let named = match &ast.data {
        Data::Struct(s) => match &s.fields {
            Fields::Named(named) => named,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    name,
                    "#[derive(Visit)] requires a struct with named fields",
                ))
            }
        },
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "#[derive(Visit)] is not supported on enums",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "#[derive(Visit)] is not supported on unions",
            ))
        }
    };

    let container = parse_container_meta(&ast.attrs)?;
    let source_fields = source_fields(named, container.rename_all)?;
    let named_pairs: Vec<_> = manifest_fields(&source_fields)
        .map(|(sf, external)| (sf.field, external.to_string()))
        .collect();
    validate_external_names(&named_pairs)?;

    let type_name = container.rename.unwrap_or_else(|| name.to_string());
    let manifest_ts = manifest::gen_manifest(&type_name, &source_fields);
    let visit_fields_ts = visit::gen_visit_fields(&source_fields);
    let visit_fields_mut_ts = visit::gen_visit_fields_mut(&source_fields);
    let visit_default_ts = visit::gen_visit_default(&source_fields);

    Ok(quote! {
        impl ::geovisit_core::field::Visitable for #name {
            fn manifest() -> &'static ::geovisit_core::manifest::Manifest {
                #manifest_ts
            }

            fn visit_fields<V: ::geovisit_core::field::Visitor>(
                &self,
                visitor: &mut V,
            ) -> ::core::result::Result<(), ::geovisit_core::error::Error> {
                #visit_fields_ts
            }

            fn visit_fields_mut<V: ::geovisit_core::field::VisitorMut>(
                &mut self,
                visitor: &mut V,
            ) -> ::core::result::Result<(), ::geovisit_core::error::Error> {
                #visit_fields_mut_ts
            }

            fn visit_default() -> Self {
                #visit_default_ts
            }
        }

        impl ::geovisit_core::field::Field for #name {
            const KIND: ::geovisit_core::types::ValueKind =
                ::geovisit_core::types::ValueKind::Aggregate;

            #[inline(always)]
            fn accept<V: ::geovisit_core::field::Visitor>(
                &self,
                key: ::geovisit_core::types::Key,
                visitor: &mut V,
            ) -> ::core::result::Result<(), ::geovisit_core::error::Error> {
                ::geovisit_core::field::struct_::accept(self, key, visitor)
            }

            #[inline(always)]
            fn accept_mut<V: ::geovisit_core::field::VisitorMut>(
                &mut self,
                key: ::geovisit_core::types::Key,
                visitor: &mut V,
            ) -> ::core::result::Result<(), ::geovisit_core::error::Error> {
                ::geovisit_core::field::struct_::accept_mut(self, key, visitor)
            }

            #[inline(always)]
            fn default_value() -> Self {
                <Self as ::geovisit_core::field::Visitable>::visit_default()
            }
        }
    })
}
