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

use crate::util::{manifest_fields, SourceField};

pub fn gen_visit_fields(source_fields: &[SourceField<'_>]) -> TokenStream {
    let calls: Vec<_> = manifest_fields(source_fields)
        .map(|(sf, name)| {
            let ty = sf.ty;
            let ident = sf.ident;
            quote! {
                <#ty as ::geovisit_core::field::Field>::accept(
                    &self.#ident,
                    ::geovisit_core::types::Key::Field(#name),
                    visitor,
                )?;
            }
        })
        .collect();
    if calls.is_empty() {
        return quote! {
            let _ = visitor;
            Ok(())
        };
    }
    quote! {
        #(#calls)*
        Ok(())
    }
}

pub fn gen_visit_fields_mut(source_fields: &[SourceField<'_>]) -> TokenStream {
    let calls: Vec<_> = manifest_fields(source_fields)
        .map(|(sf, name)| {
            let ty = sf.ty;
            let ident = sf.ident;
            quote! {
                <#ty as ::geovisit_core::field::Field>::accept_mut(
                    &mut self.#ident,
                    ::geovisit_core::types::Key::Field(#name),
                    visitor,
                )?;
            }
        })
        .collect();
    if calls.is_empty() {
        return quote! {
            let _ = visitor;
            Ok(())
        };
    }
    quote! {
        #(#calls)*
        Ok(())
    }
}

/// Skipped fields fall back to `Default`; manifest fields use their slot default.
pub fn gen_visit_default(source_fields: &[SourceField<'_>]) -> TokenStream {
    let inits = source_fields.iter().map(|sf| {
        let ident = sf.ident;
        let ty = sf.ty;
        if sf.is_skipped() {
            quote! { #ident: <#ty as ::core::default::Default>::default() }
        } else {
            quote! { #ident: <#ty as ::geovisit_core::field::Field>::default_value() }
        }
    });
    quote! {
        Self { #(#inits),* }
    }
}
