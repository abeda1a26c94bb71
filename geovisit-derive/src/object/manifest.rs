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

/// Generates the body of `Visitable::manifest`: two statics holding the
/// entries and the manifest, in declaration order.
pub fn gen_manifest(type_name: &str, source_fields: &[SourceField<'_>]) -> TokenStream {
    let entries: Vec<_> = manifest_fields(source_fields)
        .map(|(sf, name)| {
            let ty = sf.ty;
            quote! {
                ::geovisit_core::manifest::FieldEntry::new(
                    #name,
                    <#ty as ::geovisit_core::field::Field>::KIND,
                    <#ty as ::geovisit_core::field::Field>::NULLABLE,
                )
            }
        })
        .collect();
    let len = entries.len();

    quote! {
        static FIELDS: [::geovisit_core::manifest::FieldEntry; #len] = [#(#entries),*];
        static MANIFEST: ::geovisit_core::manifest::Manifest =
            ::geovisit_core::manifest::Manifest::new(#type_name, &FIELDS);
        &MANIFEST
    }
}
