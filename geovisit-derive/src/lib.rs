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

//! # Geovisit Derive Macro
//!
//! This crate provides `#[derive(Visit)]` for the geovisit framework. The
//! macro reads a struct's fields once and emits everything the runtime needs
//! to replay them:
//!
//! - a `static` `Manifest` listing each field's external name, value kind
//!   and nullability, in declaration order
//! - `Visitable::visit_fields` / `visit_fields_mut`, one `accept` call per
//!   manifest entry
//! - `Visitable::visit_default`, the value a decode starts from
//! - a `Field` impl so the struct can be nested inside other aggregates,
//!   `Option<T>` and `Vec<T>`
//!
//! ## Attributes
//!
//! Container level, inside `#[visit(...)]`:
//! - `rename_all = "camelCase" | "PascalCase" | "snake_case" | "SCREAMING_SNAKE_CASE"`
//! - `rename = "Name"`: the type name shown in diagnostics and debug output
//!
//! Field level:
//! - `rename = "externalName"`: overrides `rename_all` for one field
//! - `skip`: the field is left out of the manifest and decodes to `Default::default()`
//!
//! Two fields resolving to the same external name are rejected at compile time.
//!
//! ## Example
//!
//! ```rust, ignore
//! use geovisit_derive::Visit;
//!
//! #[derive(Visit, Debug, PartialEq)]
//! #[visit(rename_all = "camelCase")]
//! struct GeoElement {
//!     id: i64,
//!     is_published: bool,
//!     #[visit(rename = "UserId")]
//!     user_id: i64,
//!     #[visit(rename = "type")]
//!     element_type: String,
//! }
//! ```
//!
//! Only structs with named fields and no generic parameters are supported.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;
mod util;

/// Derive macro generating a field manifest and its visit code.
///
/// See the crate documentation for the supported `#[visit(...)]` attributes.
#[proc_macro_derive(Visit, attributes(visit))]
pub fn proc_macro_derive_visit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_visit(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
