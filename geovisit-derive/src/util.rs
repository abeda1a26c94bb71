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

use syn::{Field, Ident, Type};

use crate::object::field_meta::{parse_field_meta, RenameRule};

/// A named struct field together with its resolved external name.
#[derive(Clone)]
pub struct SourceField<'a> {
    pub field: &'a Field,
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// `None` for `#[visit(skip)]` fields.
    pub external_name: Option<String>,
}

impl SourceField<'_> {
    pub fn is_skipped(&self) -> bool {
        self.external_name.is_none()
    }
}

/// Returns the struct's fields in declaration order with their external
/// names resolved from `rename` or the container's `rename_all` rule.
pub fn source_fields<'a>(
    fields: &'a syn::FieldsNamed,
    rename_all: RenameRule,
) -> syn::Result<Vec<SourceField<'a>>> {
    let mut result = Vec::with_capacity(fields.named.len());
    for field in &fields.named {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let meta = parse_field_meta(field)?;
        let external_name = if meta.skip {
            None
        } else {
            Some(
                meta.rename
                    .unwrap_or_else(|| rename_all.apply(&ident.to_string())),
            )
        };
        result.push(SourceField {
            field,
            ident,
            ty: &field.ty,
            external_name,
        });
    }
    Ok(result)
}

/// Fields that take part in the manifest, paired with their external names.
pub fn manifest_fields<'a, 'b>(
    source_fields: &'b [SourceField<'a>],
) -> impl Iterator<Item = (&'b SourceField<'a>, &'b str)> {
    source_fields
        .iter()
        .filter_map(|sf| sf.external_name.as_deref().map(|name| (sf, name)))
}
