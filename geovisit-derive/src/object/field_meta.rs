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

//! Parsing of `#[visit(...)]` attributes.
//!
//! Field attributes:
//! - `rename = "Name"`: external name of the field
//! - `skip`: leave the field out of the manifest
//!
//! Container attributes:
//! - `rename_all = "camelCase" | "PascalCase" | "snake_case" | "SCREAMING_SNAKE_CASE"`
//! - `rename = "Name"`: type name recorded in the manifest

use std::collections::HashMap;

use syn::{Attribute, Field, LitStr};

/// Represents parsed `#[visit(...)]` field attributes
#[derive(Debug, Clone, Default)]
pub struct VisitFieldMeta {
    pub rename: Option<String>,
    pub skip: bool,
}

/// Represents parsed `#[visit(...)]` container attributes
#[derive(Debug, Clone, Default)]
pub struct VisitContainerMeta {
    pub rename: Option<String>,
    pub rename_all: RenameRule,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenameRule {
    #[default]
    None,
    CamelCase,
    PascalCase,
    SnakeCase,
    ScreamingSnakeCase,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "camelCase" => Ok(RenameRule::CamelCase),
            "PascalCase" => Ok(RenameRule::PascalCase),
            "snake_case" => Ok(RenameRule::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Ok(RenameRule::ScreamingSnakeCase),
            other => Err(syn::Error::new(
                lit.span(),
                format!("unsupported rename_all rule `{}`", other),
            )),
        }
    }

    /// Applies the rule to a snake_case Rust field name.
    pub fn apply(&self, field: &str) -> String {
        let field = field.strip_prefix("r#").unwrap_or(field);
        match self {
            RenameRule::None | RenameRule::SnakeCase => field.to_string(),
            RenameRule::ScreamingSnakeCase => field.to_ascii_uppercase(),
            RenameRule::CamelCase | RenameRule::PascalCase => {
                let mut out = String::with_capacity(field.len());
                let mut upper_next = *self == RenameRule::PascalCase;
                for ch in field.chars() {
                    if ch == '_' {
                        upper_next = !out.is_empty() || *self == RenameRule::PascalCase;
                    } else if upper_next {
                        out.push(ch.to_ascii_uppercase());
                        upper_next = false;
                    } else {
                        out.push(ch);
                    }
                }
                out
            }
        }
    }
}

fn parse_name(meta: &syn::meta::ParseNestedMeta) -> syn::Result<String> {
    let lit: LitStr = meta.value()?.parse()?;
    let name = lit.value();
    if name.is_empty() {
        return Err(syn::Error::new(lit.span(), "external name must not be empty"));
    }
    Ok(name)
}

/// Parse `#[visit(...)]` attributes from a field
pub fn parse_field_meta(field: &Field) -> syn::Result<VisitFieldMeta> {
    let mut meta = VisitFieldMeta::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("visit") {
            continue;
        }

        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("rename") {
                meta.rename = Some(parse_name(&nested)?);
            } else if nested.path.is_ident("skip") {
                meta.skip = true;
            } else {
                return Err(nested.error("unknown visit field attribute"));
            }
            Ok(())
        })?;
    }

    if meta.skip && meta.rename.is_some() {
        return Err(syn::Error::new_spanned(
            field,
            "`skip` and `rename` cannot be combined",
        ));
    }
    Ok(meta)
}

/// Parse `#[visit(...)]` attributes from the struct itself
pub fn parse_container_meta(attrs: &[Attribute]) -> syn::Result<VisitContainerMeta> {
    let mut meta = VisitContainerMeta::default();

    for attr in attrs {
        if !attr.path().is_ident("visit") {
            continue;
        }

        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("rename_all") {
                let lit: LitStr = nested.value()?.parse()?;
                meta.rename_all = RenameRule::parse(&lit)?;
            } else if nested.path.is_ident("rename") {
                meta.rename = Some(parse_name(&nested)?);
            } else {
                return Err(nested.error("unknown visit container attribute"));
            }
            Ok(())
        })?;
    }

    Ok(meta)
}

/// Validates that external names are unique within a struct
pub fn validate_external_names(fields: &[(&Field, String)]) -> syn::Result<()> {
    let mut seen: HashMap<&str, &Field> = HashMap::new();

    for (field, name) in fields {
        if let Some(existing) = seen.get(name.as_str()) {
            let existing_ident = existing
                .ident
                .as_ref()
                .map(|i| i.to_string())
                .unwrap_or_default();
            return Err(syn::Error::new_spanned(
                field,
                format!(
                    "duplicate external name \"{}\", already used by field `{}`",
                    name, existing_ident
                ),
            ));
        }
        seen.insert(name.as_str(), *field);
    }

    Ok(())
}
