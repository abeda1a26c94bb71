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

//! Per-type field manifests.
//!
//! A [`Manifest`] is the ordered list of `(external name, kind)` pairs a type
//! declares once. It is built in a `static` by `#[derive(Visit)]` and is never
//! mutated afterwards, so it can be read from any thread without
//! synchronization.

use crate::types::ValueKind;

/// One manifest slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldEntry {
    name: &'static str,
    kind: ValueKind,
    nullable: bool,
}

impl FieldEntry {
    pub const fn new(name: &'static str, kind: ValueKind, nullable: bool) -> Self {
        Self {
            name,
            kind,
            nullable,
        }
    }

    /// The external name, matched case-sensitively against input keys.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Whether the slot is an `Option`, i.e. may be absent or `null`.
    #[inline(always)]
    pub const fn nullable(&self) -> bool {
        self.nullable
    }
}

/// Ordered field manifest of one aggregate type.
#[derive(Debug, PartialEq, Eq)]
pub struct Manifest {
    type_name: &'static str,
    fields: &'static [FieldEntry],
}

impl Manifest {
    pub const fn new(type_name: &'static str, fields: &'static [FieldEntry]) -> Self {
        Self { type_name, fields }
    }

    #[inline(always)]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Entries in declaration order, which is the visiting order.
    #[inline(always)]
    pub const fn fields(&self) -> &'static [FieldEntry] {
        self.fields
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldEntry::name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|entry| entry.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&'static FieldEntry> {
        self.fields.iter().find(|entry| entry.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Checks that no external name occurs twice.
    ///
    /// `#[derive(Visit)]` rejects duplicates on its own. Hand-written
    /// manifests get the same compile-time guarantee with a const assertion:
    ///
    /// ```
    /// use geovisit_core::manifest::{FieldEntry, Manifest};
    /// use geovisit_core::types::ValueKind;
    ///
    /// const POINT_FIELDS: [FieldEntry; 2] = [
    ///     FieldEntry::new("x", ValueKind::Float, false),
    ///     FieldEntry::new("y", ValueKind::Float, false),
    /// ];
    /// const POINT: Manifest = Manifest::new("Point", &POINT_FIELDS);
    /// const _: () = assert!(POINT.has_unique_names());
    /// ```
    pub const fn has_unique_names(&self) -> bool {
        let mut i = 0;
        while i < self.fields.len() {
            let mut j = i + 1;
            while j < self.fields.len() {
                if str_eq(self.fields[i].name, self.fields[j].name) {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
