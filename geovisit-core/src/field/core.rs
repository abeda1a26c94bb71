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

use crate::error::Error;
use crate::manifest::Manifest;
use crate::types::{Key, Presence, Scalar, ScalarSlot, ValueKind};

/// A read-only algorithm replayed over a value's manifest.
///
/// Every manifest entry produces exactly one call, in manifest order. Nested
/// aggregates and sequences are bracketed by `begin_*`/`end_*` with the key
/// of the slot that holds them; the nested entries are visited in between.
pub trait Visitor {
    fn visit_scalar(&mut self, key: Key, value: Scalar<'_>) -> Result<(), Error>;

    /// An optional slot holding `None`.
    fn visit_null(&mut self, key: Key) -> Result<(), Error>;

    fn begin_aggregate(&mut self, key: Key, manifest: &'static Manifest) -> Result<(), Error>;

    fn end_aggregate(&mut self, key: Key, manifest: &'static Manifest) -> Result<(), Error>;

    fn begin_sequence(&mut self, key: Key, len: usize) -> Result<(), Error>;

    fn end_sequence(&mut self, key: Key, len: usize) -> Result<(), Error>;
}

/// A populating algorithm replayed over a value's manifest.
///
/// The value being populated starts out as [`Field::default_value`]; a
/// visitor that has nothing to write for a slot leaves it untouched.
pub trait VisitorMut {
    fn visit_scalar_mut(&mut self, key: Key, slot: ScalarSlot<'_>) -> Result<(), Error>;

    /// Returns `true` if an optional slot has a value to read.
    fn visit_optional(&mut self, key: Key) -> Result<bool, Error>;

    fn begin_aggregate_mut(
        &mut self,
        key: Key,
        manifest: &'static Manifest,
    ) -> Result<Presence, Error>;

    /// Only called after `begin_aggregate_mut` returned [`Presence::Present`].
    fn end_aggregate_mut(&mut self, key: Key, manifest: &'static Manifest) -> Result<(), Error>;

    /// Returns the number of elements to populate, or `None` to keep the slot as is.
    fn begin_sequence_mut(&mut self, key: Key) -> Result<Option<usize>, Error>;

    /// Only called after `begin_sequence_mut` returned `Some`.
    fn end_sequence_mut(&mut self, key: Key) -> Result<(), Error>;
}

/// A value that can occupy a manifest slot.
///
/// Implemented for the supported scalars, `Option<T>`, `Vec<T>` and every
/// `#[derive(Visit)]` aggregate.
pub trait Field: Sized + 'static {
    const KIND: ValueKind;

    const NULLABLE: bool = false;

    fn accept<V: Visitor>(&self, key: Key, visitor: &mut V) -> Result<(), Error>;

    fn accept_mut<V: VisitorMut>(&mut self, key: Key, visitor: &mut V) -> Result<(), Error>;

    /// The value a slot holds before it is populated.
    fn default_value() -> Self;
}

/// An aggregate with a declared manifest.
///
/// Implementations are generated by `#[derive(Visit)]`; `visit_fields` and
/// `visit_fields_mut` replay the manifest entries in order, calling
/// [`Field::accept`]/[`Field::accept_mut`] with `Key::Field(name)`.
pub trait Visitable: Field {
    fn manifest() -> &'static Manifest;

    fn visit_fields<V: Visitor>(&self, visitor: &mut V) -> Result<(), Error>;

    fn visit_fields_mut<V: VisitorMut>(&mut self, visitor: &mut V) -> Result<(), Error>;

    /// A value with every field at its slot default.
    fn visit_default() -> Self;
}
