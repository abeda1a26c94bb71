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

//! Manifest-driven field traces.
//!
//! A [`FieldTrace`] flattens a value into `(path, leaf)` entries in visiting
//! order. Two values of the same type are field-for-field equal exactly when
//! their traces are equal, which gives equality and diffing for any
//! [`Field`] without per-type code.

use std::collections::{HashMap, VecDeque};

use crate::error::Error;
use crate::field::{Field, Visitor};
use crate::manifest::Manifest;
use crate::types::{FieldPath, Key, Scalar};

#[derive(Clone, Debug, PartialEq)]
pub enum TraceValue {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Str(String),
    Null,
    /// Start of a sequence with the given number of elements.
    Sequence(usize),
}

impl From<Scalar<'_>> for TraceValue {
    fn from(value: Scalar<'_>) -> Self {
        match value {
            Scalar::Int(v) => TraceValue::Int(v),
            Scalar::UInt(v) => TraceValue::UInt(v),
            Scalar::Float(v) => TraceValue::Float(v),
            Scalar::Float32(v) => TraceValue::Float(v as f64),
            Scalar::Bool(v) => TraceValue::Bool(v),
            Scalar::Str(v) => TraceValue::Str(v.to_owned()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TraceEntry {
    pub path: String,
    pub value: TraceValue,
}

/// A field whose value differs between two traces, or exists in only one.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDiff {
    pub path: String,
    pub left: Option<TraceValue>,
    pub right: Option<TraceValue>,
}

#[derive(Debug, Default)]
pub struct FieldTrace {
    path: FieldPath,
    entries: Vec<TraceEntry>,
}

impl FieldTrace {
    pub fn record<T: Field>(value: &T) -> Result<Self, Error> {
        let mut trace = FieldTrace::default();
        value.accept(Key::Root, &mut trace)?;
        Ok(trace)
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    fn push(&mut self, key: Key, value: TraceValue) {
        self.entries.push(TraceEntry {
            path: self.path.render(key),
            value,
        });
    }
}

impl Visitor for FieldTrace {
    fn visit_scalar(&mut self, key: Key, value: Scalar<'_>) -> Result<(), Error> {
        self.push(key, value.into());
        Ok(())
    }

    fn visit_null(&mut self, key: Key) -> Result<(), Error> {
        self.push(key, TraceValue::Null);
        Ok(())
    }

    fn begin_aggregate(&mut self, key: Key, _manifest: &'static Manifest) -> Result<(), Error> {
        self.path.push(key);
        Ok(())
    }

    fn end_aggregate(&mut self, key: Key, _manifest: &'static Manifest) -> Result<(), Error> {
        self.path.pop(key);
        Ok(())
    }

    fn begin_sequence(&mut self, key: Key, len: usize) -> Result<(), Error> {
        self.push(key, TraceValue::Sequence(len));
        self.path.push(key);
        Ok(())
    }

    fn end_sequence(&mut self, key: Key, _len: usize) -> Result<(), Error> {
        self.path.pop(key);
        Ok(())
    }
}

/// Field-for-field equality driven by the manifest.
///
/// Floats compare with `==`, so a NaN field is unequal to itself, as with a
/// derived `PartialEq`.
pub fn fields_eq<T: Field>(left: &T, right: &T) -> Result<bool, Error> {
    Ok(FieldTrace::record(left)?.entries == FieldTrace::record(right)?.entries)
}

/// Lists every path whose value differs between `left` and `right`.
///
/// Paths are reported in the visiting order of `left`, followed by paths
/// that only `right` has (e.g. extra sequence elements).
///
/// Entries pair up by position for as long as both traces visit the same
/// paths, so two fields rendering to the same path (a field renamed to
/// `"b.c"` next to a nested `b.c`) are still compared separately. Past the
/// first divergence, entries pair by path in order of occurrence.
pub fn diff<T: Field>(left: &T, right: &T) -> Result<Vec<FieldDiff>, Error> {
    let left = FieldTrace::record(left)?.entries;
    let right = FieldTrace::record(right)?.entries;

    let shared = left
        .iter()
        .zip(&right)
        .take_while(|(l, r)| l.path == r.path)
        .count();

    let mut diffs = Vec::new();
    for (l, r) in left[..shared].iter().zip(&right[..shared]) {
        if l.value != r.value {
            diffs.push(FieldDiff {
                path: l.path.clone(),
                left: Some(l.value.clone()),
                right: Some(r.value.clone()),
            });
        }
    }

    let mut right_index: HashMap<&str, VecDeque<usize>> = HashMap::new();
    for (idx, entry) in right.iter().enumerate().skip(shared) {
        right_index
            .entry(entry.path.as_str())
            .or_default()
            .push_back(idx);
    }
    let mut matched = vec![false; right.len()];
    for entry in &left[shared..] {
        let other = right_index
            .get_mut(entry.path.as_str())
            .and_then(VecDeque::pop_front);
        if let Some(idx) = other {
            matched[idx] = true;
            if right[idx].value == entry.value {
                continue;
            }
        }
        diffs.push(FieldDiff {
            path: entry.path.clone(),
            left: Some(entry.value.clone()),
            right: other.map(|idx| right[idx].value.clone()),
        });
    }
    for (idx, entry) in right.iter().enumerate().skip(shared) {
        if !matched[idx] {
            diffs.push(FieldDiff {
                path: entry.path.clone(),
                left: None,
                right: Some(entry.value.clone()),
            });
        }
    }
    Ok(diffs)
}
