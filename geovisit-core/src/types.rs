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

use std::fmt;

use serde_json::Value;

/// The kind of value held by a manifest slot or found in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Float,
    Bool,
    String,
    Aggregate,
    Sequence,
    /// Only ever describes input; no slot has this kind.
    Null,
}

impl ValueKind {
    /// Classifies a JSON value.
    ///
    /// Numbers that carry a fraction or exponent are `Float`, everything else
    /// numeric is `Integer`.
    pub fn of(value: &Value) -> ValueKind {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(n) if n.is_f64() => ValueKind::Float,
            Value::Number(_) => ValueKind::Integer,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Sequence,
            Value::Object(_) => ValueKind::Aggregate,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::String => "string",
            ValueKind::Aggregate => "object",
            ValueKind::Sequence => "array",
            ValueKind::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a value relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The value handed to the codec itself.
    Root,
    /// A manifest entry, by external name.
    Field(&'static str),
    /// An element of a sequence.
    Index(usize),
}

/// A borrowed scalar handed to read-only visitors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar<'a> {
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Kept apart from `Float` so it prints with `f32`'s shortest digits.
    Float32(f32),
    Bool(bool),
    Str(&'a str),
}

impl Scalar<'_> {
    pub const fn kind(&self) -> ValueKind {
        match self {
            Scalar::Int(_) | Scalar::UInt(_) => ValueKind::Integer,
            Scalar::Float(_) | Scalar::Float32(_) => ValueKind::Float,
            Scalar::Bool(_) => ValueKind::Bool,
            Scalar::Str(_) => ValueKind::String,
        }
    }
}

/// A mutable scalar slot handed to populating visitors.
#[derive(Debug)]
pub enum ScalarSlot<'a> {
    I32(&'a mut i32),
    I64(&'a mut i64),
    U32(&'a mut u32),
    U64(&'a mut u64),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Bool(&'a mut bool),
    Str(&'a mut String),
}

impl ScalarSlot<'_> {
    pub const fn kind(&self) -> ValueKind {
        match self {
            ScalarSlot::I32(_) | ScalarSlot::I64(_) | ScalarSlot::U32(_) | ScalarSlot::U64(_) => {
                ValueKind::Integer
            }
            ScalarSlot::F32(_) | ScalarSlot::F64(_) => ValueKind::Float,
            ScalarSlot::Bool(_) => ValueKind::Bool,
            ScalarSlot::Str(_) => ValueKind::String,
        }
    }
}

/// Whether a populating visitor found input for an aggregate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Present,
    /// Nothing to read; the slot keeps its default.
    Absent,
}

/// Dotted and indexed location of a field, e.g. `[2].user.id`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Key>,
}

impl FieldPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: Key) {
        if key != Key::Root {
            self.segments.push(key);
        }
    }

    pub fn pop(&mut self, key: Key) {
        if key != Key::Root {
            self.segments.pop();
        }
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Renders the path of `key` below the current location.
    pub fn render(&self, key: Key) -> String {
        let mut out = String::new();
        for segment in self.segments.iter().copied().chain(std::iter::once(key)) {
            match segment {
                Key::Root => {}
                Key::Field(name) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(name);
                }
                Key::Index(idx) => {
                    out.push('[');
                    out.push_str(&idx.to_string());
                    out.push(']');
                }
            }
        }
        if out.is_empty() {
            out.push('$');
        }
        out
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Key::Root))
    }
}
