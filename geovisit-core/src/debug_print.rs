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

use std::fmt::Write;

use crate::error::Error;
use crate::field::{Field, Visitor};
use crate::manifest::Manifest;
use crate::types::{Key, Scalar};

/// Renders values as `Type [name: value, ...]`.
///
/// Sequences render as `[a, b]`, strings are quoted and escaped, `None`
/// renders as `null`.
#[derive(Debug, Default)]
pub struct DebugPrinter {
    out: String,
    // one flag per open scope: has it printed a member yet
    scopes: Vec<bool>,
}

impl DebugPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn prefix(&mut self, key: Key) {
        if let Some(has_members) = self.scopes.last_mut() {
            if *has_members {
                self.out.push_str(", ");
            }
            *has_members = true;
        }
        if let Key::Field(name) = key {
            self.out.push_str(name);
            self.out.push_str(": ");
        }
    }
}

impl Visitor for DebugPrinter {
    fn visit_scalar(&mut self, key: Key, value: Scalar<'_>) -> Result<(), Error> {
        self.prefix(key);
        // writing into a String cannot fail
        let _ = match value {
            Scalar::Int(v) => write!(self.out, "{}", v),
            Scalar::UInt(v) => write!(self.out, "{}", v),
            Scalar::Float(v) => write!(self.out, "{:?}", v),
            Scalar::Float32(v) => write!(self.out, "{:?}", v),
            Scalar::Bool(v) => write!(self.out, "{}", v),
            Scalar::Str(v) => write!(self.out, "{:?}", v),
        };
        Ok(())
    }

    fn visit_null(&mut self, key: Key) -> Result<(), Error> {
        self.prefix(key);
        self.out.push_str("null");
        Ok(())
    }

    fn begin_aggregate(&mut self, key: Key, manifest: &'static Manifest) -> Result<(), Error> {
        self.prefix(key);
        self.out.push_str(manifest.type_name());
        self.out.push_str(" [");
        self.scopes.push(false);
        Ok(())
    }

    fn end_aggregate(&mut self, _key: Key, _manifest: &'static Manifest) -> Result<(), Error> {
        self.scopes.pop();
        self.out.push(']');
        Ok(())
    }

    fn begin_sequence(&mut self, key: Key, _len: usize) -> Result<(), Error> {
        self.prefix(key);
        self.out.push('[');
        self.scopes.push(false);
        Ok(())
    }

    fn end_sequence(&mut self, _key: Key, _len: usize) -> Result<(), Error> {
        self.scopes.pop();
        self.out.push(']');
        Ok(())
    }
}

/// Pretty-prints any [`Field`] through its manifest.
pub fn debug_print<T: Field>(value: &T) -> Result<String, Error> {
    let mut printer = DebugPrinter::new();
    value.accept(Key::Root, &mut printer)?;
    Ok(printer.finish())
}
