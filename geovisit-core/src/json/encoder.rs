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

use serde_json::{Map, Number, Value};

use crate::config::Config;
use crate::ensure;
use crate::error::Error;
use crate::field::Visitor;
use crate::manifest::Manifest;
use crate::types::{FieldPath, Key, Scalar};

enum Frame {
    Object(Map<String, Value>),
    Array(Vec<Value>),
}

/// Visitor that writes a value into a `serde_json::Value`.
///
/// Object keys are emitted in manifest order. The source value is only read.
pub struct JsonEncoder<'c> {
    config: &'c Config,
    frames: Vec<Frame>,
    path: FieldPath,
    output: Option<Value>,
}

impl<'c> JsonEncoder<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self {
            config,
            frames: Vec::new(),
            path: FieldPath::new(),
            output: None,
        }
    }

    /// Returns the encoded document once the root value has been visited.
    pub fn finish(self) -> Result<Value, Error> {
        ensure!(
            self.frames.is_empty(),
            Error::invalid_data("encoder finished with unclosed scopes")
        );
        self.output
            .ok_or_else(|| Error::invalid_data("encoder finished without a value"))
    }

    fn emit(&mut self, key: Key, value: Value) -> Result<(), Error> {
        match self.frames.last_mut() {
            None => {
                self.output = Some(value);
                Ok(())
            }
            Some(Frame::Object(map)) => match key {
                Key::Field(name) => {
                    map.insert(name.to_owned(), value);
                    Ok(())
                }
                other => Err(Error::invalid_data(format!(
                    "object member addressed by {:?}",
                    other
                ))),
            },
            Some(Frame::Array(items)) => {
                items.push(value);
                Ok(())
            }
        }
    }

    fn enter(&mut self, key: Key, frame: Frame) -> Result<(), Error> {
        self.path.push(key);
        ensure!(
            self.path.depth() as u32 <= self.config.max_depth(),
            Error::depth_exceed(format!(
                "nesting at `{}` exceeds max depth {}",
                self.path,
                self.config.max_depth()
            ))
        );
        self.frames.push(frame);
        Ok(())
    }

    fn float(&self, key: Key, v: f64) -> Result<Value, Error> {
        Number::from_f64(v).map(Value::Number).ok_or_else(|| {
            Error::unrepresentable(self.path.render(key), format!("non-finite float {}", v))
        })
    }

    fn leave(&mut self, key: Key) -> Result<Frame, Error> {
        self.path.pop(key);
        self.frames
            .pop()
            .ok_or_else(|| Error::invalid_data("scope closed without being opened"))
    }
}

impl Visitor for JsonEncoder<'_> {
    fn visit_scalar(&mut self, key: Key, value: Scalar<'_>) -> Result<(), Error> {
        let value = match value {
            Scalar::Int(v) => Value::from(v),
            Scalar::UInt(v) => Value::from(v),
            Scalar::Float(v) => self.float(key, v)?,
            Scalar::Float32(v) => {
                ensure!(
                    v.is_finite(),
                    Error::unrepresentable(self.path.render(key), format!("non-finite float {}", v))
                );
                // widen through f32's shortest digits so 0.1f32 stays 0.1
                let widened = v.to_string().parse::<f64>().map_err(|e| {
                    Error::unrepresentable(self.path.render(key), format!("{}: {}", v, e))
                })?;
                self.float(key, widened)?
            }
            Scalar::Bool(v) => Value::Bool(v),
            Scalar::Str(v) => Value::String(v.to_owned()),
        };
        self.emit(key, value)
    }

    fn visit_null(&mut self, key: Key) -> Result<(), Error> {
        self.emit(key, Value::Null)
    }

    fn begin_aggregate(&mut self, key: Key, manifest: &'static Manifest) -> Result<(), Error> {
        self.enter(key, Frame::Object(Map::with_capacity(manifest.len())))
    }

    fn end_aggregate(&mut self, key: Key, _manifest: &'static Manifest) -> Result<(), Error> {
        match self.leave(key)? {
            Frame::Object(map) => self.emit(key, Value::Object(map)),
            Frame::Array(_) => Err(Error::invalid_data("aggregate closed while in a sequence")),
        }
    }

    fn begin_sequence(&mut self, key: Key, len: usize) -> Result<(), Error> {
        self.enter(key, Frame::Array(Vec::with_capacity(len)))
    }

    fn end_sequence(&mut self, key: Key, _len: usize) -> Result<(), Error> {
        match self.leave(key)? {
            Frame::Array(items) => self.emit(key, Value::Array(items)),
            Frame::Object(_) => Err(Error::invalid_data("sequence closed while in an aggregate")),
        }
    }
}
