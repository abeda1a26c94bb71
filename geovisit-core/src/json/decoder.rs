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

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::{Config, MissingFieldPolicy};
use crate::ensure;
use crate::error::Error;
use crate::field::VisitorMut;
use crate::manifest::Manifest;
use crate::types::{FieldPath, Key, Presence, ScalarSlot, ValueKind};

/// Visitor that populates a value from a `serde_json::Value`.
///
/// Keys are looked up by name, so the order of members in the input does
/// not matter. Absent non-optional keys follow the configured
/// [`MissingFieldPolicy`]; absent or `null` optional keys become `None`.
pub struct JsonDecoder<'de, 'c> {
    config: &'c Config,
    root: &'de Value,
    frames: Vec<&'de Value>,
    path: FieldPath,
}

impl<'de, 'c> JsonDecoder<'de, 'c> {
    pub fn new(config: &'c Config, root: &'de Value) -> Self {
        Self {
            config,
            root,
            frames: Vec::new(),
            path: FieldPath::new(),
        }
    }

    fn lookup(&self, key: Key) -> Option<&'de Value> {
        match key {
            Key::Root => Some(self.root),
            Key::Field(name) => {
                let top: &'de Value = self.frames.last().copied()?;
                top.get(name)
            }
            Key::Index(idx) => {
                let top: &'de Value = self.frames.last().copied()?;
                top.get(idx)
            }
        }
    }

    /// Looks up `key`, applying the missing-field policy when it is absent.
    fn resolve(&self, key: Key) -> Result<Option<&'de Value>, Error> {
        if let Some(value) = self.lookup(key) {
            return Ok(Some(value));
        }
        match self.config.missing_field_policy() {
            MissingFieldPolicy::Strict => Err(Error::missing_field(self.path.render(key))),
            MissingFieldPolicy::UseDefault => {
                debug!(field = %self.path.render(key), "field missing, keeping default");
                Ok(None)
            }
        }
    }

    fn mismatch(&self, key: Key, expected: ValueKind, found: &Value) -> Error {
        Error::type_mismatch(self.path.render(key), expected, ValueKind::of(found))
    }

    fn out_of_range(&self, key: Key, found: &Value, target: &str) -> Error {
        Error::unrepresentable(
            self.path.render(key),
            format!("{} does not fit in {}", found, target),
        )
    }

    fn member_path(&self, key: Key, member: &str) -> String {
        let parent = self.path.render(key);
        if self.path.is_empty() && key == Key::Root {
            member.to_owned()
        } else {
            format!("{}.{}", parent, member)
        }
    }

    fn check_members(
        &self,
        key: Key,
        manifest: &'static Manifest,
        object: &serde_json::Map<String, Value>,
    ) -> Result<(), Error> {
        for name in object.keys() {
            if manifest.contains(name) {
                continue;
            }
            if self.config.is_deny_unknown_keys() {
                return Err(Error::unknown_field(self.member_path(key, name)));
            }
            trace!(
                field = %self.member_path(key, name),
                aggregate = manifest.type_name(),
                "ignoring unknown field"
            );
        }
        Ok(())
    }

    fn enter(&mut self, key: Key, value: &'de Value) -> Result<(), Error> {
        self.path.push(key);
        ensure!(
            self.path.depth() as u32 <= self.config.max_depth(),
            Error::depth_exceed(format!(
                "nesting at `{}` exceeds max depth {}",
                self.path,
                self.config.max_depth()
            ))
        );
        self.frames.push(value);
        Ok(())
    }

    fn leave(&mut self, key: Key) -> Result<(), Error> {
        self.path.pop(key);
        self.frames
            .pop()
            .map(|_| ())
            .ok_or_else(|| Error::invalid_data("scope closed without being opened"))
    }
}

impl VisitorMut for JsonDecoder<'_, '_> {
    fn visit_scalar_mut(&mut self, key: Key, slot: ScalarSlot<'_>) -> Result<(), Error> {
        let Some(value) = self.resolve(key)? else {
            return Ok(());
        };
        let expected = slot.kind();
        match slot {
            ScalarSlot::I32(out) => {
                let v = match value.as_i64() {
                    Some(v) => v,
                    None if value.is_u64() => return Err(self.out_of_range(key, value, "i32")),
                    None => return Err(self.mismatch(key, expected, value)),
                };
                *out = i32::try_from(v).map_err(|_| self.out_of_range(key, value, "i32"))?;
            }
            ScalarSlot::I64(out) => {
                *out = match value.as_i64() {
                    Some(v) => v,
                    None if value.is_u64() => return Err(self.out_of_range(key, value, "i64")),
                    None => return Err(self.mismatch(key, expected, value)),
                };
            }
            ScalarSlot::U32(out) => {
                let v = match value.as_u64() {
                    Some(v) => v,
                    None if value.is_i64() => return Err(self.out_of_range(key, value, "u32")),
                    None => return Err(self.mismatch(key, expected, value)),
                };
                *out = u32::try_from(v).map_err(|_| self.out_of_range(key, value, "u32"))?;
            }
            ScalarSlot::U64(out) => {
                *out = match value.as_u64() {
                    Some(v) => v,
                    None if value.is_i64() => return Err(self.out_of_range(key, value, "u64")),
                    None => return Err(self.mismatch(key, expected, value)),
                };
            }
            ScalarSlot::F32(out) => {
                let v = value
                    .as_f64()
                    .ok_or_else(|| self.mismatch(key, expected, value))?;
                let narrowed = v as f32;
                // overflow to infinity and underflow to zero both lose the value
                ensure!(
                    narrowed.is_finite() && (narrowed != 0.0 || v == 0.0),
                    self.out_of_range(key, value, "f32")
                );
                *out = narrowed;
            }
            ScalarSlot::F64(out) => {
                *out = value
                    .as_f64()
                    .ok_or_else(|| self.mismatch(key, expected, value))?;
            }
            ScalarSlot::Bool(out) => {
                *out = value
                    .as_bool()
                    .ok_or_else(|| self.mismatch(key, expected, value))?;
            }
            ScalarSlot::Str(out) => {
                let s = value
                    .as_str()
                    .ok_or_else(|| self.mismatch(key, expected, value))?;
                out.clear();
                out.push_str(s);
            }
        }
        Ok(())
    }

    fn visit_optional(&mut self, key: Key) -> Result<bool, Error> {
        Ok(!matches!(self.lookup(key), None | Some(Value::Null)))
    }

    fn begin_aggregate_mut(
        &mut self,
        key: Key,
        manifest: &'static Manifest,
    ) -> Result<Presence, Error> {
        let Some(value) = self.resolve(key)? else {
            return Ok(Presence::Absent);
        };
        let Some(object) = value.as_object() else {
            return Err(self.mismatch(key, ValueKind::Aggregate, value));
        };
        self.check_members(key, manifest, object)?;
        self.enter(key, value)?;
        Ok(Presence::Present)
    }

    fn end_aggregate_mut(&mut self, key: Key, _manifest: &'static Manifest) -> Result<(), Error> {
        self.leave(key)
    }

    fn begin_sequence_mut(&mut self, key: Key) -> Result<Option<usize>, Error> {
        let Some(value) = self.resolve(key)? else {
            return Ok(None);
        };
        let Some(items) = value.as_array() else {
            return Err(self.mismatch(key, ValueKind::Sequence, value));
        };
        self.enter(key, value)?;
        Ok(Some(items.len()))
    }

    fn end_sequence_mut(&mut self, key: Key) -> Result<(), Error> {
        self.leave(key)
    }
}
