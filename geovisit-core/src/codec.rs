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
use tracing::debug;

use crate::config::{Config, MissingFieldPolicy};
use crate::error::Error;
use crate::field::Field;
use crate::json;
use crate::types::ValueKind;

/// Entry point for encoding values to JSON and decoding them back.
///
/// `Codec` holds only its [`Config`]; every call builds its own visitor, so
/// one instance can be shared freely between threads.
///
/// # Examples
///
/// ```rust
/// use geovisit_core::config::MissingFieldPolicy;
/// use geovisit_core::Codec;
///
/// let codec = Codec::default()
///     .missing_field_policy(MissingFieldPolicy::UseDefault)
///     .deny_unknown_keys(true)
///     .max_depth(16);
///
/// let value = codec.encode(&vec![1i64, 2, 3]).unwrap();
/// let back: Vec<i64> = codec.decode(&value).unwrap();
/// assert_eq!(back, vec![1, 2, 3]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Codec {
    config: Config,
}

impl Codec {
    pub fn new(config: Config) -> Self {
        Codec { config }
    }

    /// Sets how the decoder treats non-optional keys absent from the input.
    ///
    /// The default is [`MissingFieldPolicy::Strict`].
    pub fn missing_field_policy(mut self, policy: MissingFieldPolicy) -> Self {
        self.config.missing_field_policy = policy;
        self
    }

    /// Rejects input members that are not in the manifest when `true`.
    ///
    /// The default is `false`: unknown members are ignored.
    pub fn deny_unknown_keys(mut self, deny: bool) -> Self {
        self.config.deny_unknown_keys = deny;
        self
    }

    /// Sets the maximum nesting of aggregates and sequences below the root.
    ///
    /// The default is `64`.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encodes `value`, emitting object keys in manifest order.
    pub fn encode<T: Field>(&self, value: &T) -> Result<Value, Error> {
        debug!(ty = std::any::type_name::<T>(), "encoding");
        json::to_value(&self.config, value)
    }

    pub fn encode_to_string<T: Field>(&self, value: &T) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.encode(value)?)?)
    }

    pub fn encode_to_vec<T: Field>(&self, value: &T) -> Result<Vec<u8>, Error> {
        Ok(serde_json::to_vec(&self.encode(value)?)?)
    }

    /// Decodes a `T` from `value`; nothing is returned unless every field
    /// decoded successfully.
    pub fn decode<T: Field>(&self, value: &Value) -> Result<T, Error> {
        debug!(
            ty = std::any::type_name::<T>(),
            input = %ValueKind::of(value),
            "decoding"
        );
        json::from_value(&self.config, value)
    }

    pub fn decode_from_str<T: Field>(&self, text: &str) -> Result<T, Error> {
        let value: Value = serde_json::from_str(text)?;
        self.decode(&value)
    }

    pub fn decode_from_slice<T: Field>(&self, bytes: &[u8]) -> Result<T, Error> {
        let value: Value = serde_json::from_slice(bytes)?;
        self.decode(&value)
    }
}
