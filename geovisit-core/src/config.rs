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

/// What the decoder does when a non-optional manifest key is absent from
/// the input.
///
/// The policy belongs to the [`Config`] and therefore applies uniformly to
/// every field of every type decoded with it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingFieldPolicy {
    /// Fail with [`Error::MissingField`](crate::error::Error::MissingField).
    #[default]
    Strict,
    /// Leave the field at its slot default and continue.
    UseDefault,
}

/// Configuration for encoding and decoding.
///
/// Shared between the [`Codec`](crate::codec::Codec) and the visitors it
/// creates so that every traversal sees the same options.
#[derive(Clone, Debug)]
pub struct Config {
    /// Policy for non-optional keys absent from decoder input.
    pub missing_field_policy: MissingFieldPolicy,
    /// Whether input keys outside the manifest are rejected.
    pub deny_unknown_keys: bool,
    /// Maximum nesting of aggregates and sequences below the root.
    pub max_depth: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            missing_field_policy: MissingFieldPolicy::Strict,
            deny_unknown_keys: false,
            max_depth: 64,
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn missing_field_policy(&self) -> MissingFieldPolicy {
        self.missing_field_policy
    }

    #[inline(always)]
    pub fn is_deny_unknown_keys(&self) -> bool {
        self.deny_unknown_keys
    }

    #[inline(always)]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}
