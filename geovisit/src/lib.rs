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

//! # Geovisit
//!
//! Declare a type's fields and their external names once, then drive JSON
//! encoding, decoding, equality, diffs and debug printing from that single
//! declaration.
//!
//! ```rust, ignore
//! use geovisit::geo_elements::Position;
//! use geovisit::Codec;
//!
//! let codec = Codec::default();
//! let position = Position { lat: 40.7128, lng: -74.0060 };
//! let text = codec.encode_to_string(&position)?;
//! assert_eq!(text, r#"{"lat":40.7128,"lng":-74.006}"#);
//! let back: Position = codec.decode_from_str(&text)?;
//! assert_eq!(back, position);
//! ```
//!
//! Decoding is strict by default: every non-optional manifest key must be
//! present. Switch to [`MissingFieldPolicy::UseDefault`] to leave absent
//! fields at their default instead.

pub mod geo_elements;

pub use geovisit_core::{
    codec::Codec,
    config::{Config, MissingFieldPolicy},
    debug_print::debug_print,
    error::Error,
    field::{Field, Visitable, Visitor, VisitorMut},
    manifest::{FieldEntry, Manifest},
    trace::{diff, fields_eq, FieldDiff, FieldTrace},
    types::{FieldPath, Key, ValueKind},
};
pub use geovisit_derive::Visit;
