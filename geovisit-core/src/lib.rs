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

//! # geovisit core
//!
//! Runtime half of the geovisit framework. A type declares its fields and
//! their external names once, as a [`Manifest`](manifest::Manifest); every
//! operation is a visitor replayed over that manifest:
//!
//! - [`json::JsonEncoder`] / [`json::JsonDecoder`]: JSON encode and decode
//! - [`trace::FieldTrace`]: field-for-field equality and diffs
//! - [`debug_print::DebugPrinter`]: human-readable rendering
//!
//! Manifests and the replay code are normally generated with
//! `#[derive(Visit)]` from `geovisit-derive`:
//!
//! ```rust, ignore
//! use geovisit_derive::Visit;
//!
//! #[derive(Visit, Debug, PartialEq)]
//! #[visit(rename_all = "camelCase")]
//! struct Category {
//!     id: i64,
//!     created_at: String,
//!     name: String,
//! }
//!
//! let codec = geovisit_core::Codec::default();
//! let json = codec.encode(&category)?;      // {"id": .., "createdAt": .., "name": ..}
//! let back: Category = codec.decode(&json)?;
//! ```
//!
//! Manifests are immutable `static` data; visitors own all traversal state,
//! so encoding and decoding are safe to run concurrently.

pub mod codec;
pub mod config;
pub mod debug_print;
pub mod error;
pub mod field;
pub mod json;
pub mod manifest;
pub mod trace;
pub mod types;

pub use codec::Codec;
pub use config::{Config, MissingFieldPolicy};
pub use error::Error;
pub use field::{Field, Visitable, Visitor, VisitorMut};
pub use manifest::{FieldEntry, Manifest};
pub use types::{FieldPath, Key, Presence, Scalar, ScalarSlot, ValueKind};
