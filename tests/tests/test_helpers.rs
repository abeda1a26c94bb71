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

#![allow(dead_code)]

use geovisit::geo_elements::{Category, GeoElement, Position, User};
use geovisit::Codec;
use geovisit_core::Field;
use std::fmt::Debug;

/// Installs a test-writer subscriber once; `RUST_LOG=geovisit_core=trace`
/// shows the decoder's field-level events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Generic helper for encode/decode roundtrip testing
pub fn test_roundtrip<T>(codec: &Codec, value: T)
where
    T: Field + PartialEq + Debug,
{
    let json = codec.encode(&value).unwrap();
    let result: T = codec.decode(&json).unwrap();
    assert_eq!(value, result);

    let bytes = codec.encode_to_vec(&value).unwrap();
    let result: T = codec.decode_from_slice(&bytes).unwrap();
    assert_eq!(value, result);
}

pub fn sample_user() -> User {
    User {
        id: 7,
        created_at: "2023-05-01T10:00:00Z".to_string(),
        updated_at: "2023-06-12T08:30:00Z".to_string(),
        first_name: "Ada".to_string(),
        last_name: Some("Lovelace".to_string()),
        middle_name: None,
        email: "ada@example.com".to_string(),
    }
}

pub fn sample_category() -> Category {
    Category {
        id: 3,
        created_at: "2022-11-20T00:00:00Z".to_string(),
        updated_at: "2023-01-04T12:00:00Z".to_string(),
        name: "Landmarks".to_string(),
        description: "Buildings and monuments".to_string(),
    }
}

pub fn sample_element(id: i64) -> GeoElement {
    let user = sample_user();
    let category = sample_category();
    GeoElement {
        id,
        created_at: "2023-07-01T09:15:00Z".to_string(),
        updated_at: "2023-07-02T17:45:00Z".to_string(),
        title: format!("Point of interest {}", id),
        description: "Observation deck with a view over the harbour".to_string(),
        is_published: true,
        user_id: user.id,
        category_id: category.id,
        user,
        category,
        element_type: "landmark".to_string(),
        position: Position {
            lat: 40.7128 + id as f64 / 1000.0,
            lng: -74.0060,
        },
    }
}
