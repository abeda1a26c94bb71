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

//! A `Visitable` written by hand instead of derived.

use geovisit::geo_elements::Position;
use geovisit::{debug_print, Codec, Error, Field, FieldEntry, Key, Manifest, ValueKind, Visitable};
use geovisit::{Visitor, VisitorMut};
use serde_json::json;

#[derive(Debug, PartialEq)]
struct Waypoint {
    label: String,
    position: Position,
    visits: Vec<u32>,
    note: Option<String>,
}

const WAYPOINT_FIELDS: [FieldEntry; 4] = [
    FieldEntry::new("label", ValueKind::String, false),
    FieldEntry::new("position", ValueKind::Aggregate, false),
    FieldEntry::new("visits", ValueKind::Sequence, false),
    FieldEntry::new("note", ValueKind::String, true),
];
const WAYPOINT: Manifest = Manifest::new("Waypoint", &WAYPOINT_FIELDS);
const _: () = assert!(WAYPOINT.has_unique_names());

static WAYPOINT_MANIFEST: Manifest = WAYPOINT;

impl Visitable for Waypoint {
    fn manifest() -> &'static Manifest {
        &WAYPOINT_MANIFEST
    }

    fn visit_fields<V: Visitor>(&self, visitor: &mut V) -> Result<(), Error> {
        self.label.accept(Key::Field("label"), visitor)?;
        self.position.accept(Key::Field("position"), visitor)?;
        self.visits.accept(Key::Field("visits"), visitor)?;
        self.note.accept(Key::Field("note"), visitor)
    }

    fn visit_fields_mut<V: VisitorMut>(&mut self, visitor: &mut V) -> Result<(), Error> {
        self.label.accept_mut(Key::Field("label"), visitor)?;
        self.position.accept_mut(Key::Field("position"), visitor)?;
        self.visits.accept_mut(Key::Field("visits"), visitor)?;
        self.note.accept_mut(Key::Field("note"), visitor)
    }

    fn visit_default() -> Self {
        Waypoint {
            label: String::default_value(),
            position: Position::default_value(),
            visits: Vec::default_value(),
            note: None,
        }
    }
}

impl Field for Waypoint {
    const KIND: ValueKind = ValueKind::Aggregate;

    fn accept<V: Visitor>(&self, key: Key, visitor: &mut V) -> Result<(), Error> {
        geovisit_core::field::struct_::accept(self, key, visitor)
    }

    fn accept_mut<V: VisitorMut>(&mut self, key: Key, visitor: &mut V) -> Result<(), Error> {
        geovisit_core::field::struct_::accept_mut(self, key, visitor)
    }

    fn default_value() -> Self {
        Self::visit_default()
    }
}

fn waypoint() -> Waypoint {
    Waypoint {
        label: "Pier 17".to_string(),
        position: Position {
            lat: 40.7061,
            lng: -74.0027,
        },
        visits: vec![3, 0, 12],
        note: None,
    }
}

#[test]
fn test_manual_manifest_encode() {
    let codec = Codec::default();
    let json = codec.encode(&waypoint()).unwrap();
    assert_eq!(
        json,
        json!({
            "label": "Pier 17",
            "position": {"lat": 40.7061, "lng": -74.0027},
            "visits": [3, 0, 12],
            "note": null
        })
    );
    let back: Waypoint = codec.decode(&json).unwrap();
    assert_eq!(back, waypoint());
}

#[test]
fn test_manual_manifest_with_derived_nested() {
    let codec = Codec::default();
    let mut value = vec![waypoint(), waypoint()];
    value[1].note = Some("closed on mondays".to_string());
    value[1].visits.clear();
    let json = codec.encode(&value).unwrap();
    assert_eq!(json[1]["visits"], json!([]));
    let back: Vec<Waypoint> = codec.decode(&json).unwrap();
    assert_eq!(back, value);

    assert_eq!(
        debug_print(&waypoint()).unwrap(),
        "Waypoint [label: \"Pier 17\", position: Position [lat: 40.7061, lng: -74.0027], \
         visits: [3, 0, 12], note: null]"
    );
}

#[test]
fn test_has_unique_names_detects_duplicates() {
    const DUPLICATED_FIELDS: [FieldEntry; 2] = [
        FieldEntry::new("id", ValueKind::Integer, false),
        FieldEntry::new("id", ValueKind::String, false),
    ];
    const DUPLICATED: Manifest = Manifest::new("Duplicated", &DUPLICATED_FIELDS);
    const UNIQUE: bool = DUPLICATED.has_unique_names();
    assert!(!UNIQUE);
    assert!(WAYPOINT.has_unique_names());
}
