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

mod test_helpers;

use geovisit::geo_elements::{GeoElements, Position};
use geovisit::{debug_print, diff, fields_eq, FieldDiff, FieldTrace, Visit};
use geovisit_core::trace::TraceValue;
use test_helpers::{sample_category, sample_element, sample_user};

#[test]
fn test_fields_eq_agrees_with_partial_eq() {
    let a = sample_element(1);
    let mut b = a.clone();
    assert!(fields_eq(&a, &b).unwrap());
    assert_eq!(a, b);

    b.user.middle_name = Some("King".to_string());
    assert!(!fields_eq(&a, &b).unwrap());
    assert_ne!(a, b);

    let nan = Position {
        lat: f64::NAN,
        lng: 0.0,
    };
    assert!(!fields_eq(&nan, &nan).unwrap());
    #[allow(clippy::eq_op)]
    let partial_eq = nan == nan;
    assert!(!partial_eq);
}

#[test]
fn test_diff_reports_nested_path() {
    let a = sample_element(1);
    let mut b = a.clone();
    b.category.name = "Parks".to_string();
    b.position.lng = -73.9857;

    let diffs = diff(&a, &b).unwrap();
    assert_eq!(
        diffs,
        vec![
            FieldDiff {
                path: "category.name".to_string(),
                left: Some(TraceValue::Str("Landmarks".to_string())),
                right: Some(TraceValue::Str("Parks".to_string())),
            },
            FieldDiff {
                path: "position.lng".to_string(),
                left: Some(TraceValue::Float(-74.0060)),
                right: Some(TraceValue::Float(-73.9857)),
            },
        ]
    );
    assert!(diff(&a, &a.clone()).unwrap().is_empty());
}

#[test]
fn test_diff_sequence_growth() {
    let a: GeoElements = vec![sample_element(0)];
    let b: GeoElements = vec![sample_element(0), sample_element(1)];
    let diffs = diff(&a, &b).unwrap();
    assert_eq!(diffs[0].path, "$");
    assert_eq!(diffs[0].left, Some(TraceValue::Sequence(1)));
    assert_eq!(diffs[0].right, Some(TraceValue::Sequence(2)));
    assert!(diffs[1..]
        .iter()
        .all(|d| d.path.starts_with("[1]") && d.left.is_none()));
}

#[test]
fn test_trace_entries() {
    let trace = FieldTrace::record(&sample_user()).unwrap();
    let paths: Vec<_> = trace.entries().iter().map(|e| e.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["id", "createdAt", "updatedAt", "firstName", "lastName", "middleName", "email"]
    );
    assert_eq!(trace.entries()[5].value, TraceValue::Null);
}

#[test]
fn test_debug_print() {
    let position = Position {
        lat: 40.7128,
        lng: -74.0060,
    };
    assert_eq!(
        debug_print(&position).unwrap(),
        "Position [lat: 40.7128, lng: -74.006]"
    );
    assert_eq!(
        debug_print(&sample_category()).unwrap(),
        "Category [id: 3, createdAt: \"2022-11-20T00:00:00Z\", \
         updatedAt: \"2023-01-04T12:00:00Z\", name: \"Landmarks\", \
         description: \"Buildings and monuments\"]"
    );
    let user = debug_print(&sample_user()).unwrap();
    assert!(user.contains("lastName: \"Lovelace\", middleName: null"));

    let printed = debug_print(&vec![sample_element(1)]).unwrap();
    assert!(printed.starts_with("[GeoElement [id: 1, "));
    assert!(printed.contains("user: User [id: 7, "));
    assert!(printed.ends_with("lng: -74.006]]]"));
}

#[derive(Visit, Debug, Clone, PartialEq)]
struct Leaf {
    c: i64,
}

#[derive(Visit, Debug, Clone, PartialEq)]
struct Branch {
    #[visit(rename = "b.c")]
    x: i64,
    b: Leaf,
}

#[test]
fn test_diff_with_colliding_paths() {
    let left = Branch {
        x: 1,
        b: Leaf { c: 2 },
    };
    let right = Branch {
        x: 2,
        b: Leaf { c: 1 },
    };
    let diffs = diff(&left, &right).unwrap();
    assert_eq!(
        diffs,
        vec![
            FieldDiff {
                path: "b.c".to_string(),
                left: Some(TraceValue::Int(1)),
                right: Some(TraceValue::Int(2)),
            },
            FieldDiff {
                path: "b.c".to_string(),
                left: Some(TraceValue::Int(2)),
                right: Some(TraceValue::Int(1)),
            },
        ]
    );

    let same_nested = Branch {
        x: 5,
        b: Leaf { c: 2 },
    };
    let diffs = diff(&left, &same_nested).unwrap();
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].left, Some(TraceValue::Int(1)));
    assert_eq!(diffs[0].right, Some(TraceValue::Int(5)));
    assert!(!fields_eq(&left, &right).unwrap());
}
