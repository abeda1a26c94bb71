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

use geovisit::geo_elements::{GeoElement, GeoElements, Position};
use geovisit::{Codec, Error};
use serde_json::json;
use test_helpers::{init_tracing, sample_element};

#[test]
fn test_unknown_keys_ignored_by_default() {
    init_tracing();
    let codec = Codec::default();
    let element = sample_element(1);
    let mut input = codec.encode(&element).unwrap();
    input["thumbnail"] = json!("https://example.com/a.png");
    input["user"]["avatar"] = json!(null);
    let back: GeoElement = codec.decode(&input).unwrap();
    assert_eq!(back, element);
}

#[test]
fn test_deny_unknown_keys() {
    let codec = Codec::default().deny_unknown_keys(true);
    let element = sample_element(1);
    let encoded = codec.encode(&element).unwrap();

    let mut input = encoded.clone();
    input["thumbnail"] = json!("a.png");
    let err = codec.decode::<GeoElement>(&input).unwrap_err();
    assert_eq!(err, Error::unknown_field("thumbnail"));

    let mut input = encoded.clone();
    input["category"]["color"] = json!("#ff0000");
    let err = codec.decode::<GeoElement>(&input).unwrap_err();
    assert_eq!(err, Error::unknown_field("category.color"));

    let mut list = json!([encoded.clone(), encoded]);
    list[1]["position"]["alt"] = json!(12.5);
    let err = codec.decode::<GeoElements>(&list).unwrap_err();
    assert_eq!(err, Error::unknown_field("[1].position.alt"));

    // case-sensitive: `userId` is not `UserId`
    let mut input = codec.encode(&element).unwrap();
    input["userId"] = json!(1);
    let err = codec.decode::<GeoElement>(&input).unwrap_err();
    assert_eq!(err.path(), Some("userId"));
}

#[test]
fn test_max_depth() {
    let elements = vec![sample_element(0)];

    // [0] is one level below the root, [0].user two
    let codec = Codec::default().max_depth(2);
    let json = codec.encode(&elements).unwrap();
    let back: GeoElements = codec.decode(&json).unwrap();
    assert_eq!(back, elements);

    let shallow = Codec::default().max_depth(1);
    let err = shallow.encode(&elements).unwrap_err();
    assert!(matches!(err, Error::DepthExceed(_)));
    let err = shallow.decode::<GeoElements>(&json).unwrap_err();
    assert!(matches!(err, Error::DepthExceed(_)));

    let flat = Codec::default().max_depth(0);
    let position = Position { lat: 1.5, lng: 2.5 };
    let back: Position = flat.decode(&flat.encode(&position).unwrap()).unwrap();
    assert_eq!(back, position);
}

#[test]
fn test_max_depth_nested_sequences() {
    let grid: Vec<Vec<Vec<i32>>> = vec![vec![vec![1, 2], vec![]], vec![vec![3]]];
    let codec = Codec::default().max_depth(2);
    let json = codec.encode(&grid).unwrap();
    assert_eq!(json, json!([[[1, 2], []], [[3]]]));
    let back: Vec<Vec<Vec<i32>>> = codec.decode(&json).unwrap();
    assert_eq!(back, grid);

    let err = Codec::default()
        .max_depth(1)
        .decode::<Vec<Vec<Vec<i32>>>>(&json)
        .unwrap_err();
    assert!(err.to_string().contains("[0][0]"), "{}", err);
}
