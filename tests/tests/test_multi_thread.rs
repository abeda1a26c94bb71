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

use std::thread;

use geovisit::geo_elements::{GeoElement, GeoElements};
use geovisit::Codec;
use test_helpers::sample_element;

#[test]
fn test_shared_codec_across_threads() {
    let codec = Codec::default();
    let results: Vec<GeoElements> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let codec = &codec;
                scope.spawn(move || {
                    let elements: GeoElements = (0..16).map(|i| sample_element(t * 100 + i)).collect();
                    let text = codec.encode_to_string(&elements).unwrap();
                    let back: GeoElements = codec.decode_from_str(&text).unwrap();
                    assert_eq!(back, elements);
                    back
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (t, elements) in results.iter().enumerate() {
        let first: &GeoElement = &elements[0];
        assert_eq!(first.id, t as i64 * 100);
        assert_eq!(elements.len(), 16);
    }
}
