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

//! JSON as the external representation.

mod decoder;
mod encoder;

pub use decoder::JsonDecoder;
pub use encoder::JsonEncoder;

use serde_json::Value;

use crate::config::Config;
use crate::error::Error;
use crate::field::Field;
use crate::types::Key;

/// Encodes `value` with a fresh [`JsonEncoder`].
pub fn to_value<T: Field>(config: &Config, value: &T) -> Result<Value, Error> {
    let mut encoder = JsonEncoder::new(config);
    value.accept(Key::Root, &mut encoder)?;
    encoder.finish()
}

/// Decodes a `T` with a fresh [`JsonDecoder`].
///
/// The result is built from [`Field::default_value`] and only returned when
/// every slot was populated successfully.
pub fn from_value<T: Field>(config: &Config, value: &Value) -> Result<T, Error> {
    let mut decoder = JsonDecoder::new(config, value);
    let mut out = T::default_value();
    out.accept_mut(Key::Root, &mut decoder)?;
    Ok(out)
}
