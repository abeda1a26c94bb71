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

use crate::error::Error;
use crate::field::{Field, Visitor, VisitorMut};
use crate::types::{Key, Scalar, ScalarSlot, ValueKind};

impl Field for String {
    const KIND: ValueKind = ValueKind::String;

    #[inline(always)]
    fn accept<V: Visitor>(&self, key: Key, visitor: &mut V) -> Result<(), Error> {
        visitor.visit_scalar(key, Scalar::Str(self.as_str()))
    }

    #[inline(always)]
    fn accept_mut<V: VisitorMut>(&mut self, key: Key, visitor: &mut V) -> Result<(), Error> {
        visitor.visit_scalar_mut(key, ScalarSlot::Str(self))
    }

    #[inline(always)]
    fn default_value() -> Self {
        String::new()
    }
}
