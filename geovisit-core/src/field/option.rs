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
use crate::types::{Key, ValueKind};

/// `Option<T>` is the nullable slot kind: `None` is visited as null and an
/// absent or null input decodes to `None` whatever the missing-field policy.
impl<T: Field> Field for Option<T> {
    const KIND: ValueKind = T::KIND;

    const NULLABLE: bool = true;

    fn accept<V: Visitor>(&self, key: Key, visitor: &mut V) -> Result<(), Error> {
        match self {
            Some(v) => v.accept(key, visitor),
            None => visitor.visit_null(key),
        }
    }

    fn accept_mut<V: VisitorMut>(&mut self, key: Key, visitor: &mut V) -> Result<(), Error> {
        if visitor.visit_optional(key)? {
            let mut inner = T::default_value();
            inner.accept_mut(key, visitor)?;
            *self = Some(inner);
        } else {
            *self = None;
        }
        Ok(())
    }

    #[inline(always)]
    fn default_value() -> Self {
        None
    }
}
