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

impl<T: Field> Field for Vec<T> {
    const KIND: ValueKind = ValueKind::Sequence;

    fn accept<V: Visitor>(&self, key: Key, visitor: &mut V) -> Result<(), Error> {
        visitor.begin_sequence(key, self.len())?;
        for (idx, item) in self.iter().enumerate() {
            item.accept(Key::Index(idx), visitor)?;
        }
        visitor.end_sequence(key, self.len())
    }

    fn accept_mut<V: VisitorMut>(&mut self, key: Key, visitor: &mut V) -> Result<(), Error> {
        let Some(len) = visitor.begin_sequence_mut(key)? else {
            return Ok(());
        };
        let mut items = Vec::with_capacity(len);
        for idx in 0..len {
            let mut item = T::default_value();
            item.accept_mut(Key::Index(idx), visitor)?;
            items.push(item);
        }
        *self = items;
        visitor.end_sequence_mut(key)
    }

    #[inline(always)]
    fn default_value() -> Self {
        Vec::new()
    }
}
