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

//! Glue between [`Visitable`] aggregates and visitors, used by the code
//! `#[derive(Visit)]` generates for [`Field`](crate::field::Field).

use crate::error::Error;
use crate::field::{Visitable, Visitor, VisitorMut};
use crate::types::{Key, Presence};

#[inline(always)]
pub fn accept<T: Visitable, V: Visitor>(this: &T, key: Key, visitor: &mut V) -> Result<(), Error> {
    let manifest = T::manifest();
    visitor.begin_aggregate(key, manifest)?;
    this.visit_fields(visitor)?;
    visitor.end_aggregate(key, manifest)
}

#[inline(always)]
pub fn accept_mut<T: Visitable, V: VisitorMut>(
    this: &mut T,
    key: Key,
    visitor: &mut V,
) -> Result<(), Error> {
    let manifest = T::manifest();
    match visitor.begin_aggregate_mut(key, manifest)? {
        Presence::Absent => Ok(()),
        Presence::Present => {
            this.visit_fields_mut(visitor)?;
            visitor.end_aggregate_mut(key, manifest)
        }
    }
}
