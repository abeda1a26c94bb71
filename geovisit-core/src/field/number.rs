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

macro_rules! impl_num_field {
    ($ty:ty, $kind:expr, $scalar:ident, $widen:ty, $slot:ident) => {
        impl Field for $ty {
            const KIND: ValueKind = $kind;

            #[inline(always)]
            fn accept<V: Visitor>(&self, key: Key, visitor: &mut V) -> Result<(), Error> {
                visitor.visit_scalar(key, Scalar::$scalar(*self as $widen))
            }

            #[inline(always)]
            fn accept_mut<V: VisitorMut>(&mut self, key: Key, visitor: &mut V) -> Result<(), Error> {
                visitor.visit_scalar_mut(key, ScalarSlot::$slot(self))
            }

            #[inline(always)]
            fn default_value() -> Self {
                0 as $ty
            }
        }
    };
}

impl_num_field!(i32, ValueKind::Integer, Int, i64, I32);
impl_num_field!(i64, ValueKind::Integer, Int, i64, I64);
impl_num_field!(u32, ValueKind::Integer, UInt, u64, U32);
impl_num_field!(u64, ValueKind::Integer, UInt, u64, U64);
impl_num_field!(f32, ValueKind::Float, Float32, f32, F32);
impl_num_field!(f64, ValueKind::Float, Float, f64, F64);
