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

//! The geographic domain model: published map elements with their author,
//! category and coordinates.

use geovisit_derive::Visit;

#[derive(Visit, Debug, Clone, PartialEq)]
#[visit(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub created_at: String,
    pub updated_at: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub email: String,
}

#[derive(Visit, Debug, Clone, PartialEq)]
#[visit(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub created_at: String,
    pub updated_at: String,
    pub name: String,
    pub description: String,
}

/// WGS84 coordinates in degrees.
#[derive(Visit, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

/// A published map element.
///
/// `user_id` and `category_id` duplicate `user.id` and `category.id`; both
/// are kept as received and never reconciled.
#[derive(Visit, Debug, Clone, PartialEq)]
#[visit(rename_all = "camelCase")]
pub struct GeoElement {
    pub id: i64,
    pub created_at: String,
    pub updated_at: String,
    pub title: String,
    pub description: String,
    pub is_published: bool,
    #[visit(rename = "UserId")]
    pub user_id: i64,
    #[visit(rename = "CategoryId")]
    pub category_id: i64,
    pub user: User,
    pub category: Category,
    #[visit(rename = "type")]
    pub element_type: String,
    pub position: Position,
}

pub type GeoElements = Vec<GeoElement>;
