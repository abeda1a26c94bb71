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

//! Error type for manifest-driven encoding and decoding.
//!
//! Runtime failures are always reported to the caller of
//! [`Codec::encode`](crate::codec::Codec::encode) or
//! [`Codec::decode`](crate::codec::Codec::decode). Declaration errors
//! (duplicate external names, unsupported shapes) never reach this type: the
//! derive macro rejects them at compile time.

use std::borrow::Cow;

use thiserror::Error;

use crate::types::ValueKind;

/// Global flag to check if GEOVISIT_PANIC_ON_ERROR environment variable is set at compile time.
/// Set GEOVISIT_PANIC_ON_ERROR=1 at compile time to enable panic on error.
pub const PANIC_ON_ERROR: bool = option_env!("GEOVISIT_PANIC_ON_ERROR").is_some();

/// Error type for geovisit encoding and decoding operations.
///
/// # IMPORTANT: Always Use Static Constructor Functions
///
/// **DO NOT** construct error variants directly using the enum syntax.
/// **ALWAYS** use the provided static constructor functions instead.
///
/// ```rust
/// use geovisit_core::error::Error;
/// use geovisit_core::types::ValueKind;
///
/// let err = Error::missing_field("position.lat");
/// let err = Error::type_mismatch("isPublished", ValueKind::Bool, ValueKind::String);
/// let err = Error::invalid_data(format!("unexpected byte {}", 42));
/// ```
///
/// ## Debug Mode: GEOVISIT_PANIC_ON_ERROR
///
/// Building with `GEOVISIT_PANIC_ON_ERROR=1` makes every constructor panic at
/// the place the error is created, which together with `RUST_BACKTRACE=1`
/// pinpoints the failing field.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A manifest key is absent from the input and the decode policy is strict.
    ///
    /// Do not construct this variant directly; use [`Error::missing_field`] instead.
    #[error("missing field `{path}`")]
    MissingField { path: Cow<'static, str> },

    /// The input holds a value of the wrong kind for the field.
    ///
    /// Do not construct this variant directly; use [`Error::type_mismatch`] instead.
    #[error("type mismatch at `{path}`: expected {expected}, found {found}")]
    TypeMismatch {
        path: Cow<'static, str>,
        expected: ValueKind,
        found: ValueKind,
    },

    /// A value cannot be expressed in the external representation.
    ///
    /// Do not construct this variant directly; use [`Error::unrepresentable`] instead.
    #[error("unrepresentable value at `{path}`: {reason}")]
    UnrepresentableValue {
        path: Cow<'static, str>,
        reason: Cow<'static, str>,
    },

    /// The input carries a key that is not in the manifest.
    ///
    /// Do not construct this variant directly; use [`Error::unknown_field`] instead.
    #[error("unknown field `{path}`")]
    UnknownField { path: Cow<'static, str> },

    /// Maximum nesting depth exceeded.
    ///
    /// Do not construct this variant directly; use [`Error::depth_exceed`] instead.
    #[error("{0}")]
    DepthExceed(Cow<'static, str>),

    /// Malformed input or an inconsistent visitor state.
    ///
    /// Do not construct this variant directly; use [`Error::invalid_data`] instead.
    #[error("{0}")]
    InvalidData(Cow<'static, str>),

    /// Generic unknown error.
    ///
    /// Do not construct this variant directly; use [`Error::unknown`] instead.
    #[error("{0}")]
    Unknown(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::MissingField`] for the given field path.
    ///
    /// If `GEOVISIT_PANIC_ON_ERROR` is set, this will panic with the error message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn missing_field<S: Into<Cow<'static, str>>>(path: S) -> Self {
        let err = Error::MissingField { path: path.into() };
        if PANIC_ON_ERROR {
            panic!("GEOVISIT_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::TypeMismatch`] naming the field and both kinds.
    ///
    /// If `GEOVISIT_PANIC_ON_ERROR` is set, this will panic with the error message.
    ///
    /// # Example
    /// ```
    /// use geovisit_core::error::Error;
    /// use geovisit_core::types::ValueKind;
    ///
    /// let err = Error::type_mismatch("id", ValueKind::Integer, ValueKind::String);
    /// assert_eq!(err.to_string(), "type mismatch at `id`: expected integer, found string");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn type_mismatch<S: Into<Cow<'static, str>>>(
        path: S,
        expected: ValueKind,
        found: ValueKind,
    ) -> Self {
        let err = Error::TypeMismatch {
            path: path.into(),
            expected,
            found,
        };
        if PANIC_ON_ERROR {
            panic!("GEOVISIT_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::UnrepresentableValue`].
    ///
    /// If `GEOVISIT_PANIC_ON_ERROR` is set, this will panic with the error message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unrepresentable<P, R>(path: P, reason: R) -> Self
    where
        P: Into<Cow<'static, str>>,
        R: Into<Cow<'static, str>>,
    {
        let err = Error::UnrepresentableValue {
            path: path.into(),
            reason: reason.into(),
        };
        if PANIC_ON_ERROR {
            panic!("GEOVISIT_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::UnknownField`] for the given field path.
    ///
    /// If `GEOVISIT_PANIC_ON_ERROR` is set, this will panic with the error message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unknown_field<S: Into<Cow<'static, str>>>(path: S) -> Self {
        let err = Error::UnknownField { path: path.into() };
        if PANIC_ON_ERROR {
            panic!("GEOVISIT_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::DepthExceed`] from a string or static message.
    ///
    /// If `GEOVISIT_PANIC_ON_ERROR` is set, this will panic with the error message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn depth_exceed<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::DepthExceed(s.into());
        if PANIC_ON_ERROR {
            panic!("GEOVISIT_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::InvalidData`] from a string or static message.
    ///
    /// If `GEOVISIT_PANIC_ON_ERROR` is set, this will panic with the error message.
    ///
    /// # Example
    /// ```
    /// use geovisit_core::error::Error;
    ///
    /// let err = Error::invalid_data("expected a JSON document");
    /// let err = Error::invalid_data(format!("invalid JSON at line {}", 3));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_data<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::InvalidData(s.into());
        if PANIC_ON_ERROR {
            panic!("GEOVISIT_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Unknown`] from a string or static message.
    ///
    /// If `GEOVISIT_PANIC_ON_ERROR` is set, this will panic with the error message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unknown<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Unknown(s.into());
        if PANIC_ON_ERROR {
            panic!("GEOVISIT_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Returns the field path the error refers to, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::MissingField { path }
            | Error::TypeMismatch { path, .. }
            | Error::UnrepresentableValue { path, .. }
            | Error::UnknownField { path } => Some(&**path),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Error::invalid_data(format!("invalid JSON: {}", err))
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// # Examples
/// ```
/// use geovisit_core::ensure;
/// use geovisit_core::error::Error;
///
/// fn check_depth(depth: u32) -> Result<(), Error> {
///     ensure!(depth < 64, "depth {} too large", depth);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::unknown($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::unknown(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with an [`enum@Error`].
///
/// # Examples
/// ```
/// use geovisit_core::bail;
/// use geovisit_core::error::Error;
///
/// fn fail_fast() -> Result<(), Error> {
///     bail!("something went wrong");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::unknown($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::unknown(format!($fmt, $($arg)*)))
    };
}
