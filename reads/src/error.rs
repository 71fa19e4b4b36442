// Copyright 2026 reads Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for the Either core.

use std::fmt::Display;

/// Variant tag of an [`Either`].
///
/// Carried by [`Error::WrongVariant`] so callers can report which side an
/// unsafe accessor expected and which side it found.
///
/// [`Either`]: crate::either::Either
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The alternative/failure side.
    Left,
    /// The success side.
    Right,
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Left => write!(f, "Left"),
            Variant::Right => write!(f, "Right"),
        }
    }
}

/// Either core error.
///
/// A Rust enum value cannot exist without one of its variants, so the
/// "abstract base constructed directly" failure of loosely typed renditions
/// of this type has no runtime representation here. The only failure left is
/// calling an unsafe accessor on the wrong side.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An unsafe accessor was called on the non-matching variant.
    #[error("wrong variant: expected {expected}, found {found}")]
    WrongVariant {
        /// The variant the accessor requires.
        expected: Variant,
        /// The variant the value actually holds.
        found: Variant,
    },
}

/// Either core result.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn is_send_sync_static<T: Send + Sync + 'static>() {}

    #[test]
    fn test_send_sync_static() {
        is_send_sync_static::<Error>();
    }

    #[test]
    fn test_error_display() {
        let err = Error::WrongVariant {
            expected: Variant::Right,
            found: Variant::Left,
        };
        assert_eq!("wrong variant: expected Right, found Left", err.to_string());
    }
}
