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

//! The right-biased [`Either`] union and its transformations.

use std::fmt::Display;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result, Variant};

pub use Either::{Left, Right};

/// A right-biased disjoint union with exactly one active variant.
///
/// `Either` is the backbone of the validation pipeline: a parser yields
/// either a failure description in [`Left`] or a parsed value in [`Right`],
/// and a chain of transformations short-circuits on the first failure.
///
/// "Right-biased" means the transformation methods ([`map`], [`flat_map`])
/// act on the [`Right`] side and pass a [`Left`] through unchanged. The
/// symmetric `*_left` methods provide the mirror image.
///
/// Values are immutable: every transformation consumes the receiver and
/// produces a value. When the relevant side is inactive, the receiver moves
/// through untouched, so no inner allocation is cloned or rebuilt in a
/// pass-through chain.
///
/// The variant paths `Either::Left` and `Either::Right` are first-class
/// functions and can be handed to combinators directly:
///
/// ```rust
/// use reads::either::{Either, Left, Right};
///
/// let e: Either<&str, i32> = Ok::<_, &str>(42).map_or_else(Left, Right);
/// assert_eq!(e, Right(42));
/// ```
///
/// [`map`]: Either::map
/// [`flat_map`]: Either::flat_map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The alternative/failure side.
    Left(L),
    /// The success side.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Check if the value is a [`Left`].
    pub fn is_left(&self) -> bool {
        matches!(self, Left(_))
    }

    /// Check if the value is a [`Right`].
    pub fn is_right(&self) -> bool {
        matches!(self, Right(_))
    }

    /// Borrow both sides.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Left(l) => Left(l),
            Right(r) => Right(r),
        }
    }

    /// Mutably borrow both sides.
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Left(l) => Left(l),
            Right(r) => Right(r),
        }
    }

    /// Extract the [`Left`] value if there is one.
    pub fn left(self) -> Option<L> {
        match self {
            Left(l) => Some(l),
            Right(_) => None,
        }
    }

    /// Extract the [`Right`] value if there is one.
    pub fn right(self) -> Option<R> {
        match self {
            Left(_) => None,
            Right(r) => Some(r),
        }
    }

    /// Extract the [`Right`] value, failing loudly on a [`Left`].
    ///
    /// This is an escape hatch. Callers that can recover should prefer
    /// [`map`], [`unwrap_or_else`] or [`either`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongVariant`] if the value is a [`Left`].
    ///
    /// [`map`]: Either::map
    /// [`unwrap_or_else`]: Either::unwrap_or_else
    /// [`either`]: Either::either
    pub fn try_right(self) -> Result<R> {
        match self {
            Right(r) => Ok(r),
            Left(_) => Err(Error::WrongVariant {
                expected: Variant::Right,
                found: Variant::Left,
            }),
        }
    }

    /// Extract the [`Left`] value, failing loudly on a [`Right`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongVariant`] if the value is a [`Right`].
    pub fn try_left(self) -> Result<L> {
        match self {
            Left(l) => Ok(l),
            Right(_) => Err(Error::WrongVariant {
                expected: Variant::Left,
                found: Variant::Right,
            }),
        }
    }

    /// Apply `f` to the [`Right`] value; a [`Left`] moves through untouched.
    ///
    /// ```rust
    /// use reads::either::{Either, Right};
    ///
    /// let e: Either<(), String> = Right("Barry".to_string());
    /// assert_eq!(e.map(|n| n + " Bonds"), Right("Barry Bonds".to_string()));
    /// ```
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Left(l) => Left(l),
            Right(r) => Right(f(r)),
        }
    }

    /// Chain a fallible transformation on the [`Right`] value.
    ///
    /// `f` may switch the value to a [`Left`]; an existing [`Left`] moves
    /// through untouched.
    pub fn flat_map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Left(l) => Left(l),
            Right(r) => f(r),
        }
    }

    /// Apply `f` to the [`Left`] value; a [`Right`] moves through untouched.
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Left(l) => Left(f(l)),
            Right(r) => Right(r),
        }
    }

    /// Chain a fallible transformation on the [`Left`] value.
    ///
    /// `f` may switch the value to a [`Right`]; an existing [`Right`] moves
    /// through untouched.
    pub fn flat_map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        match self {
            Left(l) => f(l),
            Right(r) => Right(r),
        }
    }

    /// Swap the sides: `Left(l)` becomes `Right(l)` and `Right(r)` becomes
    /// `Left(r)`.
    ///
    /// `flip` is an involution: applying it twice restores the original
    /// variant and value.
    pub fn flip(self) -> Either<R, L> {
        match self {
            Left(l) => Right(l),
            Right(r) => Left(r),
        }
    }

    /// Return the [`Right`] value, or recover from a [`Left`] with `f`.
    ///
    /// The recovery closure receives the [`Left`] value, not nothing.
    pub fn unwrap_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Left(l) => f(l),
            Right(r) => r,
        }
    }

    /// Collapse the value by running exactly one of the two handlers on the
    /// matching side.
    ///
    /// Defined as lifting the `right` handler over the success side and
    /// resolving the remainder with the `left` handler:
    /// `self.map(right).unwrap_or_else(left)`.
    ///
    /// ```rust
    /// use reads::either::{Either, Left, Right};
    ///
    /// let e: Either<&str, i32> = Right(2);
    /// assert_eq!(e.either(|l| l.len(), |r| r as usize), 2);
    ///
    /// let e: Either<&str, i32> = Left("oops");
    /// assert_eq!(e.either(|l| l.len(), |r| r as usize), 4);
    /// ```
    pub fn either<T, FL, FR>(self, left: FL, right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        self.map(right).unwrap_or_else(left)
    }
}

impl<T> Either<T, T> {
    /// Return whichever inner value is present, discarding the tag.
    pub fn into_inner(self) -> T {
        match self {
            Left(v) => v,
            Right(v) => v,
        }
    }

    /// Force the inner value into a [`Right`], regardless of the current
    /// tag.
    pub fn into_right(self) -> Either<T, T> {
        Right(self.into_inner())
    }

    /// Force the inner value into a [`Left`], regardless of the current
    /// tag.
    pub fn into_left(self) -> Either<T, T> {
        Left(self.into_inner())
    }
}

impl<L, R> Display for Either<L, R>
where
    L: Display,
    R: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Left(l) => write!(f, "Left({l})"),
            Right(r) => write!(f, "Right({r})"),
        }
    }
}

/// Serialization erases the tag: both variants encode as the bare inner
/// value, with no wrapper. Consumers must not rely on the variant surviving
/// a round trip; there is deliberately no `Deserialize` counterpart.
impl<L, R> Serialize for Either<L, R>
where
    L: Serialize,
    R: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Left(l) => l.serialize(serializer),
            Right(r) => r.serialize(serializer),
        }
    }
}
