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

//! The [`Reads`] validator seam and its combinators.

use std::marker::PhantomData;

use crate::either::Either;

/// A validator that evaluates an input value to an [`Either`]-shaped
/// result.
///
/// A failure description lands in [`Either::Left`], a parsed value in
/// [`Either::Right`]. Evaluation is pure and synchronous; a `Reads` holds
/// no state across calls and may be shared freely.
pub trait Reads {
    /// The input value type the validator evaluates.
    type In: ?Sized;
    /// The failure description type.
    type Err;
    /// The parsed value type.
    type Out;

    /// Evaluate `input`.
    fn read(&self, input: &Self::In) -> Either<Self::Err, Self::Out>;

    /// Transform the parsed value with `f`; failures pass through
    /// unchanged.
    fn map<F, T>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Out) -> T,
    {
        Map { reads: self, f }
    }
}

/// The [`Reads::map`] combinator.
pub struct Map<P, F> {
    reads: P,
    f: F,
}

impl<P, F, T> Reads for Map<P, F>
where
    P: Reads,
    F: Fn(P::Out) -> T,
{
    type In = P::In;
    type Err = P::Err;
    type Out = T;

    fn read(&self, input: &Self::In) -> Either<Self::Err, T> {
        self.reads.read(input).map(&self.f)
    }
}

/// A [`Reads`] built from a plain closure. See [`reads_fn`].
pub struct ReadsFn<I: ?Sized, F> {
    f: F,
    _marker: PhantomData<fn(&I)>,
}

/// Lift a closure `Fn(&I) -> Either<E, T>` into a [`Reads`].
///
/// This is how leaf validators are built:
///
/// ```rust
/// use reads::{
///     either::{Either, Left, Right},
///     reads::{reads_fn, Reads},
/// };
///
/// let number = reads_fn(|input: &str| match input.parse::<i64>() {
///     Ok(v) => Right(v),
///     Err(e) => Left(e.to_string()),
/// });
///
/// assert_eq!(number.read("42"), Right(42));
/// assert!(number.read("abc").is_left());
/// ```
pub fn reads_fn<I, E, T, F>(f: F) -> ReadsFn<I, F>
where
    I: ?Sized,
    F: Fn(&I) -> Either<E, T>,
{
    ReadsFn {
        f,
        _marker: PhantomData,
    }
}

impl<I, E, T, F> Reads for ReadsFn<I, F>
where
    I: ?Sized,
    F: Fn(&I) -> Either<E, T>,
{
    type In = I;
    type Err = E;
    type Out = T;

    fn read(&self, input: &I) -> Either<E, T> {
        (self.f)(input)
    }
}

/// The validator produced by [`Either::reads`]: try the right side, fall
/// back to the left.
pub struct EitherReads<RL, RR> {
    read_left: RL,
    read_right: RR,
}

impl<L, R> Either<L, R> {
    /// Compose two validators into one producing an `Either<L, R>`.
    ///
    /// Evaluation on an input `v`:
    ///
    /// 1. Runs `read_right` against `v` and lifts its parsed value into the
    ///    union via the `Either::Right` constructor.
    /// 2. If `read_right` failed, runs `read_left` against the original `v`
    ///    and returns its result as-is, success or failure. The left
    ///    validator supplies its own variant tagging (typically built at
    ///    the call site with `.map(Either::Left)`); its result is never
    ///    re-wrapped here.
    ///
    /// The failure payload produced by `read_right` is dropped before the
    /// fallback runs; the left validator re-derives its own outcome from
    /// the original input.
    pub fn reads<RL, RR>(read_left: RL, read_right: RR) -> EitherReads<RL, RR>
    where
        RR: Reads<Out = R>,
        RL: Reads<In = RR::In, Err = RR::Err, Out = Either<L, R>>,
    {
        EitherReads {
            read_left,
            read_right,
        }
    }
}

impl<L, R, RL, RR> Reads for EitherReads<RL, RR>
where
    RR: Reads<Out = R>,
    RL: Reads<In = RR::In, Err = RR::Err, Out = Either<L, R>>,
{
    type In = RR::In;
    type Err = RR::Err;
    type Out = Either<L, R>;

    fn read(&self, input: &Self::In) -> Either<Self::Err, Either<L, R>> {
        match self.read_right.read(input).map(Either::Right) {
            out @ Either::Right(_) => out,
            Either::Left(_) => self.read_left.read(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::either::{Left, Right};

    fn number() -> impl Reads<In = str, Err = String, Out = i64> {
        reads_fn(|input: &str| match input.parse::<i64>() {
            Ok(v) => Right(v),
            Err(e) => Left(e.to_string()),
        })
    }

    #[test]
    fn test_reads_fn() {
        let number = number();
        assert_eq!(number.read("42"), Right(42));
        assert!(number.read("abc").is_left());
    }

    #[test]
    fn test_map_transforms_success_only() {
        let doubled = number().map(|v| v * 2);
        assert_eq!(doubled.read("21"), Right(42));

        let out = doubled.read("abc");
        assert!(out.is_left());
    }

    #[test]
    fn test_either_reads_right_wins() {
        let read_right = reads_fn(|input: &str| match input {
            "5" => Right(42),
            other => Left(format!("not five: {other}")),
        });
        let read_left =
            reads_fn(|input: &str| Right::<String, _>(input.to_string())).map(Either::Left);

        let combined = Either::reads(read_left, read_right);
        assert_eq!(combined.read("5"), Right(Right(42)));
    }

    #[test]
    fn test_either_reads_falls_back_without_rewrapping() {
        let read_right = reads_fn(|input: &str| match input.parse::<i64>() {
            Ok(v) => Right(v),
            Err(e) => Left(e.to_string()),
        });
        let read_left =
            reads_fn(|_: &str| Right::<String, _>(Left::<_, i64>("fallback".to_string())));

        let combined = Either::reads(read_left, read_right);

        let out = combined.read("abc");
        assert_eq!(out, Right(Left("fallback".to_string())));
    }

    #[test]
    fn test_either_reads_left_failure_passes_through() {
        // The right validator's failure payload is dropped; the failure the
        // caller sees is the left validator's own.
        let read_right = reads_fn(|input: &str| match input.parse::<i64>() {
            Ok(v) => Right(v),
            Err(_) => Left("right boom".to_string()),
        });
        let read_left =
            reads_fn(|_: &str| Left::<String, Either<String, i64>>("left boom".to_string()));

        let combined = Either::reads(read_left, read_right);

        assert_eq!(combined.read("abc"), Left("left boom".to_string()));
    }

    #[test]
    fn test_either_reads_left_built_with_map() {
        let read_right = reads_fn(|input: &str| match input.parse::<i64>() {
            Ok(v) => Right(v),
            Err(e) => Left(e.to_string()),
        });
        let read_left = reads_fn(|input: &str| match input.is_empty() {
            true => Left("empty".to_string()),
            false => Right(input.to_uppercase()),
        })
        .map(Either::Left);

        let combined = Either::reads(read_left, read_right);

        assert_eq!(combined.read("42"), Right(Right(42)));
        assert_eq!(combined.read("abc"), Right(Left("ABC".to_string())));
        assert_eq!(combined.read(""), Left("empty".to_string()));
    }
}
