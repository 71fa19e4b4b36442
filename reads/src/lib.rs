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

//! `reads` - a right-biased `Either` and the validation combinators over
//! it.
//!
//! The crate has two halves:
//!
//! - [`either::Either`] - a disjoint union with exactly one active variant,
//!   [`either::Left`] for the alternative/failure side and
//!   [`either::Right`] for the success side. Transformations are
//!   right-biased: they act on `Right` and pass `Left` through unchanged,
//!   so a chain short-circuits on the first failure.
//! - [`reads::Reads`] - the validator interface whose evaluation yields an
//!   `Either`-shaped result, with [`reads::reads_fn`] for building leaf
//!   validators and [`either::Either::reads`] for composing a
//!   try-right-fall-back-to-left pair.
//!
//! ```rust
//! use reads::prelude::*;
//!
//! let number = reads_fn(|input: &str| match input.parse::<i64>() {
//!     Ok(v) => Right(v),
//!     Err(e) => Left(e.to_string()),
//! });
//!
//! let greeting = number
//!     .read("42")
//!     .map(|n| format!("the answer is {n}"))
//!     .unwrap_or_else(|e| format!("no answer: {e}"));
//! assert_eq!(greeting, "the answer is 42");
//! ```

pub mod either;
pub mod error;
pub mod reads;

pub mod prelude;
