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

//! End-to-end validation pipeline over `Either` and `Reads`.

use reads::prelude::*;

/// A listen target is either a well-known service name or a raw port.
type Target = Either<String, u16>;

fn port() -> impl Reads<In = str, Err = String, Out = u16> {
    reads_fn(|input: &str| match input.parse::<u16>() {
        Ok(0) => Left("port 0 is reserved".to_string()),
        Ok(v) => Right(v),
        Err(e) => Left(format!("invalid port: {e}")),
    })
}

fn service() -> impl Reads<In = str, Err = String, Out = String> {
    reads_fn(|input: &str| match input {
        "http" | "https" | "ssh" => Right(input.to_string()),
        other => Left(format!("unknown service: {other}")),
    })
}

fn target() -> impl Reads<In = str, Err = String, Out = Target> {
    Either::reads(service().map(Either::Left), port())
}

#[test_log::test]
fn test_port_wins_over_service() {
    let target = target();

    let out = target.read("8080");
    tracing::debug!(?out, "validated raw port");
    assert_eq!(out, Right(Right(8080)));
}

#[test_log::test]
fn test_service_fallback() {
    let target = target();

    let out = target.read("https");
    tracing::debug!(?out, "validated service name");
    assert_eq!(out, Right(Left("https".to_string())));
}

#[test_log::test]
fn test_unknown_target_reports_service_failure() {
    let target = target();

    // The port validator's failure is dropped on fallback; the failure the
    // caller sees comes from the service validator.
    let out = target.read("gopher");
    tracing::debug!(?out, "rejected target");
    assert_eq!(out, Left("unknown service: gopher".to_string()));
}

#[test_log::test]
fn test_pipeline_short_circuits() {
    let target = target();

    let summary = target
        .read("ssh")
        .flat_map(|t| match t {
            Left(name) => Right(format!("service {name}")),
            Right(p) if p < 1024 => Left(format!("privileged port {p} refused")),
            Right(p) => Right(format!("port {p}")),
        })
        .map(|s| format!("listening on {s}"))
        .unwrap_or_else(|e| format!("rejected: {e}"));
    assert_eq!(summary, "listening on service ssh");

    let summary = target
        .read("80")
        .flat_map(|t| match t {
            Left(name) => Right(format!("service {name}")),
            Right(p) if p < 1024 => Left(format!("privileged port {p} refused")),
            Right(p) => Right(format!("port {p}")),
        })
        .map(|s| format!("listening on {s}"))
        .unwrap_or_else(|e| format!("rejected: {e}"));
    assert_eq!(summary, "rejected: privileged port 80 refused");
}
