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

//! Validate listen targets from the command line.
//!
//! ```bash
//! cargo run --bin validate -- 8080 https gopher
//! ```

use reads::prelude::*;

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

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_line_number(true))
        .with(EnvFilter::from_default_env())
        .init();

    let target = Either::reads(service().map(Either::Left), port());

    for arg in std::env::args().skip(1) {
        let outcome = target
            .read(&arg)
            .map(|t| t.either(|name| format!("service {name}"), |p| format!("port {p}")))
            .map(|t| format!("listening on {t}"));

        // Serialization erases the variant tag, so logs see the bare value.
        tracing::info!(
            input = %arg,
            outcome = %serde_json::to_string(&outcome)?,
            ok = outcome.is_right(),
            "validated"
        );

        println!("{arg}: {}", outcome.unwrap_or_else(|e| format!("rejected: {e}")));
    }

    Ok(())
}
