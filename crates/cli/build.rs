// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// Build scripts should panic on failure — there is no meaningful recovery.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let contents = r#"
/// Environment variable: configures tracing log filter.
pub const ENVSIFT_LOG: &str = "ENVSIFT_LOG";
/// Environment variable: sorts output entries when set to a truthy value.
pub const ENVSIFT_SORT: &str = "ENVSIFT_SORT";
"#;

    fs::write(dest, contents).expect("failed to write env_names.rs");
}
