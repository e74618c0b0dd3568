// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Generates one snapshot test per directory under `cases/`.

use std::fmt::Write as _;
use std::path::Path;
use std::{env, fs};

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let cases_dir = Path::new(&manifest_dir).join("cases");
    println!("cargo:rerun-if-changed={}", cases_dir.display());

    let mut cases: Vec<String> = fs::read_dir(&cases_dir)
        .expect("failed to read cases/")
        .filter_map(Result::ok)
        .filter(|entry| entry.path().join("unit.websub.json").is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    cases.sort();

    let mut generated = String::new();
    for case in &cases {
        println!(
            "cargo:rerun-if-changed={}",
            cases_dir.join(case).join("unit.websub.json").display()
        );
        writeln!(
            generated,
            "#[test]\nfn {case}() {{\n    check_snapshot(\"{case}\");\n}}\n"
        )
        .expect("writing to a String cannot fail");
    }

    fs::write(Path::new(&out_dir).join("generated_tests.rs"), generated)
        .expect("failed to write generated_tests.rs");
}
