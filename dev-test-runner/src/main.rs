//! Runs the inference over every sample document and prints the result.
//!
//! Strict `.json` samples are also loaded through `serde_json` and inferred
//! from the converted value; both paths have to agree.
use std::path::PathBuf;

use json_to_ts::{InferOptions, Value, infer_type, infer_value};

fn main() {
    let dir = std::env::args().nth(1).unwrap_or_else(|| String::from("samples"));
    let pattern = format!("{dir}/*.json*");
    let paths: Vec<PathBuf> = glob::glob(&pattern)
        .expect("invalid sample pattern")
        .filter_map(Result::ok)
        .collect();

    let mut failures = 0usize;
    for path in paths {
        let source = std::fs::read_to_string(&path).expect("failed to read sample");
        eprintln!("—— {} ——", path.display());
        let relaxed = match infer_type(&source) {
            Ok(x) => x,
            Err(error) => {
                eprintln!("❌ failed: {error}");
                failures += 1;
                continue;
            }
        };
        println!("{relaxed}");

        if path.extension().is_some_and(|ext| ext == "json") {
            let strict = serde_json::from_str::<serde_json::Value>(&source)
                .expect("strict sample must be valid JSON");
            let via_serde = infer_value(&Value::from(strict), &InferOptions::default())
                .expect("inference over a parsed value cannot fail without a pointer");
            if via_serde == relaxed {
                eprintln!("✅ strict and relaxed loaders agree");
            } else {
                eprintln!("❌ strict and relaxed loaders disagree");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
