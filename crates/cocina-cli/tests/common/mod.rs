#![allow(dead_code)]

use cocina_testing::TestWorld;
use cocina_testing::assertions::saved_storage_id;
use serde_json::Value;

/// Add a recipe and return its storage id.
pub fn add(world: &TestWorld, title: &str, extra: &[&str]) -> String {
    let mut args = vec!["add", "--title", title];
    args.extend_from_slice(extra);

    let result = world.run_json(&args).expect("Failed to run add");
    assert!(result.success(), "add failed: {}", result.stderr());
    saved_storage_id(&result.json().expect("add output is not JSON")).expect("no storage id")
}

/// Run `list` with `--format json` and return the parsed envelope.
pub fn list(world: &TestWorld, args: &[&str]) -> Value {
    let mut full = vec!["list"];
    full.extend_from_slice(args);

    let result = world.run_json(&full).expect("Failed to run list");
    assert!(result.success(), "list failed: {}", result.stderr());
    result.json().expect("list output is not JSON")
}
