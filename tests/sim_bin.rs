#![cfg(feature = "std")]

use std::process::Command;

fn run_sim(seed: &str) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", seed])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let v = run_sim("12345");
    assert_eq!(v["seed"], 12345);
    assert_eq!(v["game_over"], true);
    assert_eq!(v["hits"], 17);
    assert_eq!(v["sunk"].as_array().map(Vec::len), Some(5));
    let missed = v["missed_cells"].as_array().expect("missed_cells array");
    assert_eq!(Some(missed.len() as u64), v["misses"].as_u64());
    assert!(missed.iter().all(|cell| cell.as_array().map(Vec::len) == Some(2)));
}

#[test]
fn sim_binary_is_reproducible() {
    assert_eq!(run_sim("99"), run_sim("99"));
}
