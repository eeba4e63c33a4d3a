//! End-to-end tests for the sim command: seating validation, seeded
//! determinism, JSONL hand-history output, and chip conservation.

use serial_test::serial;

fn clear_env() {
    unsafe {
        std::env::remove_var("KUHN3P_CONFIG");
        std::env::remove_var("KUHN3P_SEED");
        std::env::remove_var("KUHN3P_HANDS");
        std::env::remove_var("KUHN3P_ROTATE_BUTTON");
    }
}

#[test]
#[serial]
fn sim_plays_and_reports_totals() {
    clear_env();
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = kuhn3p_cli::run(
        [
            "kuhn3p",
            "sim",
            "--agents",
            "caller,bluffer,chump-balanced",
            "--hands",
            "40",
            "--seed",
            "42",
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
    let s = String::from_utf8_lossy(&out);
    assert!(s.contains("Simulated 40 hands (seed 42)"));
    assert!(s.contains("caller:"));
}

#[test]
#[serial]
fn sim_with_two_agents_returns_two() {
    clear_env();
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = kuhn3p_cli::run(
        ["kuhn3p", "sim", "--agents", "caller,bluffer"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    let s = String::from_utf8_lossy(&err);
    assert!(s.contains("exactly three agents"));
}

#[test]
#[serial]
fn sim_with_unknown_agent_returns_two() {
    clear_env();
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = kuhn3p_cli::run(
        [
            "kuhn3p",
            "sim",
            "--agents",
            "caller,martian,bluffer",
            "--hands",
            "5",
            "--seed",
            "1",
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    let s = String::from_utf8_lossy(&err);
    assert!(s.contains("martian"));
}

#[test]
#[serial]
fn sim_same_seed_same_output() {
    clear_env();
    let args = [
        "kuhn3p",
        "sim",
        "--agents",
        "chump-aggressive,bluffer,caller",
        "--hands",
        "60",
        "--seed",
        "99",
    ];
    let mut out1: Vec<u8> = Vec::new();
    let mut out2: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    assert_eq!(kuhn3p_cli::run(args, &mut out1, &mut err), 0);
    assert_eq!(kuhn3p_cli::run(args, &mut out2, &mut err), 0);
    assert_eq!(out1, out2);
}

#[test]
#[serial]
fn sim_hand_history_conserves_chips() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.jsonl");
    let path_str = path.to_string_lossy().into_owned();

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = kuhn3p_cli::run(
        [
            "kuhn3p",
            "sim",
            "--agents",
            "caller,chump-passive,bluffer-aggressive",
            "--hands",
            "25",
            "--seed",
            "7",
            "--output",
            &path_str,
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 25);
    for line in lines {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        let sum: i64 = v["deltas"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d.as_i64().unwrap())
            .sum();
        assert_eq!(sum, 0, "deltas must conserve chips: {}", line);
        assert_eq!(v["seed"], 7);
        assert!(v["ts"].is_string());
        let winner = v["winner"].as_u64().unwrap();
        assert!(winner < 3);
    }
}

#[test]
#[serial]
fn sim_hands_fall_back_to_env_config() {
    clear_env();
    unsafe {
        std::env::set_var("KUHN3P_HANDS", "12");
    }

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = kuhn3p_cli::run(
        [
            "kuhn3p",
            "sim",
            "--agents",
            "caller,bluffer,chump-balanced",
            "--seed",
            "3",
        ],
        &mut out,
        &mut err,
    );
    clear_env();

    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
    let s = String::from_utf8_lossy(&out);
    assert!(s.contains("Simulated 12 hands"));
}
