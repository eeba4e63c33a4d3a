//! End-to-end tests for the tournament command: round-robin rankings,
//! CSV export, and seeded reproducibility.

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
fn tournament_prints_rankings_for_named_agents() {
    clear_env();
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = kuhn3p_cli::run(
        [
            "kuhn3p",
            "tournament",
            "--agents",
            "caller,bluffer,chump-balanced,chump-aggressive",
            "--hands",
            "20",
            "--seed",
            "5",
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
    let s = String::from_utf8_lossy(&out);
    assert!(s.contains("Tournament: 4 agents"));
    assert!(s.contains("Seed: 5"));
    assert!(s.contains("chips"));
    assert!(s.contains("caller"));
    assert!(s.contains("chump-aggressive"));
}

#[test]
#[serial]
fn tournament_with_two_agents_returns_two() {
    clear_env();
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = kuhn3p_cli::run(
        [
            "kuhn3p",
            "tournament",
            "--agents",
            "caller,bluffer",
            "--hands",
            "10",
            "--seed",
            "1",
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    let s = String::from_utf8_lossy(&err);
    assert!(s.contains("at least 3"));
}

#[test]
#[serial]
fn tournament_writes_csv() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rankings.csv");
    let path_str = path.to_string_lossy().into_owned();

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = kuhn3p_cli::run(
        [
            "kuhn3p",
            "tournament",
            "--agents",
            "caller,bluffer,chump-balanced",
            "--hands",
            "15",
            "--seed",
            "8",
            "--output",
            &path_str,
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "place,agent,chips,matches,firsts,seconds,thirds"
    );
    assert_eq!(lines.count(), 3);
}

#[test]
#[serial]
fn tournament_same_seed_same_rankings() {
    clear_env();
    let args = [
        "kuhn3p",
        "tournament",
        "--agents",
        "caller,bluffer,chump-balanced,chump-passive",
        "--hands",
        "20",
        "--rounds",
        "2",
        "--seed",
        "13",
    ];
    let mut out1: Vec<u8> = Vec::new();
    let mut out2: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    assert_eq!(kuhn3p_cli::run(args, &mut out1, &mut err), 0);
    assert_eq!(kuhn3p_cli::run(args, &mut out2, &mut err), 0);
    assert_eq!(out1, out2);
}
