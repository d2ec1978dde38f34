use crate::helpers::cli_runner::run_cli;
use std::fs;

const BASE: [&str; 7] = ["play", "--opponents", "3", "--seed", "99", "--trials", "60"];

#[test]
fn full_hand_reaches_showdown() {
    let res = run_cli(&BASE, "c\ncall\nC\nc\n");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Estimated probability of winning at showdown (pre-flop): "));
    assert!(res.stdout.contains("River Action: [C]all or [F]old? "));
    assert!(res.stdout.contains("Opponent #3 hole cards: "));
    assert!(!res.stdout.contains("Opponent #4"));
}

#[test]
fn quit_on_turn_folds() {
    let res = run_cli(&BASE, "c\nc\nq\n");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("--- TURN ---"));
    assert!(res.stdout.contains("You folded. Game ends."));
    assert!(!res.stdout.contains("--- RIVER ---"));
}

#[test]
fn showdown_hand_is_logged_as_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("hand.jsonl");
    let path_str = path.to_string_lossy().into_owned();
    let mut args = BASE.to_vec();
    args.extend_from_slice(&["--log", path_str.as_str()]);

    let res = run_cli(&args, "c\nc\nc\nc\n");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let content = fs::read_to_string(&path).expect("log written");
    assert_eq!(content.lines().count(), 1);
    let v: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
    assert_eq!(v["seed"], 99);
    assert_eq!(v["opponents"], 3);
    assert_eq!(v["board"].as_array().unwrap().len(), 5);
    assert_eq!(v["equities"].as_array().unwrap().len(), 4);
    assert_eq!(v["opponent_holes"].as_array().unwrap().len(), 3);
    assert!(v["showdown"]["outcome"].is_string());
    assert!(v["ts"].is_string());
}

#[test]
fn folded_hand_log_hides_opponent_cards() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fold.jsonl");
    let path_str = path.to_string_lossy().into_owned();
    let mut args = BASE.to_vec();
    args.extend_from_slice(&["--log", path_str.as_str()]);

    let res = run_cli(&args, "c\nf\n");
    assert_eq!(res.exit_code, 0);
    let v: serde_json::Value =
        serde_json::from_str(fs::read_to_string(&path).unwrap().trim()).unwrap();
    assert_eq!(v["folded_on"], "flop");
    assert_eq!(v["board"].as_array().unwrap().len(), 3);
    assert!(v["opponent_holes"].as_array().unwrap().is_empty());
    assert!(v["showdown"].is_null());
}
