use crate::helpers::cli_runner::run_cli;
use serde_json::Value;

fn equity_json(args: &[&str]) -> Value {
    let mut argv = vec!["equity", "--json"];
    argv.extend_from_slice(args);
    let res = run_cli(&argv, "");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    serde_json::from_str(res.stdout.trim()).expect("json output")
}

#[test]
fn preflop_counts_match_engine() {
    let v = equity_json(&[
        "--hero",
        "AhKh",
        "--opponents",
        "1",
        "--trials",
        "200",
        "--seed",
        "5674832",
        "--workers",
        "1",
    ]);
    assert_eq!(v["wins"], 122);
    assert_eq!(v["ties"], 2);
    assert_eq!(v["total"], 200);
}

#[test]
fn flop_counts_match_engine() {
    let v = equity_json(&[
        "--hero",
        "7h2c",
        "--board",
        "Ad 9s 4h",
        "--opponents",
        "2",
        "--trials",
        "300",
        "--seed",
        "777",
        "--workers",
        "1",
    ]);
    assert_eq!((v["wins"].as_u64(), v["ties"].as_u64()), (Some(45), Some(14)));
}

#[test]
fn river_royal_flush_is_certain() {
    let v = equity_json(&[
        "--hero",
        "AhKh",
        "--board",
        "QhJhTh2c3c",
        "--opponents",
        "9",
        "--trials",
        "100",
        "--seed",
        "1",
        "--workers",
        "1",
    ]);
    assert_eq!(v["equity"], 1.0);
    assert_eq!(v["losses"], 0);
}

#[test]
fn parallel_workers_reproduce() {
    let args = [
        "--hero",
        "QsJs",
        "--opponents",
        "3",
        "--trials",
        "800",
        "--seed",
        "21",
        "--workers",
        "4",
    ];
    let a = equity_json(&args);
    let b = equity_json(&args);
    assert_eq!(a, b);
    assert_eq!(a["total"], 800);
    assert_eq!(a["workers"], 4);
}

#[test]
fn two_card_board_is_rejected() {
    let res = run_cli(&["equity", "--hero", "AhKh", "--board", "2c 3c"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("board must have 0, 3, 4 or 5 cards"));
}

#[test]
fn zero_opponents_is_rejected_by_parser() {
    let res = run_cli(&["equity", "--hero", "AhKh", "--opponents", "0"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
}

#[test]
fn text_output_lists_rates() {
    let res = run_cli(
        &[
            "equity",
            "--hero",
            "AhKh",
            "--trials",
            "200",
            "--seed",
            "5674832",
            "--opponents",
            "1",
            "--workers",
            "1",
        ],
        "",
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Equity (win or tie): 62.0% over 200 trials"));
}
