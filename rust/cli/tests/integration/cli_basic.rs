use crate::helpers::cli_runner::run_cli;

#[test]
fn version_flag_succeeds() {
    let res = run_cli(&["--version"], "");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("holdem-odds"));
}

#[test]
fn missing_subcommand_is_usage_error() {
    let res = run_cli(&[], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Usage: holdem-odds <command> [options]"));
}

#[test]
fn rank_seven_cards() {
    let res = run_cli(&["rank", "--cards", "Ah Ad Kc Ks 7d 7h 2c"], "");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(res.stdout, "AH AD KC KS 7D 7H 2C: Two Pair [A K 7]\n");
}

#[test]
fn rank_accepts_ten_and_suit_symbols() {
    let res = run_cli(&["rank", "--cards", "10♠ J♠ Q♠ K♠ 9♠"], "");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.ends_with("Straight Flush [K]\n"));
}

#[test]
fn rank_rejects_bad_card() {
    let res = run_cli(&["rank", "--cards", "Ah Kh Qh Jh 1h"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.starts_with("Error: Engine error: Invalid card"));
}

#[test]
fn rng_with_explicit_seed_is_pinned() {
    let res = run_cli(&["rng", "--seed", "5674832", "--count", "5"], "");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.starts_with("RNG sample: [21, 90, 63, 52, 77]\n"));
}

#[test]
fn rng_is_reproducible() {
    let a = run_cli(&["rng", "--seed", "42", "--count", "8"], "");
    let b = run_cli(&["rng", "--seed", "42", "--count", "8"], "");
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn bench_with_seed() {
    let res = run_cli(&["bench", "--hands", "100", "--seed", "3"], "");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.starts_with("Benchmark: 100 iters in "));
}
