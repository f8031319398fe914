// tests/cli_test.rs
use pi_coprime::cli::{run, EXIT_FAILURE, EXIT_SUCCESS};

fn invoke(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_missing_pairs_prints_usage_on_stdout() {
    let (code, out, err) = invoke(&["pi-coprime"]);

    assert_eq!(code, EXIT_FAILURE);
    assert_eq!(out, "usage: pi-coprime <pairs> [<max_number>]\n");
    assert!(err.is_empty());
}

#[test]
fn test_pairs_ten_rejected() {
    let (code, out, err) = invoke(&["pi-coprime", "10"]);

    assert_eq!(code, EXIT_FAILURE);
    assert!(out.is_empty());
    assert_eq!(err, "10 must be greater than 10.\n");
}

#[test]
fn test_max_number_ten_rejected() {
    let (code, out, err) = invoke(&["pi-coprime", "1000", "10"]);

    assert_eq!(code, EXIT_FAILURE);
    assert!(out.is_empty());
    assert_eq!(err, "10 must be greater than 10.\n");
}

#[test]
fn test_non_numeric_pairs_is_parse_error() {
    let (code, out, err) = invoke(&["pi-coprime", "lots"]);

    assert_eq!(code, EXIT_FAILURE);
    assert!(out.is_empty());
    assert!(err.contains("invalid value 'lots' for <pairs>"), "stderr: {}", err);
    assert!(!err.contains("must be greater than"));
}

#[test]
fn test_seeded_run_prints_report() {
    let (code, out, err) = invoke(&["pi-coprime", "1000", "100", "--seed", "7"]);

    assert_eq!(code, EXIT_SUCCESS, "stderr: {}", err);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Generated 1000 pairs of random numbers between 1 and 100");
    assert!(lines[1].starts_with("Number of co-prime pairs: "));
    assert_eq!(lines[2], "----------------------------");
    assert!(lines[3].starts_with("Pi approximation is "));
    assert_eq!(lines[4], "Pi real value is 3.141593");
    assert!(lines[5].starts_with("Percentage difference is ") && lines[5].ends_with('%'));

    // Same seed, same report
    let (_, again, _) = invoke(&["pi-coprime", "1000", "100", "--seed", "7"]);
    assert_eq!(out, again);
}

#[test]
fn test_default_max_number_in_report() {
    let (code, out, _) = invoke(&["pi-coprime", "5000", "-s", "1"]);

    assert_eq!(code, EXIT_SUCCESS);
    assert!(out.starts_with(&format!(
        "Generated 5000 pairs of random numbers between 1 and {}\n",
        i64::MAX
    )));
}

#[test]
fn test_parallel_run() {
    let (code, out, err) = invoke(&["pi-coprime", "50000", "1000", "-p", "-t", "2", "-s", "3"]);

    assert_eq!(code, EXIT_SUCCESS, "stderr: {}", err);
    assert!(out.contains("Pi approximation is "));
}

#[test]
fn test_help_exits_successfully() {
    let (code, out, _) = invoke(&["pi-coprime", "--help"]);

    assert_eq!(code, EXIT_SUCCESS);
    assert!(out.contains("PAIRS"));
    assert!(out.contains("--seed"));
}

#[test]
fn test_unknown_flag_fails() {
    let (code, _, err) = invoke(&["pi-coprime", "100", "--bogus"]);

    assert_eq!(code, EXIT_FAILURE);
    assert!(!err.is_empty());
}

#[test]
fn test_overflowing_max_number_is_out_of_range() {
    let (code, out, err) = invoke(&["pi-coprime", "1000", "99999999999999999999"]);

    assert_eq!(code, EXIT_FAILURE);
    assert!(out.is_empty());
    assert!(err.contains("out of range"), "stderr: {}", err);
    assert!(!err.contains("expected a base-10 integer"));
}
