use anyhow::Result;
use std::process::Command;

fn decimals(number: &str) -> usize {
    number.split_once('.').map_or(0, |(_, d)| d.len())
}

#[test]
fn test_pi_binary_prints_two_line_report() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_numbench"))
        .env_remove("RUST_LOG")
        .output()?;
    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "stdout: {}", stdout);

    let result = lines[0].strip_prefix("Result: ").expect("result label");
    assert_eq!(decimals(result), 12);
    let pi: f64 = result.parse()?;
    assert!((pi - std::f64::consts::PI).abs() < 1e-7);

    let time = lines[1]
        .strip_prefix("Execution Time: ")
        .and_then(|rest| rest.strip_suffix(" seconds"))
        .expect("time label");
    assert_eq!(decimals(time), 12);
    let secs: f64 = time.parse()?;
    assert!(secs > 0.0 && secs.is_finite());

    Ok(())
}

#[test]
fn test_pi_result_is_deterministic_across_runs() -> Result<()> {
    let first = Command::new(env!("CARGO_BIN_EXE_numbench"))
        .env_remove("RUST_LOG")
        .output()?;
    let second = Command::new(env!("CARGO_BIN_EXE_numbench"))
        .env_remove("RUST_LOG")
        .output()?;

    let result_line = |out: &[u8]| -> Result<String> {
        Ok(String::from_utf8(out.to_vec())?
            .lines()
            .next()
            .unwrap_or_default()
            .to_string())
    };
    assert_eq!(result_line(&first.stdout)?, result_line(&second.stdout)?);
    Ok(())
}

#[test]
fn test_diagnostics_stay_off_stdout() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_max_subarray"))
        .env_remove("RUST_LOG")
        .args(["--verbose", "--monitor"])
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "stdout: {}", stdout);
    assert_eq!(lines[0], "Total Maximum Subarray Sum (20 runs): 10980");
    assert!(lines[1].starts_with("Execution Time: "));
    assert!(lines[1].ends_with(" seconds"));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Starting numbench max subarray"));
    Ok(())
}

#[test]
fn test_pi_binary_ignores_unknown_arguments() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_numbench"))
        .env_remove("RUST_LOG")
        .args(["extra", "--unknown", "--help"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "stdout: {}", stdout);
    assert!(lines[0].starts_with("Result: 3.14159"));
    assert!(lines[1].starts_with("Execution Time: "));
    assert!(lines[1].ends_with(" seconds"));
    Ok(())
}
