//! printgate-cli: demonstration driver for the bounded print gate.
//!
//! Drives a fixed schedule of print calls through a [`PrintGate`] and lets
//! the budget error surface at the process boundary: partial output for the
//! overflowing call, the error message on stderr, non-zero exit.

use printgate_core::{GateError, PrintGate, PrintOptions, PrintSink};
use serde_json::{json, Value};

/// Cumulative argument limit used when `--limit` is not given.
pub const DEFAULT_LIMIT: usize = 100;

/// Captured output of one driver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Stable crate label used by bootstrap smoke tests.
pub fn crate_label() -> &'static str {
    "printgate-cli"
}

fn help_text() -> String {
    "\
printgate demonstrates a print wrapper with a cumulative argument budget.

Usage:
  printgate [flags]

Flags:
  -h, --help       help for printgate
      --limit <n>  cumulative argument budget (default 100)

The driver prints a fixed schedule of calls. Each accepted call is preceded
by a 'Call <n> of 'print'' line; the call that crosses the budget emits
only the values that still fit, then the run stops with exit code 1.\n"
        .to_string()
}

enum ParsedArgs {
    Help,
    Limit(usize),
}

fn parse_args(args: &[String]) -> Result<ParsedArgs, String> {
    let mut limit = DEFAULT_LIMIT;
    let mut idx = 0usize;
    while idx < args.len() {
        let token = &args[idx];
        match token.as_str() {
            "-h" | "--help" | "help" => return Ok(ParsedArgs::Help),
            "--limit" => {
                idx += 1;
                let raw = args
                    .get(idx)
                    .ok_or_else(|| "--limit requires a value".to_string())?;
                limit = raw
                    .parse::<usize>()
                    .map_err(|_| format!("invalid --limit value: {raw:?}"))?;
            }
            other => return Err(format!("unknown argument: {other:?}")),
        }
        idx += 1;
    }
    Ok(ParsedArgs::Limit(limit))
}

/// Run the demonstration from command-line arguments.
pub fn run_demo(args: &[String]) -> CommandOutput {
    let limit = match parse_args(args) {
        Ok(ParsedArgs::Help) => {
            return CommandOutput {
                stdout: help_text(),
                stderr: String::new(),
                exit_code: 0,
            }
        }
        Ok(ParsedArgs::Limit(limit)) => limit,
        Err(message) => {
            return CommandOutput {
                stdout: String::new(),
                stderr: format!("{message}\n"),
                exit_code: 2,
            }
        }
    };

    let mut gate = PrintGate::new(limit, Vec::<u8>::new());
    let result = drive_schedule(&mut gate);
    let stdout = String::from_utf8_lossy(gate.sink()).into_owned();
    match result {
        Ok(()) => CommandOutput {
            stdout,
            stderr: String::new(),
            exit_code: 0,
        },
        Err(err) => CommandOutput {
            stdout,
            stderr: format!("printgate: {err}\n"),
            exit_code: 1,
        },
    }
}

/// The demonstration schedule: 75 single-integer calls, one ten-argument
/// call ending in a list, five string calls, then fifteen more integers.
/// With the default limit of 100 the sixteenth-from-last call crosses the
/// budget.
fn drive_schedule<S: PrintSink>(gate: &mut PrintGate<S>) -> Result<(), GateError> {
    let opts = PrintOptions::default();

    for i in 0..75 {
        gate.invoke_with(&[json!(i)], &opts)?;
    }

    let mut batch: Vec<Value> = (1..=9).map(|n| json!(n)).collect();
    batch.push(json!(["a", "b"]));
    gate.invoke_with(&batch, &opts)?;

    for _ in 0..5 {
        gate.invoke_with(&[json!("howdy")], &opts)?;
    }

    for k in 0..15 {
        gate.invoke_with(&[json!(k)], &opts)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn run(args: &[&str]) -> CommandOutput {
        let owned: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
        run_demo(&owned)
    }

    #[test]
    fn crate_label_is_stable() {
        assert_eq!(crate_label(), "printgate-cli");
    }

    #[test]
    fn default_run_stops_at_limit_100() {
        let out = run(&[]);
        assert_eq!(out.exit_code, 1);
        assert!(out.stderr.contains("output limit 100 reached"));
        // 91 accepted calls, two lines each, then the truncated call's bare
        // terminator.
        assert_eq!(out.stdout.lines().count(), 183);
        assert!(out.stdout.starts_with("Call 1 of 'print'\n0\n"));
        assert!(out.stdout.contains("Call 85 of 'print'\n1 2 3 4 5 6 7 8 9 [\"a\",\"b\"]\n"));
        assert!(out.stdout.contains("Call 90 of 'print'\nhowdy\n"));
        assert!(out.stdout.ends_with("Call 100 of 'print'\n9\n\n"));
    }

    #[test]
    fn large_limit_runs_full_schedule() {
        let out = run(&["--limit", "1000"]);
        assert_eq!(out.exit_code, 0);
        assert!(out.stderr.is_empty());
        // The schedule carries 105 values in total.
        assert!(out.stdout.contains("Call 105 of 'print'"));
        assert!(out.stdout.ends_with("Call 105 of 'print'\n14\n"));
    }

    #[test]
    fn small_limit_fails_with_partial_line() {
        let out = run(&["--limit", "5"]);
        assert_eq!(out.exit_code, 1);
        assert!(out.stderr.contains("output limit 5 reached"));
        // Five accepted calls, then a bare terminator for the sixth.
        assert_eq!(out.stdout.lines().count(), 11);
        assert!(out.stdout.ends_with("Call 5 of 'print'\n4\n\n"));
    }

    #[test]
    fn limit_between_calls_truncates_mid_batch() {
        let out = run(&["--limit", "80"]);
        assert_eq!(out.exit_code, 1);
        // 75 single calls pass, then the ten-argument call gets five values.
        assert!(out.stdout.ends_with("Call 75 of 'print'\n74\n1 2 3 4 5\n"));
    }

    #[test]
    fn help_flag_prints_usage() {
        let out = run(&["--help"]);
        assert_eq!(out.exit_code, 0);
        assert!(out.stdout.contains("Usage:"));
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn unknown_argument_is_usage_error() {
        let out = run(&["--bogus"]);
        assert_eq!(out.exit_code, 2);
        assert!(out.stderr.contains("unknown argument"));
    }

    #[test]
    fn missing_limit_value_is_usage_error() {
        let out = run(&["--limit"]);
        assert_eq!(out.exit_code, 2);
        assert!(out.stderr.contains("--limit requires a value"));
    }

    #[test]
    fn invalid_limit_value_is_usage_error() {
        let out = run(&["--limit", "many"]);
        assert_eq!(out.exit_code, 2);
        assert!(out.stderr.contains("invalid --limit value"));
    }
}
