use crate::utils::logger;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;

// 只接受已知的診斷旗標，其餘參數一律忽略
const KNOWN_FLAGS: &[&str] = &["--verbose", "--monitor", "--json-logs"];

/// Diagnostic switches shared by the benchmark binaries. None of them change
/// what is computed or what is printed to stdout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(about = "Times a fixed numerical workload and prints the result")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory usage around the run")]
    pub monitor: bool,

    #[arg(long, help = "Emit diagnostics as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Parses the process arguments without ever failing: unknown arguments
    /// are dropped so the benchmark always runs and exits 0.
    pub fn parse_lenient() -> Self {
        Self::parse_lenient_from(std::env::args_os())
    }

    pub fn parse_lenient_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next().unwrap_or_else(|| OsString::from("numbench"));

        let mut flags: Vec<OsString> = Vec::new();
        for arg in args {
            let flag = match arg.to_str() {
                Some("-v") => "--verbose",
                Some(s) if KNOWN_FLAGS.contains(&s) => s,
                _ => continue,
            };
            if !flags.iter().any(|f| f == flag) {
                flags.push(OsString::from(flag));
            }
        }

        Self::try_parse_from(std::iter::once(bin).chain(flags)).unwrap_or_default()
    }

    pub fn init_logging(&self) {
        if self.json_logs {
            logger::init_json_logger();
        } else {
            logger::init_cli_logger(self.verbose);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_takes_no_required_arguments() {
        let config = CliConfig::try_parse_from(["numbench"]).unwrap();
        assert!(!config.verbose);
        assert!(!config.monitor);
        assert!(!config.json_logs);

        let config = CliConfig::try_parse_from(["numbench", "-v", "--monitor"]).unwrap();
        assert!(config.verbose);
        assert!(config.monitor);
    }

    #[test]
    fn test_lenient_parse_ignores_unknown_arguments() {
        let config = CliConfig::parse_lenient_from(["numbench", "extra", "--bogus=1", "--help"]);
        assert!(!config.verbose);
        assert!(!config.monitor);
        assert!(!config.json_logs);

        let config =
            CliConfig::parse_lenient_from(["numbench", "extra", "-v", "--verbose", "--json-logs"]);
        assert!(config.verbose);
        assert!(config.json_logs);
        assert!(!config.monitor);
    }

    #[test]
    fn test_lenient_parse_without_program_name() {
        let config = CliConfig::parse_lenient_from(Vec::<OsString>::new());
        assert!(!config.verbose);
    }
}
