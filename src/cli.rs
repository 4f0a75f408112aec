use std::path::PathBuf;

use clap::{Parser, Subcommand};

use spdx_expr::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "spdx-expr",
    about = "Parse, normalize and inspect SPDX license expressions",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file [default: ./.spdx-expr/config.toml, fallback ~/.config/spdx-expr/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Report format (overrides `output.format` from the config)
    #[arg(long, value_name = "FORMAT", global = true)]
    pub report: Option<ReportFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Only print unparseable expressions and the summary line
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the canonical form of each expression
    Normalize {
        #[arg(required = true, value_name = "EXPR")]
        expressions: Vec<String>,
    },
    /// List the known SPDX licenses referenced by each expression
    Licenses {
        #[arg(required = true, value_name = "EXPR")]
        expressions: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalize() {
        let cli = Cli::try_parse_from(["spdx-expr", "normalize", "MIT OR GPL-2.0+", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Normalize { expressions } => assert_eq!(expressions, vec!["MIT OR GPL-2.0+"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_report_flag() {
        let cli = Cli::try_parse_from(["spdx-expr", "--report", "json", "licenses", "MIT"]).unwrap();
        assert!(matches!(cli.report, Some(ReportFormat::Json)));
    }

    #[test]
    fn test_expression_required() {
        assert!(Cli::try_parse_from(["spdx-expr", "licenses"]).is_err());
    }
}
