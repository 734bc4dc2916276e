//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for council results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Classification, every role output, conflicts and summary
    Full,
    /// Only the designated answer
    Answer,
    /// JSON output
    Json,
}

impl From<OutputFormat> for council_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => council_domain::OutputFormat::Full,
            OutputFormat::Answer => council_domain::OutputFormat::Answer,
            OutputFormat::Json => council_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for role-council
#[derive(Parser, Debug)]
#[command(name = "role-council")]
#[command(author, version, about = "Route engineering questions through a council of specialist roles")]
#[command(long_about = r#"
role-council classifies a construction engineering question and consults the
specialist roles it needs (document validator, structural engineer, concrete
specialist, standards checker, cost estimator).

The process has three steps:
1. Classification: complexity, knowledge domains, roles and missing data
2. Execution: roles answer sequentially (each sees earlier answers) or in parallel
3. Synthesis: conflicts between roles are resolved and a final answer is chosen

Configuration files are loaded from (in priority order):
1. COUNCIL_* environment variables
2. --config <path>     Explicit config file
3. ./council.toml      Project-level config
4. ~/.config/role-council/config.toml   Global config

Example:
  role-council classify "What's the OTSKP code for concrete foundation?"
  role-council ask "Check my foundation design for errors and compliance"
  role-council ask --parallel --context '{"project": "Bridge SO 201"}' "Which concrete for the piers?"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to a daily-rotated file in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a question without consulting any role
    Classify {
        /// The question to classify
        question: String,

        /// Treat the request as having attached files
        #[arg(long)]
        has_files: bool,

        /// Print the classification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify a question and consult the selected roles
    Ask {
        /// The question to ask the council
        question: String,

        /// Run roles in parallel (no inter-role context)
        #[arg(long, conflicts_with = "sequential")]
        parallel: bool,

        /// Run roles sequentially even if the config says parallel
        #[arg(long)]
        sequential: bool,

        /// Structured project context as JSON, passed verbatim to every role
        #[arg(long, value_name = "JSON")]
        context: Option<String>,

        /// Treat the request as having attached files
        #[arg(long)]
        has_files: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },
}
