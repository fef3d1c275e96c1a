use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
pub use clap_complete::Shell;

const LONG_ABOUT: &str = r#"contract-call issues mock smart contract calls and prints the call record.

No contract is executed. Every call echoes the contract, method and
arguments it was given and returns the fixed result "mocked result".

ARGUMENTS:
    Each call argument is parsed as JSON when possible, so 1000000000 is a
    number, true is a boolean and '"1"' is a string. Anything that is not
    valid JSON is passed through as a string.

EXAMPLES:
    contract-call call get-owner
    contract-call call create-project 1 1000000000 1700000000
    contract-call call add-milestone 1 500000000 "Prototype development"
    contract-call --json call contribute 1 --contract .crowdfunding

ENVIRONMENT:
    CONTRACT_CALL_CONTRACT   default contract (.crowdfunding)
    CONTRACT_CALL_FORMAT     default output format (text|json)
    CONTRACT_CALL_MAX_ARGS   maximum call arguments (64)
    CONTRACT_CALL_LOG        append logs to this file instead of stderr
    CONTRACT_CALL_LOG_LEVEL  log filter when RUST_LOG is unset (warn)"#;

#[derive(Parser)]
#[command(name = "contract-call")]
#[command(author, version)]
#[command(about = "Issue mock smart contract calls")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(
        short,
        long,
        global = true,
        default_value = "text",
        env = "CONTRACT_CALL_FORMAT"
    )]
    pub format: OutputFormat,

    /// Output as JSON (shorthand for --format json)
    #[arg(long, global = true)]
    pub json: bool,
}

impl Cli {
    /// Returns the effective output format, considering --json shorthand.
    pub fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Call a contract method and print the resulting record
    Call {
        /// Method name, e.g. create-project
        method: String,

        /// Call arguments, parsed as JSON when possible
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,

        /// Contract identifier (default: CONTRACT_CALL_CONTRACT or .crowdfunding)
        #[arg(short, long)]
        contract: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
