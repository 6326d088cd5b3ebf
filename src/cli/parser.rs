use clap::{Parser, Subcommand};

/// Command-line interface definition for otfmail
/// CLI tool to extract workout records from Orangetheory summary emails
#[derive(Parser)]
#[command(
    name = "otfmail",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract workout metrics from Orangetheory summary emails",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse .eml files into workout records
    Parse {
        /// Email files to parse
        #[arg(required = true)]
        files: Vec<String>,

        #[arg(long, help = "Print records as JSON instead of a summary table")]
        json: bool,
    },

    /// Decode an email payload and print the normalized HTML
    Decode {
        /// Email file to decode
        file: String,
    },
}
