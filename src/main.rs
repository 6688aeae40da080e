use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Natural language to IMS search syntax", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a natural language query into IMS syntax
    Parse {
        /// Query text (English, Korean or Japanese)
        query: String,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,

        /// Consult the LLM fallback when rule confidence is low
        #[arg(long)]
        llm: bool,
    },

    /// Check whether a query is already IMS syntax
    Check {
        /// Query text
        query: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Parse { query, json, llm } => commands::parse::execute(&query, json, llm)?,
        Commands::Check { query } => commands::check::execute(&query)?,
    };

    std::process::exit(code);
}
