use clap::{Parser, Subcommand};

/// GraphQL job board backed by MongoDB
#[derive(Debug, Parser)]
#[command(name = "job-board", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve {
        /// Overrides HOST
        #[arg(long)]
        host: Option<String>,

        /// Overrides PORT
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the GraphQL schema in SDL form
    PrintSchema,
}
