//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// User/Post API - create users and their posts over HTTP
#[derive(Parser, Debug)]
#[command(name = "user-posts-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Wait for the database, then start the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the serve command
///
/// Unset values fall back to `SERVER_HOST` / `PORT` from the environment.
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::parse_from(["user-posts-api", "-v", "serve", "--port", "8080"]);

        assert!(cli.verbose);
        let Commands::Serve(args) = cli.command;
        assert_eq!(args.port, Some(8080));
        assert_eq!(args.host, None);
    }

    #[test]
    fn test_command_is_required() {
        assert!(Cli::try_parse_from(["user-posts-api"]).is_err());
    }
}
