//! Mary Server CLI
//!
//! Serves the compiled Mary Agency site and exports its SEO files.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for the Mary Agency site server.
#[derive(Parser)]
#[command(
    name = "mary-server",
    version,
    about = "Serve the Mary Agency site and export its SEO files"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Serve the compiled site with generated robots.txt and sitemap.xml
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Directory holding the compiled site
        #[arg(long, default_value = "target/site")]
        site_root: std::path::PathBuf,
    },
    /// Write robots.txt, sitemap.xml and structured-data.json
    Export {
        /// Output directory
        #[arg(short, long, default_value = "public")]
        output: std::path::PathBuf,
    },
    /// Validate configuration
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    mary_server::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { port, site_root } => {
            mary_server::cmd::serve::run(&cli.config, port, &site_root).await?;
        }
        Commands::Export { output } => {
            mary_server::cmd::export::run(&cli.config, &output)?;
        }
        Commands::Check { strict } => {
            mary_server::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_serve_defaults() {
        let cli = Cli::parse_from(["mary-server", "serve"]);

        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Serve { port, site_root } => {
                assert_eq!(port, 3000);
                assert_eq!(site_root, std::path::PathBuf::from("target/site"));
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_serve_with_options() {
        let cli = Cli::parse_from([
            "mary-server",
            "serve",
            "--port",
            "8080",
            "--site-root",
            "dist",
        ]);

        match cli.command {
            Commands::Serve { port, site_root } => {
                assert_eq!(port, 8080);
                assert_eq!(site_root, std::path::PathBuf::from("dist"));
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_export_command() {
        let cli = Cli::parse_from(["mary-server", "export", "-o", "out"]);

        match cli.command {
            Commands::Export { output } => {
                assert_eq!(output, std::path::PathBuf::from("out"));
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_cli_export_default_output() {
        let cli = Cli::parse_from(["mary-server", "export"]);

        match cli.command {
            Commands::Export { output } => {
                assert_eq!(output, std::path::PathBuf::from("public"));
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_cli_check_strict() {
        let cli = Cli::parse_from(["mary-server", "check", "--strict"]);

        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::parse_from(["mary-server", "-vv", "--config", "prod.toml", "export"]);

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, std::path::PathBuf::from("prod.toml"));
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
