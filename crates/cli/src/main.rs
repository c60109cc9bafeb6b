use clap::{Parser, Subcommand};
use rrhex_domain::CliOverrides;
use std::path::PathBuf;
use tracing::debug;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "rrhex")]
#[command(version)]
#[command(about = "rrhex - DNS resource record wire-format encoder/decoder")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Enforce RFC 1035 label and name length limits
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode JSON record descriptions into a hex string
    Encode {
        /// Read records from FILE instead of stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Decode a hex string into JSON record descriptions
    Decode {
        /// Hex string to decode (read from --input or stdin when omitted)
        #[arg(conflicts_with = "input")]
        hex: Option<String>,

        /// Read the hex string from FILE
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// List the record types accepted by name
    Types,

    /// Print the effective configuration as TOML
    Config {
        /// Write the configuration to FILE instead of stdout
        #[arg(long, value_name = "FILE")]
        write: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        strict: cli.strict,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!("Starting rrhex v{}", env!("CARGO_PKG_VERSION"));

    let use_cases = di::UseCases::new(&config)?;

    match &cli.command {
        Command::Encode { input } => commands::encode(&use_cases, input.as_deref()),
        Command::Decode {
            hex,
            input,
            compact,
        } => commands::decode(&use_cases, hex.as_deref(), input.as_deref(), *compact),
        Command::Types => {
            commands::types(&use_cases.registry);
            Ok(())
        }
        Command::Config { write } => commands::config(&config, write.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_decode_args() {
        let cli = Cli::try_parse_from(["rrhex", "--strict", "decode", "00000100010000000a0000"])
            .unwrap();
        assert!(cli.strict);
        assert!(matches!(
            cli.command,
            Command::Decode { hex: Some(_), input: None, compact: false }
        ));
    }

    #[test]
    fn test_decode_hex_conflicts_with_input() {
        let result = Cli::try_parse_from(["rrhex", "decode", "00", "--input", "dump.hex"]);
        assert!(result.is_err());
    }
}
