use clap::{Parser, Subcommand};
use log::debug;

use crate::commands::{self, BuildRequest};
use crate::config::AppConfig;
use crate::errors::CoreError;

#[derive(Parser, Debug)]
#[command(name = "mgu", version, about = "ExtractBinAsAssemblyParams tooling")]
pub struct Cli {
    /// Pretty-print JSON output (overrides MGU_PRETTY_JSON)
    #[arg(long, global = true)]
    pub pretty: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Re-emits a params document with declared fields first and nulls dropped
    Normalize {
        /// Path to the JSON document, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
    },
    /// Prints the diagnostic representation of a params document
    Show {
        /// Path to the JSON document, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
    },
    /// Builds a params document from flags
    Build {
        #[arg(long)]
        obj_ref: Option<String>,
        #[arg(long)]
        workspace: Option<String>,
        /// BIN_ID or BIN_ID:SUFFIX, repeatable
        #[arg(long = "bin")]
        bins: Vec<String>,
        /// Suffix for --bin values without their own
        #[arg(long)]
        suffix: Option<String>,
        /// KEY=JSON additional property, repeatable
        #[arg(long = "extra")]
        extras: Vec<String>,
    },
}

pub fn logger_init() {
    // MGU_LOG_LEVEL acepta la misma sintaxis que RUST_LOG
    let env = env_logger::Env::new().filter_or("MGU_LOG_LEVEL", "info");
    env_logger::Builder::from_env(env).init();
}

/// Ejecuta el comando y devuelve lo que debe imprimirse en stdout.
pub fn run(cli: Cli, config: &AppConfig) -> Result<String, CoreError> {
    let mut config = config.clone();
    config.pretty_json |= cli.pretty;
    debug!("run: {:?}", cli.command);
    match cli.command {
        Command::Normalize { input } => commands::normalize(&commands::read_input(&input)?, &config),
        Command::Show { input } => commands::show(&commands::read_input(&input)?),
        Command::Build { obj_ref, workspace, bins, suffix, extras } => {
            let request = BuildRequest { obj_ref, workspace, bins, suffix, extras };
            commands::build(&request, &config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_build_flags() {
        let cli = Cli::try_parse_from(["mgu", "build", "--obj-ref", "1/2/3", "--bin", "bin.1", "--bin", "bin.2:_x",
                                       "--extra", "note=hi", "--pretty"]).unwrap();
        assert!(cli.pretty);
        match cli.command {
            Command::Build { obj_ref, bins, extras, workspace, suffix } => {
                assert_eq!(obj_ref.as_deref(), Some("1/2/3"));
                assert_eq!(bins, vec!["bin.1", "bin.2:_x"]);
                assert_eq!(extras, vec!["note=hi"]);
                assert_eq!(workspace, None);
                assert_eq!(suffix, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn input_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["mgu", "show"]).unwrap();
        assert!(matches!(cli.command, Command::Show { ref input } if input == "-"));
    }

    #[test]
    fn pretty_flag_overrides_config() {
        let cli = Cli::try_parse_from(["mgu", "--pretty", "build", "--workspace", "ws"]).unwrap();
        let out = run(cli, &AppConfig::default()).unwrap();
        assert_eq!(out, "{\n  \"workspace_name\": \"ws\"\n}");
    }
}
