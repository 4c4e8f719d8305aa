// Rust guideline compliant 2026-02-06

//! Instar CLI Application
//!
//! Command-line interface for resolving service and instance identifiers.

use clap::Parser;
use instar_cli::args::{
    DestInstanceArgs, DestServiceArgs, InstanceArgs, InstanceListArgs, ServiceArgs,
};
use instar_cli::commands::{self, relation::RelationArgs};
use instar_cli::terminal::print_error;
use instar_cli::{create_formatter, logging, should_use_color, OutputFormatter};
use instar_core::Config;
use std::path::PathBuf;
use std::process::ExitCode;

/// Configuration directory used when `--config` is not given.
const DEFAULT_CONFIG_DIR: &str = ".instar";

#[derive(Parser, Debug)]
#[command(
    name = "instar",
    version,
    about = "Instar: resolve service and instance ids from names and back",
    long_about = "Instar converts between opaque service/instance ids and human-readable names. Give either form and it fills in the other.",
    after_help = "Examples:\n  instar service --service-name checkout\n  instar instance --service-name checkout --instance-name pod-1\n  instar instances --service-id Y2hlY2tvdXQ=.1 --instance-name-list pod-1,pod-2\n  instar relation --service-name checkout --instance-name pod-1 --dest-service-name db --dest-instance-name db-0\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration directory
    #[arg(long, global = true, env = "INSTAR_CONFIG_DIR")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

impl From<OutputFormat> for instar_core::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Self::Json,
            OutputFormat::Table => Self::Table,
            OutputFormat::Plain => Self::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Resolve a service id or name
    Service {
        #[command(flatten)]
        service: ServiceArgs,

        /// Do not fail when neither the id nor the name is given
        #[arg(long)]
        optional: bool,
    },

    /// Resolve an instance id or name under a service
    Instance {
        #[command(flatten)]
        service: ServiceArgs,

        #[command(flatten)]
        instance: InstanceArgs,

        /// Do not fail when neither the id nor the name is given
        #[arg(long)]
        optional: bool,
    },

    /// Resolve comma-separated instance ids or names under a service
    Instances {
        #[command(flatten)]
        service: ServiceArgs,

        #[command(flatten)]
        list: InstanceListArgs,

        /// Do not fail when neither the id nor the name is given
        #[arg(long)]
        optional: bool,
    },

    /// Resolve a source and a destination instance
    Relation {
        #[command(flatten)]
        service: ServiceArgs,

        #[command(flatten)]
        dest_service: DestServiceArgs,

        #[command(flatten)]
        instance: InstanceArgs,

        #[command(flatten)]
        dest_instance: DestInstanceArgs,

        /// Do not fail when neither the id nor the name is given
        #[arg(long)]
        optional: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_dir = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));
    let config = match Config::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            print_error(&err.to_string());
            return ExitCode::FAILURE;
        }
    };

    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level.clone());
    let _guard = match logging::init_tracing(&log_level, config.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            print_error(&err.to_string());
            return ExitCode::FAILURE;
        }
    };

    // Determine output format and color usage
    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(format) => format.into(),
        None if cli.json => instar_core::OutputFormat::Json,
        None => config.output_format,
    };
    let formatter = create_formatter(format, use_color);

    if let Err(err) = run(cli.command, &config, formatter.as_ref()) {
        tracing::debug!(error = %err, "command failed");
        eprintln!("{}", formatter.format_error(&err));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(command: Commands, config: &Config, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    match command {
        Commands::Service { service, optional } => {
            commands::service::execute(&service, !optional, config, formatter)
        }
        Commands::Instance {
            service,
            instance,
            optional,
        } => commands::instance::execute(&service, &instance, !optional, config, formatter),
        Commands::Instances {
            service,
            list,
            optional,
        } => commands::instances::execute(&service, &list, !optional, config, formatter),
        Commands::Relation {
            service,
            dest_service,
            instance,
            dest_instance,
            optional,
        } => {
            let args = RelationArgs {
                service,
                dest_service,
                instance,
                dest_instance,
            };
            commands::relation::execute(&args, !optional, config, formatter)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_relation_flags_parse() {
        let cli = Cli::try_parse_from([
            "instar",
            "relation",
            "--service-name",
            "checkout",
            "--instance-id",
            "Y2hlY2tvdXQ=.1_cG9kLTE=",
            "--dest-service-id",
            "ZGI=.1",
            "--dest-instance-name",
            "db-0",
        ])
        .unwrap();

        match cli.command {
            Commands::Relation {
                service,
                dest_service,
                instance,
                dest_instance,
                optional,
            } => {
                assert_eq!(service.service_name.as_deref(), Some("checkout"));
                assert_eq!(dest_service.dest_service_id.as_deref(), Some("ZGI=.1"));
                assert_eq!(
                    instance.instance_id.as_deref(),
                    Some("Y2hlY2tvdXQ=.1_cG9kLTE=")
                );
                assert_eq!(dest_instance.dest_instance_name.as_deref(), Some("db-0"));
                assert!(!optional);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_dest_is_normal_parses_separately() {
        let cli = Cli::try_parse_from([
            "instar",
            "relation",
            "--is-normal",
            "false",
            "--dest-is-normal",
            "true",
        ])
        .unwrap();

        match cli.command {
            Commands::Relation {
                service,
                dest_service,
                ..
            } => {
                assert_eq!(service.is_normal, Some(false));
                assert_eq!(dest_service.dest_is_normal, Some(true));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_is_normal_takes_a_value() {
        let cli = Cli::try_parse_from([
            "instar",
            "service",
            "--service-name",
            "checkout",
            "--is-normal",
            "false",
        ])
        .unwrap();

        match cli.command {
            Commands::Service { service, .. } => assert_eq!(service.is_normal, Some(false)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
