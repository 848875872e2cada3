//! CLI argument definitions for the provisioning tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use risorsa_model::{ResourceKind, SchemaKind};

#[derive(Parser)]
#[command(
    name = "nuova-risorsa",
    version,
    about = "Nuova Risorsa - Generate provisioning artifacts for a new resource",
    long_about = "Derive the account identifier, display name and group memberships for a new\n\
                  resource and write the User, Computer and Profilazione import CSV files.\n\n\
                  Lookups (OU options, insertion groups, defaults) are read from the\n\
                  configuration sheet exported as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow personal values (names, identifiers, phone numbers) in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Derive the records for a new resource and write the CSV artifacts.
    Generate(GenerateArgs),

    /// Print the mailbox request message for a new resource.
    Mail(MailArgs),

    /// List the OU options found in the configuration.
    Ou(ConfigArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration sheet exported as CSV (default: $RISORSA_CONFIG).
    #[arg(long = "config", value_name = "CSV")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct FormArgs {
    /// Nome.
    #[arg(long = "first")]
    pub first: String,

    /// Secondo nome.
    #[arg(long = "second-first", default_value = "")]
    pub second_first: String,

    /// Cognome.
    #[arg(long = "last")]
    pub last: String,

    /// Secondo cognome.
    #[arg(long = "second-last", default_value = "")]
    pub second_last: String,

    /// Internal employee or external party.
    #[arg(long = "kind", value_enum, default_value = "interna")]
    pub kind: KindArg,

    /// Matricola (default: `employee_id_default` from the configuration).
    #[arg(long = "employee-id", default_value = "")]
    pub employee_id: String,

    /// Codice fiscale.
    #[arg(long = "fiscal-code", default_value = "")]
    pub fiscal_code: String,

    /// Division/area acronym (default: `department_default`).
    #[arg(long = "department", default_value = "")]
    pub department: String,

    /// Mobile number, `+39` is added automatically.
    #[arg(long = "mobile", default_value = "")]
    pub mobile: String,

    /// Workstation name (default: <PC>).
    #[arg(long = "pc", default_value = "")]
    pub pc: String,

    /// The resource is resident and has a landline.
    #[arg(long = "resident")]
    pub resident: bool,

    /// Resident landline, `+39` is added automatically.
    #[arg(long = "landline", default_value = "")]
    pub landline: String,

    /// OU option key (default: `ou_default` from the configuration).
    #[arg(long = "ou", value_name = "KEY")]
    pub ou: Option<String>,

    /// Insertion-group selector (default: the resource kind).
    #[arg(long = "process", value_name = "KEY")]
    pub process: Option<String>,

    /// Contract end date (dd-mm-yyyy or dd/mm/yyyy), external resources only.
    #[arg(long = "expire-date", default_value = "")]
    pub expire_date: String,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(flatten)]
    pub form: FormArgs,

    /// Output directory for generated files (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Records to generate (repeatable; default: all).
    #[arg(long = "schema", value_enum)]
    pub schemas: Vec<SchemaArg>,

    /// Preview the records without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the artifacts as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct MailArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(flatten)]
    pub form: FormArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Interna,
    Esterna,
}

impl From<KindArg> for ResourceKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Interna => ResourceKind::Interna,
            KindArg::Esterna => ResourceKind::Esterna,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaArg {
    User,
    Computer,
    Profilazione,
}

impl From<SchemaArg> for SchemaKind {
    fn from(value: SchemaArg) -> Self {
        match value {
            SchemaArg::User => SchemaKind::User,
            SchemaArg::Computer => SchemaKind::Computer,
            SchemaArg::Profilazione => SchemaKind::Profilazione,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
