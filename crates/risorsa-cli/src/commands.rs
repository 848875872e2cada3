use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use risorsa_config::{ConfigError, load_config};
use risorsa_core::mail::build_mail_template;
use risorsa_core::{Submission, generate};
use risorsa_model::{EngineConfig, PersonName, ResourceForm, SchemaKind};
use risorsa_output::{Artifact, write_artifacts};

use crate::cli::{ConfigArgs, FormArgs, GenerateArgs, MailArgs};
use crate::logging::redact_value;
use crate::summary::apply_table_style;

/// Outcome of a `generate` run, used for the printed summary.
pub struct GenerateResult {
    pub submission: Submission,
    pub artifacts: Vec<Artifact>,
    pub written: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Loads the configuration sheet from `--config` or `RISORSA_CONFIG`.
pub fn load_engine_config(args: &ConfigArgs) -> Result<EngineConfig> {
    let path = args
        .config
        .clone()
        .or_else(risorsa_config::config_path_from_env)
        .ok_or(ConfigError::NoConfigPath {
            env_var: risorsa_config::CONFIG_ENV_VAR,
        })?;
    let config =
        load_config(&path).with_context(|| format!("load configuration {}", path.display()))?;
    if config.ou_options.is_empty() {
        warn!(path = %path.display(), "configuration has no OU options");
    }
    Ok(config)
}

/// Builds the engine input from the form flags.
///
/// The engine itself accepts anything; the shell refuses to run it until the
/// required name parts are present.
pub fn build_form(args: &FormArgs) -> Result<ResourceForm> {
    if args.first.trim().is_empty() || args.last.trim().is_empty() {
        bail!("--first and --last are required and must not be blank");
    }
    let name = PersonName::new(args.first.as_str(), args.last.as_str())
        .with_second_first(args.second_first.as_str())
        .with_second_last(args.second_last.as_str());
    let mut form = ResourceForm::new(name, args.kind.into());
    form.employee_id = args.employee_id.clone();
    form.fiscal_code = args.fiscal_code.clone();
    form.department = args.department.clone();
    form.mobile = args.mobile.clone();
    form.description = args.pc.clone();
    form.resident = args.resident;
    form.landline = args.landline.clone();
    form.ou_key = args.ou.clone();
    form.process = args.process.clone();
    form.expire_date = args.expire_date.clone();
    Ok(form)
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let config = load_engine_config(&args.config)?;
    let form = build_form(&args.form)?;
    let schemas = requested_schemas(args);
    let span = info_span!("generate", kind = %form.kind);
    let _guard = span.enter();

    let submission = generate(&form, &config, &schemas);
    info!(
        identifier = redact_value(&submission.identifier.value),
        tier = %submission.identifier.tier,
        record_count = submission.records.len(),
        "submission derived"
    );

    let artifacts = submission
        .records
        .iter()
        .map(|record| Artifact::from_record(record, &submission.form.name, submission.form.kind))
        .collect::<Result<Vec<_>, _>>()
        .context("serialize records")?;

    let written = if args.dry_run {
        Vec::new()
    } else {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        write_artifacts(&output_dir, &artifacts)
            .with_context(|| format!("write artifacts to {}", output_dir.display()))?
    };

    Ok(GenerateResult {
        submission,
        artifacts,
        written,
        dry_run: args.dry_run,
    })
}

pub fn run_mail(args: &MailArgs) -> Result<String> {
    let config = load_engine_config(&args.config)?;
    let form = build_form(&args.form)?;
    let submission = generate(&form, &config, &[]);
    Ok(build_mail_template(&submission, &config))
}

pub fn run_ou(args: &ConfigArgs) -> Result<()> {
    let config = load_engine_config(args)?;
    let default_key = config.resolve_ou(None).map(|ou| ou.key.clone());
    let mut table = Table::new();
    table.set_header(vec!["Key", "Label", "Default"]);
    apply_table_style(&mut table);
    for option in &config.ou_options {
        let marker = if default_key.as_deref() == Some(option.key.as_str()) {
            "*"
        } else {
            ""
        };
        table.add_row(vec![option.key.as_str(), option.label.as_str(), marker]);
    }
    println!("{table}");
    Ok(())
}

fn requested_schemas(args: &GenerateArgs) -> Vec<SchemaKind> {
    if args.schemas.is_empty() {
        return SchemaKind::ALL.to_vec();
    }
    let mut schemas: Vec<SchemaKind> = Vec::new();
    for schema in args.schemas.iter().map(|s| SchemaKind::from(*s)) {
        if !schemas.contains(&schema) {
            schemas.push(schema);
        }
    }
    schemas
}
