//! Integration tests for the command layer.

use std::io::Write;

use clap::Parser;
use tempfile::NamedTempFile;

use risorsa_cli::cli::{Cli, Command};
use risorsa_cli::commands::{build_form, run_generate, run_mail};
use risorsa_model::{ResourceKind, SchemaKind};

const SHEET: &str = "Section,Key/App,Label/Gruppi/Value
OU,utenti_standard,OU=Utenti Standard
OU,utenti_vip,OU=Utenti VIP
InserimentoGruppi,interna,365 Viva;GRP_Intranet
Defaults,grp_default,O365 Utenti Standard
Defaults,company_interna,Consip
Defaults,dl_standard,utenti.consip@consip.it
";

fn config_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp config");
    file.write_all(SHEET.as_bytes()).expect("write config");
    file
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("nuova-risorsa").chain(args.iter().copied()))
        .expect("parse args")
}

#[test]
fn generate_writes_all_artifacts() {
    let config = config_file();
    let out = tempfile::tempdir().expect("temp dir");
    let config_path = config.path().to_string_lossy().to_string();
    let out_path = out.path().to_string_lossy().to_string();
    let cli = parse(&[
        "generate",
        "--config",
        &config_path,
        "--first",
        "anna",
        "--last",
        "verdi",
        "--mobile",
        "333 1234567",
        "--output-dir",
        &out_path,
    ]);
    let Command::Generate(args) = cli.command else {
        panic!("expected generate command");
    };

    let result = run_generate(&args).expect("generate");

    assert_eq!(result.submission.identifier.value, "anna.verdi");
    assert_eq!(result.submission.groups, "O365 Utenti Standard;O365 Viva;GRP_Intranet");
    assert_eq!(result.written.len(), 3);
    let user = std::fs::read_to_string(out.path().join("Verdi_A_interno.csv")).expect("user csv");
    let row = user.split("\r\n").nth(1).expect("data row");
    assert!(row.starts_with("anna.verdi,SI,\"OU=Utenti Standard\",\"Verdi Anna\","));
    assert!(row.contains(",\"+39 3331234567\","));
    assert!(out.path().join("Verdi_A_computer.csv").exists());
    assert!(out.path().join("Verdi_A_profilazione.csv").exists());
}

#[test]
fn dry_run_with_selected_schema_writes_nothing() {
    let config = config_file();
    let config_path = config.path().to_string_lossy().to_string();
    let cli = parse(&[
        "generate",
        "--config",
        &config_path,
        "--first",
        "Mario",
        "--last",
        "Rossi",
        "--kind",
        "esterna",
        "--schema",
        "profilazione",
        "--schema",
        "profilazione",
        "--dry-run",
    ]);
    let Command::Generate(args) = cli.command else {
        panic!("expected generate command");
    };

    let result = run_generate(&args).expect("generate");

    assert!(result.written.is_empty());
    assert_eq!(result.artifacts.len(), 1);
    assert_eq!(result.artifacts[0].schema, SchemaKind::Profilazione);
    assert_eq!(result.artifacts[0].file_name, "Rossi_M_profilazione.csv");
    assert_eq!(result.submission.identifier.value, "mario.rossi.ext");
}

#[test]
fn blank_names_are_rejected_before_the_engine_runs() {
    let cli = parse(&["mail", "--first", " ", "--last", "Rossi"]);
    let Command::Mail(args) = cli.command else {
        panic!("expected mail command");
    };
    let err = build_form(&args.form).expect_err("blank first name");
    assert!(err.to_string().contains("--first"));
}

#[test]
fn form_flags_map_onto_the_form() {
    let cli = parse(&[
        "mail",
        "--first",
        "Anna",
        "--second-first",
        "Maria",
        "--last",
        "Verdi",
        "--kind",
        "esterna",
        "--resident",
        "--landline",
        "0612345",
        "--ou",
        "utenti_vip",
        "--pc",
        "PC-0042",
    ]);
    let Command::Mail(args) = cli.command else {
        panic!("expected mail command");
    };
    let form = build_form(&args.form).expect("form");
    assert_eq!(form.kind, ResourceKind::Esterna);
    assert_eq!(form.name.second_first, "Maria");
    assert!(form.resident);
    assert_eq!(form.landline, "0612345");
    assert_eq!(form.ou_key.as_deref(), Some("utenti_vip"));
    assert_eq!(form.description, "PC-0042");
}

#[test]
fn mail_lists_default_distribution_lists() {
    let config = config_file();
    let config_path = config.path().to_string_lossy().to_string();
    let cli = parse(&[
        "mail",
        "--config",
        &config_path,
        "--first",
        "Anna",
        "--last",
        "Verdi",
    ]);
    let Command::Mail(args) = cli.command else {
        panic!("expected mail command");
    };
    let template = run_mail(&args).expect("mail");
    assert!(template.contains("| Utenza            | anna.verdi |"));
    assert!(template.contains("- utenti.consip@consip.it"));
}
