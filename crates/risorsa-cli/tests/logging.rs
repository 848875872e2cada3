//! Logging output of a real command run.
//!
//! Kept in its own test binary: the global subscriber can only be set once.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use clap::Parser;
use tempfile::NamedTempFile;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

use risorsa_cli::cli::{Cli, Command};
use risorsa_cli::commands::run_generate;
use risorsa_cli::logging::{
    LogConfig, LogFormat, REDACTED_VALUE, init_logging_with_writer, log_data_enabled,
};

#[derive(Clone, Default)]
struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let buffer = self.buffer.lock().expect("log buffer");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn generate_logs_redact_the_identifier() {
    let logs = CapturedLogs::default();
    let config = LogConfig {
        level_filter: LevelFilter::INFO,
        use_env_filter: false,
        with_ansi: false,
        format: LogFormat::Compact,
        ..LogConfig::default()
    };
    init_logging_with_writer(&config, logs.clone());
    assert!(!log_data_enabled());

    let mut sheet = NamedTempFile::new().expect("temp config");
    sheet
        .write_all(b"Section,Key/App,Label/Gruppi/Value\nOU,utenti_standard,OU=Utenti Standard\n")
        .expect("write config");
    let config_path = sheet.path().to_string_lossy().to_string();
    let cli = Cli::try_parse_from([
        "nuova-risorsa",
        "generate",
        "--config",
        &config_path,
        "--first",
        "Anna",
        "--last",
        "Verdi",
        "--dry-run",
    ])
    .expect("parse args");
    let Command::Generate(args) = cli.command else {
        panic!("expected generate command");
    };

    let result = run_generate(&args).expect("generate");
    assert_eq!(result.submission.identifier.value, "anna.verdi");

    let output = logs.contents();
    assert!(output.contains("submission derived"), "{output}");
    assert!(output.contains(REDACTED_VALUE), "{output}");
    assert!(!output.contains("anna.verdi"), "{output}");
}
