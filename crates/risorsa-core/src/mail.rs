//! Mailbox request message sent alongside the CSV artifacts.

use risorsa_model::EngineConfig;

use crate::assembler::{compact_phone, mail_address, prefixed_phone};
use crate::groups::split_list;
use crate::pipeline::Submission;

pub const DEFAULT_SECONDARY_MAIL_DOMAIN: &str = "consipspa.mail.onmicrosoft.com";
pub const DEFAULT_NOTIFY_ADDRESS: &str = "imac@consip.it";

/// License groups listed in the request, with their fallback names.
const O365_GROUPS: [(&str, &str); 3] = [
    ("grp_o365_standard", "O365 Utenti Standard"),
    ("grp_o365_teams", "O365 Teams Premium"),
    ("grp_o365_copilot", "O365 Copilot Plus"),
];

/// Default distribution lists for an OU key.
pub fn default_distribution_lists<'a>(config: &'a EngineConfig, ou_key: &str) -> Vec<&'a str> {
    let key = match ou_key {
        "utenti_standard" => "dl_standard",
        "utenti_vip" => "dl_vip",
        _ => return Vec::new(),
    };
    config.default_value(key).map(split_list).unwrap_or_default()
}

/// Office 365 groups the new account must join.
pub fn o365_groups(config: &EngineConfig) -> Vec<String> {
    O365_GROUPS
        .iter()
        .map(|(key, fallback)| config.default_or(key, fallback))
        .collect()
}

/// Renders the mailbox request for a generated submission.
pub fn build_mail_template(submission: &Submission, config: &EngineConfig) -> String {
    let identifier = submission.identifier.value.as_str();
    let secondary_domain = config.default_or("mail_domain_secondary", DEFAULT_SECONDARY_MAIL_DOMAIN);
    let rows = [
        ("Tipo Utenza", "Remota".to_string()),
        ("Utenza", identifier.to_string()),
        ("Alias", identifier.to_string()),
        ("Display name", submission.display_name.clone()),
        ("Common name", submission.display_name.clone()),
        ("e-mail", mail_address(identifier, config)),
        ("e-mail secondaria", format!("{identifier}@{secondary_domain}")),
        ("cell", prefixed_phone(&compact_phone(&submission.form.mobile))),
    ];

    let mut out = String::new();
    out.push_str("Ciao.\n");
    out.push_str("Richiedo cortesemente la definizione di una casella di posta come sottoindicato.\n\n");
    out.push_str("| Campo             | Valore |\n");
    out.push_str("|-------------------|--------|\n");
    for (label, value) in &rows {
        out.push_str(&format!("| {label:<17} | {value} |\n"));
    }
    out.push_str(&format!(
        "\nInviare batch di notifica migrazione mail a: {}\n",
        config.default_or("mail_notify", DEFAULT_NOTIFY_ADDRESS)
    ));
    out.push_str("Aggiungere utenza di dominio ai gruppi:\n");
    for group in o365_groups(config) {
        out.push_str(&format!("- {group}\n"));
    }

    let ou_key = config
        .resolve_ou(submission.form.ou_key.as_deref())
        .map(|ou| ou.key.as_str())
        .unwrap_or_default();
    let lists = default_distribution_lists(config, ou_key);
    if !lists.is_empty() {
        out.push_str("\nCase da inserire nelle DL (default):\n");
        for list in lists {
            out.push_str(&format!("- {list}\n"));
        }
    }
    out.push_str("\nGrazie\nSaluti\n");
    out
}
