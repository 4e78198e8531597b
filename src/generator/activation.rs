use crate::inventory::ListRecord;

use super::sanitize::escape_string;

/// The only activation status the generator acts on. Anything else
/// (inactive, pending, deactivated) yields no block and no import line.
pub const ACTIVE_STATUS: &str = "ACTIVE";

#[derive(Clone, Copy)]
enum Network {
    Production,
    Staging,
}

impl Network {
    fn name(self) -> &'static str {
        match self {
            Network::Production => "PRODUCTION",
            Network::Staging => "STAGING",
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Network::Production => "prod",
            Network::Staging => "staging",
        }
    }

    fn status(self, record: &ListRecord) -> &str {
        match self {
            Network::Production => &record.production_activation_status,
            Network::Staging => &record.staging_activation_status,
        }
    }
}

/// Emit `akamai_clientlist_activation` blocks for every network the list is
/// currently active on, production first, plus one import directive per
/// block. The version field always references the sibling resource's
/// `version` attribute so it tracks whatever version Terraform manages.
pub fn emit_activation_blocks(record: &ListRecord, tf_name: &str) -> (Vec<String>, Vec<String>) {
    let mut lines = Vec::new();
    let mut imports = Vec::new();

    for network in [Network::Production, Network::Staging] {
        if network.status(record) != ACTIVE_STATUS {
            continue;
        }

        let address = format!("{}_{}", tf_name, network.suffix());

        lines.push(format!(
            "resource \"akamai_clientlist_activation\" \"{}\" {{",
            address
        ));
        lines.push(format!(
            "  list_id                 = \"{}\"",
            escape_string(&record.list_id)
        ));
        lines.push(format!(
            "  version                 = akamai_clientlist_list.{}.version",
            tf_name
        ));
        lines.push(format!("  network                 = \"{}\"", network.name()));
        lines.push("  comments                = var.comments".to_string());
        lines.push("  notification_recipients = var.email".to_string());
        lines.push("}".to_string());
        lines.push(String::new());

        imports.push(format!(
            "terraform import akamai_clientlist_activation.{} {}:{}",
            address,
            record.list_id,
            network.name()
        ));
    }

    (lines, imports)
}
