use crate::inventory::ListRecord;

use super::sanitize::escape_string;

/// Emit one `akamai_clientlist_list` resource block for a matched
/// (group, list) pair, followed by a separating blank line.
///
/// Field order is fixed: tags, notes (both only when present and
/// non-empty), then name, type, contract_id, group_id, then one `items`
/// sub-block per item in inventory order. Omitted optional fields produce
/// no line at all.
pub fn emit_list_block(
    record: &ListRecord,
    tf_name: &str,
    contract_id: &str,
    group_id: i64,
) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "resource \"akamai_clientlist_list\" \"{}\" {{",
        tf_name
    ));

    if let Some(tags) = non_empty_list(&record.tags) {
        lines.push(format!("  tags        = {}", tag_list(tags)));
    }

    if let Some(notes) = non_empty_str(&record.notes) {
        lines.push(format!("  notes       = \"{}\"", escape_string(notes)));
    }

    lines.push(format!("  name        = \"{}\"", escape_string(&record.name)));
    lines.push(format!("  type        = \"{}\"", escape_string(&record.list_type)));
    lines.push(format!("  contract_id = \"{}\"", escape_string(contract_id)));
    lines.push(format!("  group_id    = {}", group_id));

    for item in &record.items {
        lines.push("  items {".to_string());
        lines.push(format!("    value           = \"{}\"", escape_string(&item.value)));

        if let Some(tags) = non_empty_list(&item.tags) {
            lines.push(format!("    tags            = {}", tag_list(tags)));
        }

        if let Some(description) = non_empty_str(&item.description) {
            lines.push(format!(
                "    description     = \"{}\"",
                escape_string(description)
            ));
        }

        if let Some(date) = non_empty_str(&item.expiration_date) {
            lines.push(format!("    expiration_date = \"{}\"", escape_string(date)));
        }

        lines.push("  }".to_string());
    }

    lines.push("}".to_string());
    lines.push(String::new());

    lines
}

/// Serialize tags as an HCL list literal, escaping each element
fn tag_list(tags: &[String]) -> String {
    let quoted: Vec<String> = tags
        .iter()
        .map(|tag| format!("\"{}\"", escape_string(tag)))
        .collect();
    format!("[{}]", quoted.join(", "))
}

fn non_empty_list(tags: &Option<Vec<String>>) -> Option<&[String]> {
    tags.as_deref().filter(|t| !t.is_empty())
}

fn non_empty_str(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
