//! The generation engine: a pure function from the group assignment config
//! and the fetched inventory to the three generated artifacts.

pub mod activation;
pub mod resource;
pub mod sanitize;
pub mod statics;

use anyhow::{Result, bail};
use std::collections::HashMap;

use crate::config::Config;
use crate::inventory::ListRecord;

use sanitize::sanitize_name;

/// The three generated text artifacts, in final on-disk form
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedArtifacts {
    pub main_tf: String,
    pub import_sh: String,
    pub variables_tf: String,
}

/// Join the config against the inventory and assemble the artifacts.
///
/// Groups are processed in config order and list names in group order. A
/// list name with no inventory match is silently skipped (not yet
/// provisioned). Resource blocks are collected first and activation blocks
/// appended as one trailing section, while import directives stay
/// interleaved per pair: each resource import is immediately followed by
/// that pair's activation imports.
pub fn generate(config: &Config, lists: &[ListRecord]) -> Result<GeneratedArtifacts> {
    check_ownership(config)?;

    let inventory: HashMap<&str, &ListRecord> =
        lists.iter().map(|list| (list.name.as_str(), list)).collect();

    let mut resource_lines: Vec<String> = Vec::new();
    let mut activation_lines: Vec<String> = Vec::new();
    let mut import_lines: Vec<String> = Vec::new();
    // sanitized identifier -> original list name, to reject collisions
    let mut identifiers: HashMap<String, &str> = HashMap::new();

    for group in &config.groups {
        for list_name in &group.lists {
            let Some(record) = inventory.get(list_name.as_str()) else {
                continue;
            };

            let tf_name = sanitize_name(list_name);
            if let Some(previous) = identifiers.insert(tf_name.clone(), list_name) {
                bail!(
                    "Lists \"{}\" and \"{}\" both map to Terraform identifier \"{}\"; \
                     rename one of them",
                    previous,
                    list_name,
                    tf_name
                );
            }

            resource_lines.extend(resource::emit_list_block(
                record,
                &tf_name,
                &config.contract_id,
                group.group_id,
            ));
            import_lines.push(format!(
                "terraform import akamai_clientlist_list.{} {}",
                tf_name, record.list_id
            ));

            let (lines, imports) = activation::emit_activation_blocks(record, &tf_name);
            activation_lines.extend(lines);
            import_lines.extend(imports);
        }
    }

    let mut main_tf = statics::provider_preamble().join("\n");
    main_tf.push('\n');
    main_tf.push_str(&resource_lines.join("\n"));
    main_tf.push('\n');
    main_tf.push_str(&activation_lines.join("\n"));

    let mut import_sh = String::from("terraform init\n");
    import_sh.push_str(&import_lines.join("\n"));

    Ok(GeneratedArtifacts {
        main_tf,
        import_sh,
        variables_tf: statics::variables_file(),
    })
}

/// Reject configs that bind the same list name more than once. One list
/// belongs to at most one group.
fn check_ownership(config: &Config) -> Result<()> {
    let mut owners: HashMap<&str, i64> = HashMap::new();

    for group in &config.groups {
        for list_name in &group.lists {
            if let Some(previous) = owners.insert(list_name.as_str(), group.group_id) {
                bail!(
                    "List \"{}\" is assigned to both group {} and group {}",
                    list_name,
                    previous,
                    group.group_id
                );
            }
        }
    }

    Ok(())
}
