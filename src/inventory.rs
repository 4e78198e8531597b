use anyhow::{Context as _, Result, bail};
use serde::Deserialize;

use crate::traits::HttpClient;

/// Inventory endpoint, relative to the account's EdgeGrid host
pub const LISTS_ENDPOINT: &str = "/client-list/v1/lists?includeItems=true";

/// One client list as reported by the inventory endpoint. `name` is the
/// join key against the config; `list_id` is the stable remote identifier
/// used for Terraform imports.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecord {
    pub name: String,
    pub list_id: String,
    #[serde(rename = "type")]
    pub list_type: String,
    pub tags: Option<Vec<String>>,
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<ListItem>,
    pub production_activation_status: String,
    pub staging_activation_status: String,
}

/// One access-control entry within a client list
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub value: String,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
    pub expiration_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InventoryResponse {
    #[serde(default)]
    content: Vec<ListRecord>,
}

/// Fetch the full client list inventory in one authenticated call.
/// Any response status >= 400 is a hard failure; there is no retry.
pub fn fetch_client_lists(http: &dyn HttpClient) -> Result<Vec<ListRecord>> {
    let response = http.get(LISTS_ENDPOINT)?;

    if response.status >= 400 {
        bail!(
            "Failure extracting details of client lists: status code {}",
            response.status
        );
    }

    let inventory: InventoryResponse = serde_json::from_str(&response.body)
        .context("Failed to parse client list inventory response")?;

    Ok(inventory.content)
}
