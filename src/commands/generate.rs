use anyhow::{Context as _, Result};
use std::path::Path;

use crate::config::Config;
use crate::context::Context;
use crate::generator;
use crate::inventory;
use crate::traits::HttpClient;

/// Handles the 'generate' command - joins the group assignment config
/// against the remote inventory and writes the generated Terraform files
pub struct GenerateCommand;

impl GenerateCommand {
    /// Execute the generate command. The HTTP client is constructed by the
    /// caller so the fetch can be faked under test.
    pub fn execute(
        ctx: &Context,
        http: &dyn HttpClient,
        config_path: &Path,
        output_dir: &Path,
    ) -> Result<()> {
        let config = Config::load(&*ctx.fs, config_path)?;

        ctx.output.key_value("Contract", &config.contract_id);
        ctx.output.info(&format!(
            "Loaded {} group assignment(s) from {}",
            config.groups.len(),
            config_path.display()
        ));

        let lists = inventory::fetch_client_lists(http)?;
        ctx.output
            .info(&format!("Fetched {} client list(s) from the inventory", lists.len()));

        let artifacts = generator::generate(&config, &lists)?;

        let main_tf_path = output_dir.join("main.tf");
        ctx.fs
            .write(&main_tf_path, &artifacts.main_tf)
            .with_context(|| format!("Failed to write {:?}", main_tf_path))?;
        ctx.output
            .dimmed(&format!("  Created: {}", main_tf_path.display()));

        let import_sh_path = output_dir.join("import.sh");
        ctx.fs
            .write(&import_sh_path, &artifacts.import_sh)
            .with_context(|| format!("Failed to write {:?}", import_sh_path))?;
        ctx.output
            .dimmed(&format!("  Created: {}", import_sh_path.display()));

        let variables_tf_path = output_dir.join("variables.tf");
        ctx.fs
            .write(&variables_tf_path, &artifacts.variables_tf)
            .with_context(|| format!("Failed to write {:?}", variables_tf_path))?;
        ctx.output
            .dimmed(&format!("  Created: {}", variables_tf_path.display()));

        ctx.output
            .success("Terraform configuration has been generated and saved to main.tf");
        ctx.output
            .success("Import commands have been generated and saved to import.sh");
        ctx.output
            .success("Variables have been generated and saved to variables.tf");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::LISTS_ENDPOINT;
    use crate::traits::{FileSystem, MockFileSystem, MockHttpClient, MockOutput};
    use std::path::PathBuf;
    use std::sync::Arc;

    const CONFIG_YAML: &str = "\
contract_id: ctr_1
groups:
  - group_id: 111
    lists:
      - My List!
";

    const INVENTORY_JSON: &str = r#"{
        "content": [
            {
                "name": "My List!",
                "listId": "123",
                "type": "IP",
                "productionActivationStatus": "ACTIVE",
                "stagingActivationStatus": "INACTIVE",
                "items": [{"value": "1.2.3.4"}]
            }
        ]
    }"#;

    fn test_context(fs: Arc<MockFileSystem>, output: Arc<MockOutput>) -> Context {
        Context::test_with(fs, output)
    }

    #[test]
    fn test_generates_all_three_files() {
        let fs = Arc::new(MockFileSystem::new());
        let output = Arc::new(MockOutput::new());
        fs.write(&PathBuf::from("config.yaml"), CONFIG_YAML).unwrap();

        let http = MockHttpClient::new();
        http.stub(LISTS_ENDPOINT, 200, INVENTORY_JSON);

        let ctx = test_context(Arc::clone(&fs), Arc::clone(&output));
        let result = GenerateCommand::execute(
            &ctx,
            &http,
            Path::new("config.yaml"),
            Path::new("out"),
        );

        assert!(result.is_ok(), "{:?}", result);

        let main_tf = fs.get_file_contents(&PathBuf::from("out/main.tf")).unwrap();
        assert!(main_tf.starts_with("terraform {"));
        assert!(main_tf.contains("resource \"akamai_clientlist_list\" \"My_List_\""));
        assert!(main_tf.contains("resource \"akamai_clientlist_activation\" \"My_List__prod\""));

        let import_sh = fs.get_file_contents(&PathBuf::from("out/import.sh")).unwrap();
        assert!(import_sh.starts_with("terraform init\n"));
        assert!(import_sh.contains("terraform import akamai_clientlist_list.My_List_ 123"));

        let variables_tf = fs
            .get_file_contents(&PathBuf::from("out/variables.tf"))
            .unwrap();
        assert!(variables_tf.contains("variable \"edgerc_path\""));

        // one confirmation line per artifact
        assert_eq!(output.success_count(), 3);
    }

    #[test]
    fn test_missing_config_aborts_before_fetch() {
        let fs = Arc::new(MockFileSystem::new());
        let output = Arc::new(MockOutput::new());
        let http = MockHttpClient::new();

        let ctx = test_context(Arc::clone(&fs), output);
        let result = GenerateCommand::execute(
            &ctx,
            &http,
            Path::new("config.yaml"),
            Path::new("out"),
        );

        assert!(result.is_err());
        assert!(http.requested_paths().is_empty());
        assert!(fs.list_files().is_empty());
    }

    #[test]
    fn test_fetch_failure_writes_no_files() {
        let fs = Arc::new(MockFileSystem::new());
        let output = Arc::new(MockOutput::new());
        fs.write(&PathBuf::from("config.yaml"), CONFIG_YAML).unwrap();

        let http = MockHttpClient::new();
        http.stub(LISTS_ENDPOINT, 500, "{}");

        let ctx = test_context(Arc::clone(&fs), Arc::clone(&output));
        let result = GenerateCommand::execute(
            &ctx,
            &http,
            Path::new("config.yaml"),
            Path::new("out"),
        );

        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("500"), "{}", message);
        assert!(!fs.has_file(&PathBuf::from("out/main.tf")));
        assert_eq!(output.success_count(), 0);
    }

    #[test]
    fn test_join_miss_still_succeeds() {
        let fs = Arc::new(MockFileSystem::new());
        let output = Arc::new(MockOutput::new());
        fs.write(
            &PathBuf::from("config.yaml"),
            "\
contract_id: ctr_1
groups:
  - group_id: 111
    lists:
      - Unprovisioned List
",
        )
        .unwrap();

        let http = MockHttpClient::new();
        http.stub(LISTS_ENDPOINT, 200, r#"{"content": []}"#);

        let ctx = test_context(Arc::clone(&fs), output);
        let result = GenerateCommand::execute(
            &ctx,
            &http,
            Path::new("config.yaml"),
            Path::new("out"),
        );

        assert!(result.is_ok(), "{:?}", result);
        let main_tf = fs.get_file_contents(&PathBuf::from("out/main.tf")).unwrap();
        assert!(!main_tf.contains("Unprovisioned"));
    }
}
