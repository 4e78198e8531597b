/// Fixed provider preamble that opens the generated main.tf. Independent of
/// any run's data.
pub fn provider_preamble() -> Vec<String> {
    [
        "terraform {",
        "  required_providers {",
        "    akamai = {",
        "      source  = \"akamai/akamai\"",
        "      version = \">= 3.5.0\"",
        "    }",
        "  }",
        "  required_version = \">= 0.13\"",
        "}",
        "",
        "provider \"akamai\" {",
        "  edgerc         = var.edgerc_path",
        "  config_section = var.config_section",
        "}",
        "",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Static contents of variables.tf
pub fn variables_file() -> String {
    [
        "variable \"edgerc_path\" {",
        "  type    = string",
        "  default = \"~/.edgerc\"",
        "}",
        "",
        "variable \"comments\" {",
        "  type    = string",
        "  default = \"updated via TF\"",
        "}",
        "",
        "variable \"email\" {",
        "  type    = list",
        "  default = []",
        "}",
        "",
        "variable \"config_section\" {",
        "  type    = string",
        "  default = \"default\"",
        "}",
        "",
        "variable \"env\" {",
        "  type    = string",
        "  default = \"staging\"",
        "}",
        "",
    ]
    .join("\n")
}
