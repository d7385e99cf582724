//! CLI command execution

use super::commands::{Cli, Commands};
use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::parts::{Parts, PartsCatalog, QuotaCatalog};
use crate::resource::{ListRequest, ResourceSpec};
use crate::types::JsonValue;
use serde_json::json;

/// Executes parsed CLI commands against an [`ApiClient`]
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::List {
                resource,
                ids,
                parent,
                mine,
                parts,
                count,
                page_size,
                page_token,
                single_page,
            } => {
                let client = ApiClient::new(self.load_config()?)?;

                let mut request = ListRequest::new(resource)?;
                if !ids.is_empty() {
                    request = request.ids(ids.clone());
                }
                if let Some(parent) = parent {
                    request = request.parent(parent);
                }
                if *mine {
                    request = request.mine();
                }
                if let Some(parts) = parts {
                    request = request.parts(parts.as_str());
                }
                if let Some(size) = page_size {
                    request = request.page_size(*size);
                }
                if let Some(token) = page_token {
                    request = request.page_token(token);
                }

                let output = if *single_page || page_token.is_some() {
                    let envelope = client.list(&request).await?;
                    serde_json::to_value(envelope)?
                } else {
                    let result = client.collect(&request, *count).await?;
                    json!({
                        "kind": result.meta.kind,
                        "pageInfo": result.meta.page_info,
                        "nextPageToken": result.meta.next_page_token,
                        "pages": result.pages,
                        "items": result.items,
                    })
                };
                self.print(&output)
            }

            Commands::Parts { resource } => {
                let allowed = PartsCatalog::builtin()
                    .validate(resource, None)?
                    .split(',')
                    .map(str::to_string)
                    .collect::<Vec<_>>();
                self.print(&json!({ "resource": resource, "parts": allowed }))
            }

            Commands::Quota { resource, parts } => {
                let requested = parts.as_deref().map(Parts::from);
                let rendered = PartsCatalog::builtin().validate(resource, requested.as_ref())?;
                let estimate =
                    QuotaCatalog::builtin().estimate(&Parts::from(rendered.as_str()));
                self.print(&json!({
                    "resource": resource,
                    "parts": rendered,
                    "estimatedQuota": estimate,
                }))
            }

            Commands::Resources => {
                let resources: Vec<JsonValue> = ResourceSpec::all()
                    .map(|spec| {
                        json!({
                            "kind": spec.kind,
                            "maxPageSize": spec.max_page_size,
                            "requiresFilter": spec.requires_filter,
                        })
                    })
                    .collect();
                self.print(&json!({ "resources": resources }))
            }
        }
    }

    /// Load the client configuration from file, environment, and flags
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_yaml_file(path)?,
            None => ClientConfig::from_env()?,
        };
        if let Some(key) = &self.cli.api_key {
            config.api_key = Some(key.clone());
        }
        config.validate()
    }

    fn print(&self, value: &JsonValue) -> Result<()> {
        let rendered = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{rendered}");
        Ok(())
    }
}
