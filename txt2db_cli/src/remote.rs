use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use txt2db_core::{CommandResponse, TableSchema};

use crate::backend::Backend;

#[derive(Debug, Serialize)]
struct ExecuteRequest<'a> {
    command: &'a str,
}

#[derive(Debug, Deserialize)]
struct TablesResponse {
    tables: Vec<String>,
}

/// Forwards commands to a txt2db server over HTTP.
pub struct RemoteBackend {
    client: Client,
    base_url: String,
}

impl RemoteBackend {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Backend for RemoteBackend {
    fn execute(&mut self, command: &str) -> Result<CommandResponse> {
        debug!(command, "sending command to server");
        // Engine errors come back as 400 with the same JSON body.
        let response = self
            .client
            .post(self.url("/api/execute"))
            .json(&ExecuteRequest { command })
            .send()
            .with_context(|| format!("failed to reach {}", self.base_url))?;
        response
            .json::<CommandResponse>()
            .context("server returned an unreadable response")
    }

    fn tables(&mut self) -> Result<Vec<String>> {
        let body: TablesResponse = self
            .client
            .get(self.url("/api/tables"))
            .send()?
            .error_for_status()?
            .json()?;
        Ok(body.tables)
    }

    fn schema(&mut self, table: &str) -> Result<Option<TableSchema>> {
        let schemas: Vec<TableSchema> = self
            .client
            .get(self.url("/api/schemas"))
            .send()?
            .error_for_status()?
            .json()?;
        Ok(schemas.into_iter().find(|s| s.name == table))
    }

    fn reset(&mut self) -> Result<()> {
        self.client
            .post(self.url("/api/reset"))
            .send()?
            .error_for_status()?;
        Ok(())
    }
}
