use anyhow::Result;
use txt2db_core::{CommandResponse, Database, TableSchema};

/// Where commands are executed: an in-process engine or a remote server.
pub trait Backend {
    fn execute(&mut self, command: &str) -> Result<CommandResponse>;
    fn tables(&mut self) -> Result<Vec<String>>;
    fn schema(&mut self, table: &str) -> Result<Option<TableSchema>>;
    fn reset(&mut self) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct EmbeddedBackend {
    db: Database,
}

impl Backend for EmbeddedBackend {
    fn execute(&mut self, command: &str) -> Result<CommandResponse> {
        Ok(self.db.execute_response(command))
    }

    fn tables(&mut self) -> Result<Vec<String>> {
        Ok(self.db.table_names())
    }

    fn schema(&mut self, table: &str) -> Result<Option<TableSchema>> {
        Ok(self.db.schema(table))
    }

    fn reset(&mut self) -> Result<()> {
        self.db.reset();
        Ok(())
    }
}
