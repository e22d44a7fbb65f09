use std::sync::Arc;

use log::{error, info};

use crate::domain::entities::cell::Row;
use crate::usecase::ports::source::{RowSource, SourceError};

pub struct EmployeeService {
    source: Arc<dyn RowSource>,
}

impl EmployeeService {
    pub fn new(source: Arc<dyn RowSource>) -> Self {
        Self { source }
    }

    pub fn source_name(&self) -> String {
        self.source.describe()
    }

    /// No retry: a failure is logged and handed back to the caller, which
    /// leaves the grid as it was.
    pub fn get_employees(&self) -> Result<Vec<Row>, SourceError> {
        match self.source.fetch_rows() {
            Ok(rows) => {
                info!("loaded {} employees from {}", rows.len(), self.source.describe());
                Ok(rows)
            }
            Err(err) => {
                error!("failed to load employees from {}: {err}", self.source.describe());
                Err(err)
            }
        }
    }
}
