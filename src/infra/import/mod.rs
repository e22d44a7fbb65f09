pub mod csv;
pub mod json;
pub mod xlsx;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::entities::cell::Row;
use crate::usecase::ports::source::{RowSource, SourceError};

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["csv", "json", "xlsx"];

/// Employee rows read from a local file, chosen by extension.
pub struct FileRowSource {
    pub path: PathBuf,
}

impl FileRowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

pub fn read_employee_file(path: &Path) -> Result<Vec<Row>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => csv::read_employee_csv(path),
        "json" => json::read_employee_json(path),
        "xlsx" => xlsx::read_employee_xlsx(path),
        other => anyhow::bail!(
            "unsupported file type `{other}` (expected one of {})",
            SUPPORTED_EXTENSIONS.join(", ")
        ),
    }
}

impl RowSource for FileRowSource {
    fn fetch_rows(&self) -> Result<Vec<Row>, SourceError> {
        read_employee_file(&self.path).map_err(|err| SourceError::Message(format!("{err:#}")))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
