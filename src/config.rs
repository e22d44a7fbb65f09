use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::domain::entities::grid::{DEFAULT_NO_DATA_MESSAGE, DEFAULT_PAGE_SIZE_OPTIONS};

pub const DATA_PATH_ENV: &str = "EMPLOYEE_GRID_DATA";
const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_DATA_FILE_NAME: &str = "employees.json";

/// Demo settings, read from `config.json` in the project config directory.
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_path: Option<PathBuf>,
    pub page_size_options: Vec<usize>,
    pub vertical_scroll_offset_in_rows: Option<usize>,
    pub no_data_message: String,
    /// Empty searches every column; one name searches that column; two or
    /// more search the first two.
    pub search_columns: Vec<String>,
    /// chrono pattern for date cells, e.g. `%Y-%m-%d`.
    pub date_format: Option<String>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            vertical_scroll_offset_in_rows: Some(10),
            no_data_message: DEFAULT_NO_DATA_MESSAGE.to_string(),
            search_columns: Vec::new(),
            date_format: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse config")
    }

    /// Missing file means defaults; a malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&default_config_path()?)?;
        if let Some(path) = std::env::var_os(DATA_PATH_ENV).filter(|v| !v.is_empty()) {
            config.data_path = Some(PathBuf::from(path));
        }
        Ok(config)
    }

    /// Configured data file, or `employees.json` in the data directory.
    pub fn resolved_data_path(&self) -> Result<PathBuf> {
        match &self.data_path {
            Some(path) => Ok(path.clone()),
            None => Ok(project_dirs()?.data_local_dir().join(DEFAULT_DATA_FILE_NAME)),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "employee-grid")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
