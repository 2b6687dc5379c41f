use crate::core::sheet::HeaderLabels;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sheet read when no other document is configured.
pub const DEFAULT_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/1Bl5O42AEf0g2Yal4_SnmouacMNMf0ruApAEMBxnRBC0/edit?hl=ja&gid=0#gid=0";
pub const DEFAULT_WORKSHEET: &str = "勤務表";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Sheet,
    Csv,
}

/// Language of the column captions in terminal and export output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelLang {
    Ja,
    En,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_source")]
    pub source: SourceKind,
    #[serde(default = "default_sheet_url")]
    pub sheet_url: String,
    #[serde(default = "default_worksheet")]
    pub worksheet: String,
    #[serde(default)]
    pub csv_path: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_labels")]
    pub user_header_labels: Vec<String>,
    #[serde(default = "default_date_labels")]
    pub date_header_labels: Vec<String>,
    #[serde(default = "default_labels")]
    pub labels: LabelLang,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,
}

fn default_source() -> SourceKind {
    SourceKind::Sheet
}
fn default_sheet_url() -> String {
    DEFAULT_SHEET_URL.to_string()
}
fn default_worksheet() -> String {
    DEFAULT_WORKSHEET.to_string()
}
fn default_timeout() -> u64 {
    30
}
fn default_user_labels() -> Vec<String> {
    vec!["ユーザーID".to_string(), "user_id".to_string()]
}
fn default_date_labels() -> Vec<String> {
    vec!["日付".to_string(), "date".to_string()]
}
fn default_labels() -> LabelLang {
    LabelLang::Ja
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            sheet_url: default_sheet_url(),
            worksheet: default_worksheet(),
            csv_path: String::new(),
            timeout_secs: default_timeout(),
            user_header_labels: default_user_labels(),
            date_header_labels: default_date_labels(),
            labels: default_labels(),
            default_user: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendview")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendview")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendview.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does
    /// not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    pub fn header_labels(&self) -> HeaderLabels {
        HeaderLabels {
            user_id: self.user_header_labels.clone(),
            date: self.date_header_labels.clone(),
        }
    }
}
