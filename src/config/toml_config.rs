use crate::config::history_file::load_history_csv;
use crate::domain::model::{HistoryEntry, Voyage};
use crate::domain::ports::RatingInputProvider;
use crate::utils::error::{RatingError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub voyage: Voyage,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    pub history_file: Option<HistoryFileConfig>,
    pub output: Option<OutputConfig>,

    /// 設定檔所在目錄，用來解析相對路徑
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryFileConfig {
    pub path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub explain: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(RatingError::IoError)?;
        let mut config = Self::from_toml_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RatingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CAPTAIN_HISTORY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RatingError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.voyage.validate()?;

        for entry in &self.history {
            entry.validate()?;
        }

        if let Some(file) = &self.history_file {
            validate_non_empty_string("history_file.path", &file.path)?;
        }

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validate_one_of("output.format", format, &OUTPUT_FORMATS)?;
        }

        Ok(())
    }

    pub fn history_file_path(&self) -> Option<PathBuf> {
        let file = self.history_file.as_ref()?;
        let path = PathBuf::from(&file.path);
        match &self.base_dir {
            Some(base) if path.is_relative() => Some(base.join(path)),
            _ => Some(path),
        }
    }

    pub fn set_history_file(&mut self, path: impl Into<String>) {
        self.history_file = Some(HistoryFileConfig { path: path.into() });
    }

    pub fn output_format(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .unwrap_or("text")
    }

    pub fn explain(&self) -> bool {
        self.output.as_ref().and_then(|o| o.explain).unwrap_or(false)
    }
}

impl RatingInputProvider for TomlConfig {
    fn voyage(&self) -> Result<Voyage> {
        Ok(self.voyage.clone())
    }

    /// 內嵌紀錄在前，歷史檔案的紀錄接在後面
    fn history(&self) -> Result<Vec<HistoryEntry>> {
        let mut history = self.history.clone();
        if let Some(path) = self.history_file_path() {
            history.extend(load_history_csv(path)?);
        }
        Ok(history)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
