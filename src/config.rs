//! 应用配置管理模块
//! 集中管理所有配置项，提供默认值和配置验证

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 主配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub normalize: NormalizeConfig,
    pub dataset: DatasetConfig,
}

/// 原点平移之后执行的变换
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NormalizeMode {
    /// 按路径长度等距重采样
    Resample,
    /// 按下标抽稀，或随机重复补齐
    #[default]
    FixedSize,
    /// 按到质心的距离排序，长度不变
    CentroidSort,
}

impl std::str::FromStr for NormalizeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "resample" => Ok(Self::Resample),
            "fixed_size" | "fixed" => Ok(Self::FixedSize),
            "centroid_sort" | "centroid" => Ok(Self::CentroidSort),
            other => Err(format!("unknown normalize mode: {}", other)),
        }
    }
}

/// 归一化配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NormalizeConfig {
    pub mode: NormalizeMode,
    pub target_points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub origin_shift: bool,
}

/// 数据集输出格式
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BundleFormat {
    Json,
    Csv,
}

impl BundleFormat {
    /// 根据输出文件扩展名推断，非 `.csv` 一律为 JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

/// 数据集配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    pub root: String,
    pub extension: String,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<BundleFormat>,
    pub skip_invalid: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            mode: NormalizeMode::FixedSize,
            target_points: 128,
            seed: None,
            origin_shift: true,
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            root: "gesture_dataset_RAW".to_string(),
            extension: "json".to_string(),
            output: "gesture_dataset.json".to_string(),
            format: None,
            skip_invalid: false,
        }
    }
}

impl DatasetConfig {
    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.root)
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output)
    }

    /// 优先使用显式配置的格式，否则按 `output` 推断
    pub fn bundle_format(&self) -> BundleFormat {
        self.format
            .unwrap_or_else(|| BundleFormat::from_path(&self.output_path()))
    }
}

impl AppConfig {
    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::IoError)?;

        let config: AppConfig = toml::from_str(&content).map_err(ConfigError::ParseError)?;

        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::SerializeError)?;

        std::fs::write(path, content).map_err(ConfigError::IoError)?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.normalize.target_points == 0 && self.normalize.mode != NormalizeMode::CentroidSort {
            return Err(ConfigError::ValidationError(
                "target_points must be positive".to_string(),
            ));
        }

        if self.dataset.extension.is_empty() || self.dataset.extension.starts_with('.') {
            return Err(ConfigError::ValidationError(
                "extension must be non-empty and given without a leading dot".to_string(),
            ));
        }

        if self.dataset.output.is_empty() {
            return Err(ConfigError::ValidationError(
                "output path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(toml::de::Error),
    #[error("Serialize error: {0}")]
    SerializeError(toml::ser::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
