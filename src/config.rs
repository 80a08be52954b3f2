use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::format::CurrencySettings;
use crate::validation::ValidationPolicy;
use crate::valuation::CompoundingFrequency;

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 표시 로케일. "auto"면 시스템 로케일을 따른다.
    pub locale: String,
    /// 복리 주기를 입력하지 않았을 때 사용할 값. 없으면 연 복리.
    pub default_frequency: Option<CompoundingFrequency>,
    /// true면 명목 이율 0%를 허용한다.
    pub allow_zero_interest_rate: bool,
    pub currency: CurrencySettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "auto".to_string(),
            default_frequency: None,
            allow_zero_interest_rate: false,
            currency: CurrencySettings::default(),
        }
    }
}

impl Config {
    pub fn validation_policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            allow_zero_interest_rate: self.allow_zero_interest_rate,
        }
    }

    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(DEFAULT_CONFIG_PATH)
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)?;
        Ok(())
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(DEFAULT_CONFIG_PATH)
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본 설정을 그 경로에 만든다.
pub fn load_or_default_at(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        tracing::info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}
