use std::{env, fs, path::Path};

use serde::Deserialize;
use tracing::debug;

use crate::annotations::{MapBuilder, Validators};

mod annotations;
mod env_var;
mod error;
pub mod logging;
mod maps;

pub use annotations::AnnotationSettings;
pub use env_var::parse_env_var;
pub use error::SettingsError;
pub use logging::{LogFormat, LogOutput, LogSettings};
pub use maps::MapsSettings;

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    // 어노테이션 설정
    #[serde(default)]
    pub annotations: AnnotationSettings,

    // map 파일 설정
    #[serde(default)]
    pub maps: MapsSettings,

    // 로깅 설정
    #[serde(default)]
    pub logging: LogSettings,
}

impl Settings {
    /// `INGRESS_CONFIG_FILE`이 있으면 TOML 파일에서, 없으면 환경 변수에서 읽습니다.
    pub fn load() -> Result<Self> {
        if let Ok(config_path) = env::var("INGRESS_CONFIG_FILE") {
            Self::from_toml_file(&config_path)
        } else {
            Self::from_env()
        }
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).map_err(|e| SettingsError::FileError {
            path: path.as_ref().to_string_lossy().to_string(),
            error: e,
        })?;

        let settings = Self::from_toml_str(&content)?;
        debug!(
            path = %path.as_ref().display(),
            defaults = settings.annotations.defaults.len(),
            "설정 파일 로드"
        );
        Ok(settings)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| SettingsError::ParseError { source: e })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_env() -> Result<Self> {
        let settings = Self {
            annotations: AnnotationSettings::from_env()?,
            maps: MapsSettings::from_env()?,
            logging: LogSettings::from_env()?,
        };

        settings.validate()?;
        Ok(settings)
    }

    /// 설정 유효성 검증
    pub fn validate(&self) -> Result<()> {
        self.annotations.validate()?;
        self.maps.validate()?;
        Ok(())
    }

    /// 어노테이션 설정으로 `MapBuilder`를 만듭니다.
    pub fn map_builder(&self, validators: Validators) -> MapBuilder {
        MapBuilder::new(
            self.annotations.prefix.clone(),
            self.annotations.defaults.clone(),
        )
        .with_validators(validators)
    }
}
