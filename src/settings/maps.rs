use std::path::Path;

use serde::Deserialize;

use super::{parse_env_var, SettingsError};

#[derive(Debug, Clone, Deserialize)]
pub struct MapsSettings {
    /// map 파일이 기록될 디렉터리
    #[serde(default = "default_maps_dir")]
    pub dir: String,
}

impl MapsSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let settings = Self {
            dir: parse_env_var("INGRESS_MAPS_DIR", default_maps_dir)?,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.dir.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "maps.dir".to_string(),
                value: self.dir.clone(),
                reason: "map 디렉터리는 비어있을 수 없습니다".to_string(),
            });
        }
        Ok(())
    }

    /// map 이름을 디렉터리 아래 경로로 만듭니다. (`HostsMaps::add_map`의 입력)
    pub fn path(&self, name: &str) -> String {
        Path::new(&self.dir).join(name).to_string_lossy().into_owned()
    }
}

impl Default for MapsSettings {
    fn default() -> Self {
        Self {
            dir: default_maps_dir(),
        }
    }
}

fn default_maps_dir() -> String {
    "maps".to_string()
}
