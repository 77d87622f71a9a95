use std::collections::HashMap;

use serde::Deserialize;

use super::{parse_env_var, SettingsError};

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationSettings {
    /// 어노테이션 키 접두사
    #[serde(default = "default_annotation_prefix")]
    pub prefix: String,

    /// 어디에도 선언되지 않은 키의 전역 기본값
    #[serde(default)]
    pub defaults: HashMap<String, String>,
}

impl AnnotationSettings {
    pub fn from_env() -> Result<Self> {
        let settings = Self {
            prefix: parse_env_var("INGRESS_ANNOTATION_PREFIX", default_annotation_prefix)?,
            defaults: HashMap::new(),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "annotations.prefix".to_string(),
                value: self.prefix.clone(),
                reason: "어노테이션 접두사는 비어있을 수 없습니다".to_string(),
            });
        }

        if !self.prefix.ends_with('/') && !self.prefix.ends_with('.') {
            return Err(SettingsError::InvalidValue {
                field: "annotations.prefix".to_string(),
                value: self.prefix.clone(),
                reason: "어노테이션 접두사는 '/' 또는 '.'으로 끝나야 합니다".to_string(),
            });
        }

        if let Some(key) = self.defaults.keys().find(|key| key.trim().is_empty()) {
            return Err(SettingsError::InvalidValue {
                field: "annotations.defaults".to_string(),
                value: key.clone(),
                reason: "기본값 키는 비어있을 수 없습니다".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for AnnotationSettings {
    fn default() -> Self {
        Self {
            prefix: default_annotation_prefix(),
            defaults: HashMap::new(),
        }
    }
}

fn default_annotation_prefix() -> String {
    "ingress.kubernetes.io/".to_string()
}
