use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::annotations::ConfigValue;
use crate::backend::BackendPaths;

/// 키 → 값 매핑 (키 순서로 정렬됨)
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// 같은 설정을 공유하는 라우팅 단위 묶음입니다.
///
/// 렌더링 단계에서 묶음마다 `paths` 멤버십으로 보호되는 규칙 블록 하나가
/// 만들어집니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackendConfig {
    pub paths: BackendPaths,
    pub config: ConfigMap,
}

impl BackendConfig {
    /// 값만 비교합니다. 값을 선언한 리소스는 비교하지 않습니다.
    pub fn config_equals(&self, other: &ConfigMap) -> bool {
        self.config.len() == other.len()
            && self.config.iter().all(|(key, value)| {
                other
                    .get(key)
                    .map_or(false, |other_value| other_value.value == value.value)
            })
    }

    pub fn get(&self, key: &str) -> ConfigValue {
        self.config.get(key).cloned().unwrap_or_default()
    }
}

impl fmt::Display for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let paths: Vec<String> = self.paths.items.iter().map(|p| p.link.to_string()).collect();
        let config: Vec<String> = self
            .config
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        write!(f, "[{}] {{{}}}", paths.join(","), config.join(","))
    }
}
