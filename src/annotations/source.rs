use std::fmt;

use serde::Serialize;

use crate::backend::PathLink;

/// 설정 값을 선언한 리소스입니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Source {
    pub namespace: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Source {
    pub fn new(kind: impl Into<String>, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            kind: kind.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.full_name())
    }
}

/// 라우팅 단위 하나에서 키 하나에 대해 확정된 값입니다.
///
/// `source`가 `None`이면 전역 기본값에서 온 값입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigValue {
    pub source: Option<Source>,
    pub value: String,
}

impl ConfigValue {
    pub fn new(source: Option<Source>, value: impl Into<String>) -> Self {
        Self {
            source,
            value: value.into(),
        }
    }

    pub fn from_default(value: impl Into<String>) -> Self {
        Self::new(None, value)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// 잘못된 값은 `false`
    pub fn as_bool(&self) -> bool {
        parse_bool(&self.value).unwrap_or(false)
    }

    /// 잘못된 값은 `0`
    pub fn as_int(&self) -> i64 {
        self.value.parse().unwrap_or(0)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// 받아들여진 할당 하나 (키별 감사 기록)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Map {
    pub source: Option<Source>,
    pub link: PathLink,
    pub value: String,
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{} {}={}", source, self.link, self.value),
            None => write!(f, "default {}={}", self.link, self.value),
        }
    }
}

/// 불리언 문자열을 해석합니다. (`1`, `t`, `true`, `0`, `f`, `false` 등)
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_display() {
        let source = Source::new("ingress", "default", "app");
        assert_eq!(source.full_name(), "default/app");
        assert_eq!(source.to_string(), "ingress 'default/app'");
    }

    #[test]
    fn test_config_value_conversions() {
        assert!(ConfigValue::from_default("true").as_bool());
        assert!(ConfigValue::from_default("T").as_bool());
        assert!(!ConfigValue::from_default("yes").as_bool());
        assert_eq!(ConfigValue::from_default("42").as_int(), 42);
        assert_eq!(ConfigValue::from_default("4x").as_int(), 0);
        assert_eq!(ConfigValue::from_default("3000000000").as_int(), 3_000_000_000);
        assert_eq!(ConfigValue::from_default("-9000000000").as_int(), -9_000_000_000);
        assert!(ConfigValue::default().is_empty());
    }
}
