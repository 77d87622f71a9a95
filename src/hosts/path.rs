use serde::{Deserialize, Serialize};

use crate::hosts::MatchType;

/// 호스트에 선언된 경로 규칙 하나입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostPath {
    pub path: String,
    #[serde(rename = "match", default)]
    pub match_type: MatchType,
}

impl HostPath {
    pub fn new(path: impl Into<String>, match_type: MatchType) -> Self {
        Self {
            path: path.into(),
            match_type,
        }
    }

    pub fn exact(path: impl Into<String>) -> Self {
        Self::new(path, MatchType::Exact)
    }

    pub fn prefix(path: impl Into<String>) -> Self {
        Self::new(path, MatchType::Prefix)
    }

    pub fn begin(path: impl Into<String>) -> Self {
        Self::new(path, MatchType::Begin)
    }

    pub fn regex(path: impl Into<String>) -> Self {
        Self::new(path, MatchType::Regex)
    }
}

/// 호스트의 별칭 설정입니다.
///
/// `alias_name`은 일반 호스트 이름처럼, `alias_regex`는 정규식 그대로 사용됩니다.
/// 둘 다 비어 있으면 별칭이 없는 것으로 취급합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostAliasConfig {
    #[serde(default)]
    pub alias_name: String,
    #[serde(default)]
    pub alias_regex: String,
}

impl HostAliasConfig {
    pub fn name(alias_name: impl Into<String>) -> Self {
        Self {
            alias_name: alias_name.into(),
            alias_regex: String::new(),
        }
    }

    pub fn regex(alias_regex: impl Into<String>) -> Self {
        Self {
            alias_name: String::new(),
            alias_regex: alias_regex.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.alias_name.is_empty() && self.alias_regex.is_empty()
    }
}
