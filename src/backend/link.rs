use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::hosts::MatchType;

/// 백엔드에 속한 (호스트, 경로) 라우팅 단위의 식별자입니다.
///
/// 기본값(빈 호스트와 빈 경로)은 "실제 라우팅 단위가 아님"을 의미하며
/// 전역 기본값을 표현할 때 사용됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PathLink {
    hostname: String,
    path: String,
    #[serde(rename = "match")]
    match_type: MatchType,
}

impl PathLink {
    pub fn new(hostname: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_match(hostname, path, MatchType::default())
    }

    pub fn with_match(hostname: impl Into<String>, path: impl Into<String>, match_type: MatchType) -> Self {
        Self {
            hostname: hostname.into(),
            path: path.into(),
            match_type,
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    pub fn is_empty(&self) -> bool {
        self.hostname.is_empty() && self.path.is_empty()
    }

    /// 호스트 이름 오름차순으로 비교하고, 같은 호스트 안에서는 경로를
    /// 비교합니다. `reverse_path`가 참이면 경로를 내림차순으로 비교해
    /// 더 구체적인 경로가 먼저 오게 합니다.
    pub fn less(&self, other: &PathLink, reverse_path: bool) -> bool {
        self.compare(other, reverse_path) == Ordering::Less
    }

    pub fn compare(&self, other: &PathLink, reverse_path: bool) -> Ordering {
        if self.hostname != other.hostname {
            return self.hostname.cmp(&other.hostname);
        }
        let by_path = if reverse_path {
            other.path.cmp(&self.path)
        } else {
            self.path.cmp(&other.path)
        };
        by_path.then_with(|| self.match_type.cmp(&other.match_type))
    }
}

impl fmt::Display for PathLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hostname.is_empty() {
            write!(f, "<default>{}", self.path)
        } else {
            write!(f, "{}{}", self.hostname, self.path)
        }
    }
}
