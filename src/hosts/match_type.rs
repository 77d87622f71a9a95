use std::fmt;
use serde::{Deserialize, Serialize};

/// 호스트/경로 매칭 방식입니다.
///
/// 각 방식은 프록시의 map 조회 방식 하나에 대응하며, 정렬 규칙과
/// 대소문자 처리 규칙이 서로 다릅니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Prefix,
    Begin,
    Regex,
    Empty,
}

impl MatchType {
    /// 모든 매칭 방식 (고정 순서)
    pub const ALL: [MatchType; 5] = [
        MatchType::Exact,
        MatchType::Prefix,
        MatchType::Begin,
        MatchType::Regex,
        MatchType::Empty,
    ];

    /// 파일 이름 생성에 사용되는 태그
    pub fn tag(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Prefix => "prefix",
            MatchType::Begin => "begin",
            MatchType::Regex => "regex",
            MatchType::Empty => "empty",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            MatchType::Exact => 0,
            MatchType::Prefix => 1,
            MatchType::Begin => 2,
            MatchType::Regex => 3,
            MatchType::Empty => 4,
        }
    }
}

impl Default for MatchType {
    fn default() -> Self {
        MatchType::Begin
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for MatchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(MatchType::Exact),
            "prefix" => Ok(MatchType::Prefix),
            "begin" => Ok(MatchType::Begin),
            "regex" => Ok(MatchType::Regex),
            "empty" => Ok(MatchType::Empty),
            _ => Err(format!("Invalid match type: {}", s)),
        }
    }
}
