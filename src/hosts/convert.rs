//! 와일드카드 호스트와 경로 규칙을 정규식 조각으로 변환합니다.

use regex_lite as regex;

use crate::hosts::{HostPath, MatchType};

/// `*.`로 시작하는 호스트를 정규식으로 변환합니다.
///
/// 첫 번째 라벨은 점이 없는 비어있지 않은 문자열과 매칭되고, 나머지는
/// 문자 그대로 매칭됩니다. 와일드카드가 아니면 입력을 그대로 돌려줍니다.
pub fn convert_wildcard_to_regex(hostname: &str, match_eol: bool) -> (String, bool) {
    let Some(rest) = hostname.strip_prefix("*.") else {
        return (hostname.to_string(), false);
    };
    let mut hostregex = format!("^[^.]+{}", regex::escape(&format!(".{}", rest)));
    if match_eol {
        hostregex.push('$');
    }
    (hostregex, true)
}

/// 경로 규칙을 매칭 방식에 맞는 정규식 조각으로 변환합니다.
///
/// # Panics
///
/// `MatchType::Empty`는 경로 규칙이 될 수 없으므로 호출 측의 계약 위반입니다.
pub fn convert_path_to_regex(host_path: &HostPath) -> String {
    match host_path.match_type {
        MatchType::Begin => regex::escape(&host_path.path),
        MatchType::Exact => format!("{}$", regex::escape(&host_path.path)),
        MatchType::Prefix => {
            let path = regex::escape(&host_path.path);
            if path.ends_with('/') {
                path
            } else {
                format!("{}(/.*)?$", path)
            }
        }
        MatchType::Regex => format!("{}$", host_path.path),
        MatchType::Empty => panic!("unsupported match type: {}", host_path.match_type),
    }
}
