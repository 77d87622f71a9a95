use std::fmt;

use crate::hosts::MatchType;

/// 라우팅 테이블 조회 관련 에러입니다.
#[derive(Debug, PartialEq)]
pub enum HostsMapError {
    /// 해당 매칭 방식의 항목이 하나도 없음
    EmptyContent {
        basename: String,
        match_type: MatchType,
    },
}

impl fmt::Display for HostsMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostsMapError::EmptyContent { basename, match_type } =>
                write!(f, "파일 내용이 비어 있음: {} ({})", basename, match_type),
        }
    }
}

impl std::error::Error for HostsMapError {}
