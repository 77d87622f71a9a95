use std::cell::OnceCell;
use std::cmp::Ordering;
use std::fmt;

use regex_lite as regex;
use serde::Serialize;
use tracing::debug;

use crate::hosts::convert::{convert_path_to_regex, convert_wildcard_to_regex};
use crate::hosts::{HostAliasConfig, HostPath, HostsMapError, MatchType};

/// 라우팅 테이블 한 행입니다.
///
/// `key`는 정렬 기준이자 프록시의 map 파일에 그대로 기록되는 조회 키입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostsMapEntry {
    #[serde(skip)]
    hostname: String,
    #[serde(skip)]
    path: String,
    pub key: String,
    pub value: String,
}

impl HostsMapEntry {
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for HostsMapEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.value)
    }
}

/// 출력 이름 하나에 묶인 라우팅 테이블입니다.
///
/// 매칭 방식별로 항목을 따로 보관하며, 각 그룹은 삽입될 때마다 해당
/// 방식의 우선순위 규칙에 따라 다시 정렬됩니다.
#[derive(Debug)]
pub struct HostsMap {
    basename: String,
    values: [Vec<HostsMapEntry>; 5],
    filenames: [OnceCell<String>; 5],
}

impl HostsMap {
    fn new(basename: String) -> Self {
        Self {
            basename,
            values: Default::default(),
            filenames: Default::default(),
        }
    }

    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// 호스트 이름만으로 구성된 규칙을 추가합니다.
    pub fn add_hostname_mapping(&mut self, hostname: &str, target: &str) {
        let (hostname, has_wildcard) = convert_wildcard_to_regex(hostname, true);
        if has_wildcard {
            self.add_target(&hostname, "", target, MatchType::Regex);
        } else {
            self.add_target(&hostname, "", target, MatchType::Exact);
        }
    }

    /// 호스트와 경로로 구성된 규칙을 추가합니다.
    ///
    /// 와일드카드 호스트의 경로는 원래 매칭 방식과 관계없이 정규식으로
    /// 변환되어 Regex 그룹에 들어갑니다. 따라서 같은 매칭 방식의
    /// 일반 호스트 규칙보다 항상 우선순위가 낮습니다.
    pub fn add_hostname_path_mapping(&mut self, hostname: &str, host_path: &HostPath, target: &str) {
        let (mut hostname, has_wildcard) = convert_wildcard_to_regex(hostname, false);
        let mut path = host_path.path.clone();
        let mut match_type = host_path.match_type;
        // TODO: give wildcard hostnames their own per-match-type groups so
        // their paths stop losing precedence to the Regex group.
        if has_wildcard {
            path = convert_path_to_regex(host_path);
            match_type = MatchType::Regex;
        } else if host_path.match_type == MatchType::Regex {
            hostname = format!("^{}", regex::escape(&hostname));
            path = format!("{}$", host_path.path);
        }
        self.add_target(&hostname, &path, target, match_type);
    }

    /// 호스트 별칭에 대한 규칙을 추가합니다.
    pub fn add_alias_path_mapping(&mut self, alias: &HostAliasConfig, host_path: &HostPath, target: &str) {
        if !alias.alias_name.is_empty() {
            self.add_hostname_path_mapping(&alias.alias_name, host_path, target);
        }
        if !alias.alias_regex.is_empty() {
            let path = convert_path_to_regex(host_path);
            self.add_target(&format!("^{}", alias.alias_regex), &path, target, MatchType::Regex);
        }
    }

    /// 호스트/경로 의미가 없는 단순 목록 항목을 추가합니다.
    pub fn append_item(&mut self, item: &str) {
        self.values[MatchType::Empty.index()].push(HostsMapEntry {
            hostname: String::new(),
            path: String::new(),
            key: item.to_string(),
            value: String::new(),
        });
    }

    fn add_target(&mut self, hostname: &str, path: &str, target: &str, match_type: MatchType) {
        let hostname = hostname.to_lowercase();
        // Begin은 경로 대소문자를 구분하지 않는 유일한 방식
        let path = if match_type == MatchType::Begin {
            path.to_lowercase()
        } else {
            path.to_string()
        };
        debug!(
            map = %self.basename,
            match_type = %match_type,
            hostname = %hostname,
            path = %path,
            target = %target,
            "라우팅 항목 추가"
        );
        let entry = HostsMapEntry {
            key: format!("{}{}", hostname, path),
            hostname,
            path,
            value: target.to_string(),
        };
        let values = &mut self.values[match_type.index()];
        values.push(entry);
        if match_type == MatchType::Regex {
            values.sort_by(compare_regex);
        } else {
            values.sort_by(compare_host_path);
        }
    }

    /// 항목이 있는 매칭 방식 목록 (고정 순서)
    pub fn matches(&self) -> Vec<MatchType> {
        MatchType::ALL
            .iter()
            .copied()
            .filter(|m| self.has(*m))
            .collect()
    }

    pub fn values(&self, match_type: MatchType) -> &[HostsMapEntry] {
        &self.values[match_type.index()]
    }

    pub fn has_host(&self) -> bool {
        self.values.iter().any(|values| !values.is_empty())
    }

    pub fn has(&self, match_type: MatchType) -> bool {
        !self.values[match_type.index()].is_empty()
    }

    pub fn has_begin(&self) -> bool {
        self.has(MatchType::Begin)
    }

    pub fn has_exact(&self) -> bool {
        self.has(MatchType::Exact)
    }

    pub fn has_prefix(&self) -> bool {
        self.has(MatchType::Prefix)
    }

    pub fn has_regex(&self) -> bool {
        self.has(MatchType::Regex)
    }

    /// 매칭 방식별 출력 파일 이름을 반환합니다.
    ///
    /// 기본 이름의 마지막 경로 구성 요소에서 첫 번째 `.` 앞에 `__<태그>`를
    /// 삽입하며, Empty는 기본 이름을 그대로 사용합니다. 처음 계산한 값은
    /// 캐시됩니다.
    pub fn filename(&self, match_type: MatchType) -> Result<&str, HostsMapError> {
        if !self.has(match_type) {
            return Err(HostsMapError::EmptyContent {
                basename: self.basename.clone(),
                match_type,
            });
        }
        let filename = self.filenames[match_type.index()].get_or_init(|| {
            if match_type == MatchType::Empty {
                self.basename.clone()
            } else {
                tagged_filename(&self.basename, match_type)
            }
        });
        Ok(filename)
    }

    pub fn filename_begin(&self) -> Result<&str, HostsMapError> {
        self.filename(MatchType::Begin)
    }

    pub fn filename_exact(&self) -> Result<&str, HostsMapError> {
        self.filename(MatchType::Exact)
    }

    pub fn filename_prefix(&self) -> Result<&str, HostsMapError> {
        self.filename(MatchType::Prefix)
    }

    pub fn filename_regex(&self) -> Result<&str, HostsMapError> {
        self.filename(MatchType::Regex)
    }

    pub fn filename_empty(&self) -> Result<&str, HostsMapError> {
        self.filename(MatchType::Empty)
    }
}

// 마지막 경로 구성 요소의 첫 번째 `.` 앞에 태그를 넣음
fn tagged_filename(basename: &str, match_type: MatchType) -> String {
    let file_start = basename.rfind('/').map_or(0, |pos| pos + 1);
    let tag = format!("__{}", match_type.tag());
    match basename[file_start..].find('.') {
        Some(dot) => {
            let (head, ext) = basename.split_at(file_start + dot);
            format!("{}{}{}", head, tag, ext)
        }
        None => format!("{}{}", basename, tag),
    }
}

// 긴 정규식(더 구체적인 규칙)이 먼저
fn compare_regex(e1: &HostsMapEntry, e2: &HostsMapEntry) -> Ordering {
    e2.key
        .len()
        .cmp(&e1.key.len())
        .then_with(|| e1.key.cmp(&e2.key))
}

// 호스트 이름은 오름차순, 같은 호스트 안에서는 경로 내림차순
fn compare_host_path(e1: &HostsMapEntry, e2: &HostsMapEntry) -> Ordering {
    e1.hostname
        .cmp(&e2.hostname)
        .then_with(|| e2.path.cmp(&e1.path))
}

/// 한 번의 해석 과정에서 만들어지는 라우팅 테이블 모음입니다.
#[derive(Debug, Default)]
pub struct HostsMaps {
    items: Vec<HostsMap>,
}

impl HostsMaps {
    pub fn new() -> Self {
        Self::default()
    }

    /// 출력 이름에 묶인 빈 라우팅 테이블을 새로 만듭니다.
    pub fn add_map(&mut self, basename: impl Into<String>) -> &mut HostsMap {
        self.items.push(HostsMap::new(basename.into()));
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    pub fn items(&self) -> &[HostsMap] {
        &self.items
    }
}
