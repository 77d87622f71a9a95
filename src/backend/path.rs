use serde::Serialize;

use crate::backend::PathLink;
use crate::hosts::MatchType;

/// 백엔드가 서비스하는 라우팅 단위 하나입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendPath {
    pub id: String,
    pub link: PathLink,
}

impl BackendPath {
    pub fn hostname(&self) -> &str {
        self.link.hostname()
    }

    pub fn path(&self) -> &str {
        self.link.path()
    }

    pub fn match_type(&self) -> MatchType {
        self.link.match_type()
    }
}

/// 같은 설정을 공유하는 `BackendPath` 묶음입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BackendPaths {
    pub items: Vec<BackendPath>,
}

impl BackendPaths {
    pub fn new(path: BackendPath) -> Self {
        Self { items: vec![path] }
    }

    pub fn add(&mut self, path: BackendPath) {
        self.items.push(path);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 묶음 안에서 가장 앞서는 링크 (그룹 정렬 기준)
    pub fn min_link(&self) -> Option<&PathLink> {
        self.items
            .iter()
            .map(|p| &p.link)
            .min_by(|l1, l2| l1.compare(l2, false))
    }
}
