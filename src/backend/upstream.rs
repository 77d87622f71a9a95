use serde::Serialize;

use crate::backend::{BackendPath, PathLink};

/// 업스트림 서비스 하나와 그 서비스가 처리하는 라우팅 단위 목록입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Backend {
    pub namespace: String,
    pub name: String,
    pub port: String,
    pub paths: Vec<BackendPath>,
}

impl Backend {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            port: port.into(),
            paths: Vec::new(),
        }
    }

    /// `<namespace>_<name>_<port>` 형식의 식별자
    pub fn id(&self) -> String {
        format!("{}_{}_{}", self.namespace, self.name, self.port)
    }

    /// 라우팅 단위를 추가합니다. 이미 선언된 링크면 기존 경로를 돌려줍니다.
    pub fn add_path(&mut self, link: PathLink) -> &BackendPath {
        if let Some(pos) = self.paths.iter().position(|p| p.link == link) {
            return &self.paths[pos];
        }
        let id = format!("path{:02}", self.paths.len() + 1);
        self.paths.push(BackendPath { id, link });
        let last = self.paths.len() - 1;
        &self.paths[last]
    }

    pub fn find_backend_path(&self, link: &PathLink) -> Option<&BackendPath> {
        self.paths.iter().find(|p| &p.link == link)
    }

    pub fn has_path(&self, link: &PathLink) -> bool {
        self.find_backend_path(link).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_path_assigns_ids() {
        let mut backend = Backend::new("default", "app", "8080");
        assert_eq!(backend.add_path(PathLink::new("d.local", "/")).id, "path01");
        assert_eq!(backend.add_path(PathLink::new("d.local", "/api")).id, "path02");
        assert_eq!(backend.add_path(PathLink::new("d.local", "/")).id, "path01");
        assert_eq!(backend.paths.len(), 2);
        assert_eq!(backend.id(), "default_app_8080");
    }

    #[test]
    fn test_find_backend_path() {
        let mut backend = Backend::new("default", "app", "8080");
        backend.add_path(PathLink::new("d.local", "/api"));
        let found = backend.find_backend_path(&PathLink::new("d.local", "/api"));
        assert_eq!(found.map(|p| p.path()), Some("/api"));
        assert!(!backend.has_path(&PathLink::new("d.local", "/")));
    }
}
