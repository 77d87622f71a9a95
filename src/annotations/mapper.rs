use std::collections::HashMap;

use tracing::{debug, warn};

use crate::annotations::{
    BackendConfig, ConfigMap, ConfigValue, Map, Source, ValidateContext, Validators,
};
use crate::backend::{Backend, BackendPath, BackendPaths, PathLink};

/// 백엔드 경로별 설정을 마지막으로 바꿀 수 있는 훅입니다.
///
/// `None`을 돌려주면 "변경 없음"이 아니라 빈 설정으로 취급됩니다.
pub type ConfigOverwrite<'a> = dyn Fn(&BackendPath, &ConfigMap) -> Option<ConfigMap> + 'a;

/// 해석 과정마다 새 `Mapper`를 만들기 위한 공통 설정입니다.
#[derive(Debug, Clone)]
pub struct MapBuilder {
    ann_prefix: String,
    ann_defaults: HashMap<String, String>,
    validators: Validators,
}

impl MapBuilder {
    pub fn new(ann_prefix: impl Into<String>, ann_defaults: HashMap<String, String>) -> Self {
        Self {
            ann_prefix: ann_prefix.into(),
            ann_defaults,
            validators: Validators::default(),
        }
    }

    pub fn with_validators(mut self, validators: Validators) -> Self {
        self.validators = validators;
        self
    }

    pub fn ann_prefix(&self) -> &str {
        &self.ann_prefix
    }

    /// 리소스 라벨에서 어노테이션 접두사가 붙은 항목만 골라 접두사를 뗍니다.
    pub fn extract(&self, labels: &HashMap<String, String>) -> HashMap<String, String> {
        crate::annotations::from_labels(&self.ann_prefix, labels)
    }

    pub fn new_mapper(&self) -> Mapper {
        Mapper {
            builder: self.clone(),
            maps: HashMap::new(),
            configs: HashMap::new(),
        }
    }
}

/// 한 번의 해석 과정 동안 어노테이션 할당을 모으고 충돌을 검사합니다.
#[derive(Debug)]
pub struct Mapper {
    builder: MapBuilder,
    // 키별 할당 기록 (삽입 순서)
    maps: HashMap<String, Vec<Map>>,
    configs: HashMap<PathLink, ConfigMap>,
}

/// 라우팅 단위 하나의 설정 조회 뷰입니다.
#[derive(Debug, Clone, Copy)]
pub struct AnnConfig<'a> {
    mapper: &'a Mapper,
    keys: Option<&'a ConfigMap>,
}

impl<'a> AnnConfig<'a> {
    /// 명시적 할당, 전역 기본값, 빈 값 순서로 찾습니다.
    pub fn get(&self, key: &str) -> ConfigValue {
        if let Some(value) = self.keys.and_then(|keys| keys.get(key)) {
            return value.clone();
        }
        self.mapper
            .builder
            .ann_defaults
            .get(key)
            .map(|value| ConfigValue::from_default(value.clone()))
            .unwrap_or_default()
    }

    pub fn is_declared(&self, key: &str) -> bool {
        self.keys.map_or(false, |keys| keys.contains_key(key))
    }
}

impl Mapper {
    // 충돌이면 true, 할당되었거나 무시되었으면 false
    fn add_annotation(&mut self, source: &Source, link: &PathLink, key: &str, value: &str) -> bool {
        if link.is_empty() {
            // 빈 링크는 기본값을 뜻하므로 할당 대상이 될 수 없음
            panic!("path link cannot be empty");
        }
        let config = self.configs.entry(link.clone()).or_default();
        if let Some(current) = config.get(key) {
            return current.value != value;
        }
        let real_value = match self.builder.validators.get(key) {
            Some(validator) => match validator(&ValidateContext { source, key, value }) {
                Some(normalized) => normalized,
                None => return false,
            },
            None => value.to_string(),
        };
        debug!(
            source = %source,
            link = %link,
            key = %key,
            value = %real_value,
            "어노테이션 할당"
        );
        config.insert(
            key.to_string(),
            ConfigValue::new(Some(source.clone()), real_value.clone()),
        );
        self.maps.entry(key.to_string()).or_default().push(Map {
            source: Some(source.clone()),
            link: link.clone(),
            value: real_value,
        });
        false
    }

    /// 리소스 하나가 선언한 어노테이션을 라우팅 단위에 할당합니다.
    ///
    /// 같은 키에 다른 값이 이미 할당되어 있으면 기존 값을 유지하고 해당
    /// 키를 충돌 목록으로 돌려줍니다. 키는 이름 순서로 처리됩니다.
    ///
    /// # Panics
    ///
    /// `link`가 비어 있으면 패닉합니다.
    pub fn add_annotations(
        &mut self,
        source: &Source,
        link: &PathLink,
        annotations: &HashMap<String, String>,
    ) -> Vec<String> {
        let mut keys: Vec<&String> = annotations.keys().collect();
        keys.sort();
        let mut conflicts = Vec::with_capacity(keys.len());
        for key in keys {
            if self.add_annotation(source, link, key, &annotations[key]) {
                warn!(source = %source, link = %link, key = %key, "어노테이션 충돌, 기존 값 유지");
                conflicts.push(key.clone());
            }
        }
        conflicts
    }

    /// 키의 할당 기록을 돌려줍니다. 기록이 없으면 기본값을 출처 없는
    /// 항목 하나로 돌려줍니다.
    pub fn get_str_map(&self, key: &str) -> Option<Vec<Map>> {
        if let Some(maps) = self.maps.get(key).filter(|maps| !maps.is_empty()) {
            return Some(maps.clone());
        }
        self.builder.ann_defaults.get(key).map(|value| {
            vec![Map {
                source: None,
                link: PathLink::default(),
                value: value.clone(),
            }]
        })
    }

    pub fn get_config(&self, link: &PathLink) -> AnnConfig<'_> {
        AnnConfig {
            mapper: self,
            keys: self.configs.get(link),
        }
    }

    /// 모든 라우팅 단위를 통틀어 가장 먼저 할당된 값을 돌려줍니다.
    ///
    /// 다른 단위에 다른 값이 할당되어 있으면 경고를 남깁니다.
    pub fn get(&self, key: &str) -> ConfigValue {
        let Some(maps) = self.get_str_map(key) else {
            return ConfigValue::default();
        };
        let first = &maps[0];
        let value = ConfigValue::new(first.source.clone(), first.value.clone());
        let sources: Vec<String> = maps
            .iter()
            .filter(|m| m.value != value.value)
            .map(|m| match &m.source {
                Some(source) => source.to_string(),
                None => "default".to_string(),
            })
            .collect();
        if !sources.is_empty() {
            let from = value
                .source
                .as_ref()
                .map_or_else(|| "default".to_string(), |s| s.to_string());
            warn!(
                annotation = %format!("{}{}", self.builder.ann_prefix, key),
                from = %from,
                overridden = ?sources,
                "같은 어노테이션의 다른 값을 덮어씀"
            );
        }
        value
    }

    /// 백엔드의 라우팅 단위를 설정이 같은 것끼리 묶습니다.
    ///
    /// 모든 경로는 정확히 하나의 묶음에 속하며, 요청한 키마다 기본값이
    /// 먼저 채워진 뒤 명시적 할당으로 덮어씁니다. 묶음 안의 경로와 묶음
    /// 목록 모두 링크 순서로 정렬됩니다.
    ///
    /// # Panics
    ///
    /// 요청한 키의 할당이 백엔드에 선언되지 않은 링크를 가리키면
    /// 라우팅 모델과 설정 모델이 어긋난 것이므로 패닉합니다.
    pub fn get_backend_config(
        &self,
        backend: &Backend,
        keys: &[&str],
        overwrite: Option<&ConfigOverwrite<'_>>,
    ) -> Vec<BackendConfig> {
        for key in keys {
            for m in self.maps.get(*key).into_iter().flatten() {
                if !m.link.is_empty() && !backend.has_path(&m.link) {
                    panic!(
                        "backend '{}/{}' is missing hostname/path '{}'",
                        backend.namespace, backend.name, m.link
                    );
                }
            }
        }

        let mut config: Vec<BackendConfig> = Vec::with_capacity(1);
        for path in &backend.paths {
            let mut kv = ConfigMap::new();
            for key in keys {
                if let Some(value) = self.builder.ann_defaults.get(*key) {
                    kv.insert(key.to_string(), ConfigValue::from_default(value.clone()));
                }
            }
            if let Some(declared) = self.configs.get(&path.link) {
                for key in keys {
                    if let Some(value) = declared.get(*key) {
                        kv.insert(key.to_string(), value.clone());
                    }
                }
            }
            let real_kv = match overwrite {
                Some(overwrite) => overwrite(path, &kv).unwrap_or_default(),
                None => kv,
            };
            match config.iter_mut().find(|cfg| cfg.config_equals(&real_kv)) {
                Some(cfg) => cfg.paths.add(path.clone()),
                None => config.push(BackendConfig {
                    paths: BackendPaths::new(path.clone()),
                    config: real_kv,
                }),
            }
        }

        // 입력 순서와 관계없이 같은 출력이 나오도록 정렬
        for cfg in &mut config {
            cfg.paths.items.sort_by(|p1, p2| p1.link.compare(&p2.link, false));
        }
        config.sort_by(|c1, c2| match (c1.paths.min_link(), c2.paths.min_link()) {
            (Some(l1), Some(l2)) => l1.compare(l2, false),
            _ => std::cmp::Ordering::Equal,
        });
        debug!(
            backend = %backend.id(),
            paths = backend.paths.len(),
            groups = config.len(),
            "백엔드 설정 묶음 생성"
        );
        config
    }
}
