//! Ingress Resolver는 인그레스 컨트롤러의 설정 해석 코어입니다.
//!
//! # 주요 기능
//!
//! - 호스트/경로 규칙을 매칭 방식별로 정렬된 라우팅 테이블로 변환
//! - 여러 리소스가 선언한 어노테이션을 라우팅 단위별 값으로 해석하고 충돌 검사
//! - 같은 설정을 가진 라우팅 단위를 백엔드별로 묶어 생성 규칙 수 최소화
//!
//! # 예제
//!
//! ```
//! use ingress_resolver::hosts::{HostsMaps, HostPath, MatchType};
//!
//! let mut maps = HostsMaps::new();
//! let map = maps.add_map("maps/host.map");
//!
//! map.add_hostname_path_mapping("d1.local", &HostPath::prefix("/api"), "default_api_8080");
//! map.add_hostname_path_mapping("*.d2.local", &HostPath::begin("/"), "default_web_8080");
//!
//! assert!(map.has_prefix());
//! assert_eq!(map.filename(MatchType::Regex).unwrap(), "maps/host__regex.map");
//! ```
//!
//! # 설정 해석
//!
//! ```
//! use std::collections::HashMap;
//! use ingress_resolver::annotations::{MapBuilder, Source};
//! use ingress_resolver::backend::{Backend, PathLink};
//!
//! let defaults = HashMap::from([("timeout-server".to_string(), "50s".to_string())]);
//! let mut mapper = MapBuilder::new("ingress.kubernetes.io/", defaults).new_mapper();
//!
//! let mut backend = Backend::new("default", "app", "8080");
//! let api = PathLink::new("d1.local", "/api");
//! backend.add_path(PathLink::new("d1.local", "/"));
//! backend.add_path(api.clone());
//!
//! let source = Source::new("ingress", "default", "app");
//! let ann = HashMap::from([("timeout-server".to_string(), "10s".to_string())]);
//! assert!(mapper.add_annotations(&source, &api, &ann).is_empty());
//!
//! let config = mapper.get_backend_config(&backend, &["timeout-server"], None);
//! assert_eq!(config.len(), 2);
//! ```

pub mod annotations;
pub mod backend;
pub mod hosts;
pub mod logging;
pub mod settings;
