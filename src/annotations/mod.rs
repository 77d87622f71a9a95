//! 여러 리소스가 선언한 어노테이션을 라우팅 단위별 설정으로 해석하는 모듈입니다.
//!
//! `Mapper`는 (출처, 라우팅 단위, 키, 값) 할당을 받아 검증하고 충돌을 검사하며,
//! 백엔드 단위로 같은 설정을 가진 라우팅 단위를 묶습니다.

mod backend_config;
mod labels;
mod mapper;
mod source;
mod validators;

pub use backend_config::{BackendConfig, ConfigMap};
pub use labels::from_labels;
pub use mapper::{AnnConfig, ConfigOverwrite, MapBuilder, Mapper};
pub use source::{ConfigValue, Map, Source};
pub use validators::{validate_bool, validate_int, ValidateContext, Validator, Validators};
