//! 호스트/경로 규칙으로 프록시 map 파일용 라우팅 테이블을 만드는 모듈입니다.
//!
//! 매칭 방식(Exact, Prefix, Begin, Regex, Empty)마다 별도의 정렬된 항목
//! 목록과 출력 파일 이름을 관리합니다.

mod convert;
mod error;
mod map;
mod match_type;
mod path;

pub use convert::{convert_path_to_regex, convert_wildcard_to_regex};
pub use error::HostsMapError;
pub use map::{HostsMap, HostsMapEntry, HostsMaps};
pub use match_type::MatchType;
pub use path::{HostAliasConfig, HostPath};
