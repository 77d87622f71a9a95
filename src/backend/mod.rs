//! 라우팅 모델과 설정 모델을 잇는 백엔드/라우팅 단위 타입입니다.

mod link;
mod path;
mod upstream;

pub use link::PathLink;
pub use path::{BackendPath, BackendPaths};
pub use upstream::Backend;
