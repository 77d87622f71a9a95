//! 키별 값 검증/정규화 함수입니다.
//!
//! 검증 함수는 정규화된 값을 돌려주거나, 값을 받아들일 수 없으면 `None`을
//! 돌려줍니다. 거부된 값은 선언되지 않은 것으로 취급됩니다.

use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use crate::annotations::source::parse_bool;
use crate::annotations::Source;

/// 검증 함수에 전달되는 입력입니다.
#[derive(Debug, Clone, Copy)]
pub struct ValidateContext<'a> {
    pub source: &'a Source,
    pub key: &'a str,
    pub value: &'a str,
}

pub type Validator = fn(&ValidateContext<'_>) -> Option<String>;

/// 키 이름으로 검증 함수를 찾는 테이블입니다.
#[derive(Clone, Default)]
pub struct Validators {
    table: HashMap<String, Validator>,
}

impl fmt::Debug for Validators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.table.keys().collect();
        keys.sort();
        f.debug_struct("Validators").field("keys", &keys).finish()
    }
}

impl Validators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, validator: Validator) -> Self {
        self.insert(key, validator);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, validator: Validator) {
        self.table.insert(key.into(), validator);
    }

    pub fn get(&self, key: &str) -> Option<Validator> {
        self.table.get(key).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// 불리언 값을 `true`/`false`로 정규화합니다.
pub fn validate_bool(ctx: &ValidateContext<'_>) -> Option<String> {
    match parse_bool(ctx.value) {
        Some(value) => Some(value.to_string()),
        None => {
            warn!(
                source = %ctx.source,
                key = %ctx.key,
                value = %ctx.value,
                "불리언이 아닌 값 무시"
            );
            None
        }
    }
}

/// 정수 값을 정규화합니다. (`"01"` → `"1"`)
pub fn validate_int(ctx: &ValidateContext<'_>) -> Option<String> {
    match ctx.value.trim().parse::<i64>() {
        Ok(value) => Some(value.to_string()),
        Err(e) => {
            warn!(
                source = %ctx.source,
                key = %ctx.key,
                value = %ctx.value,
                error = %e,
                "정수가 아닌 값 무시"
            );
            None
        }
    }
}
