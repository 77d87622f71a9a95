use std::collections::HashMap;

/// 리소스 라벨/어노테이션에서 접두사가 붙은 항목만 골라 접두사를 뗍니다.
///
/// 접두사만 있고 키 이름이 없는 항목은 무시합니다.
pub fn from_labels(prefix: &str, labels: &HashMap<String, String>) -> HashMap<String, String> {
    labels
        .iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(prefix)
                .filter(|name| !name.is_empty())
                .map(|name| (name.to_string(), value.clone()))
        })
        .collect()
}
