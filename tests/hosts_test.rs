use ingress_resolver::hosts::{HostAliasConfig, HostPath, HostsMap, HostsMapError, HostsMaps, MatchType};
use regex_lite::Regex;

// 테스트 헬퍼 함수
fn keys(map: &HostsMap, match_type: MatchType) -> Vec<String> {
    map.values(match_type).iter().map(|e| e.key.clone()).collect()
}

fn compile(map: &HostsMap) -> Regex {
    let entries = map.values(MatchType::Regex);
    assert_eq!(entries.len(), 1, "정규식 항목은 하나여야 함");
    Regex::new(&entries[0].key).expect("생성된 정규식이 유효해야 함")
}

#[test]
fn test_wildcard_hostname_accepts_single_label() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("host.map");
    map.add_hostname_mapping("*.example.com", "default_app_8080");

    assert!(!map.has_exact());
    assert!(map.has_regex());
    let re = compile(map);
    assert!(re.is_match("a.example.com"));
    assert!(re.is_match("app-1.example.com"));
    // 첫 라벨은 점이 없는 비어있지 않은 문자열이어야 함
    assert!(!re.is_match("a.b.example.com"));
    assert!(!re.is_match(".example.com"));
    assert!(!re.is_match("example.com"));
    assert!(!re.is_match("a.example.com.evil.net"));
    assert!(!re.is_match("a-example.com"));
}

#[test]
fn test_hostname_mapping_exact() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("host.map");
    map.add_hostname_mapping("D2.local", "b2");
    map.add_hostname_mapping("d1.local", "b1");

    assert_eq!(keys(map, MatchType::Exact), vec!["d1.local", "d2.local"]);
    assert_eq!(map.values(MatchType::Exact)[0].value, "b1");
    assert_eq!(map.values(MatchType::Exact)[0].to_string(), "d1.local b1");
}

#[test]
fn test_prefix_paths_of_same_hostname_descending() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("host.map");
    for path in ["/a", "/ab", "/a/b"] {
        map.add_hostname_path_mapping("d.local", &HostPath::prefix(path), path);
    }

    assert_eq!(
        keys(map, MatchType::Prefix),
        vec!["d.local/ab", "d.local/a/b", "d.local/a"]
    );
}

#[test]
fn test_hostnames_ascending_paths_descending() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("host.map");
    map.add_hostname_path_mapping("d2.local", &HostPath::begin("/"), "b1");
    map.add_hostname_path_mapping("d1.local", &HostPath::begin("/"), "b2");
    map.add_hostname_path_mapping("d1.local", &HostPath::begin("/api"), "b3");
    map.add_hostname_path_mapping("d2.local", &HostPath::begin("/app"), "b4");

    assert_eq!(
        keys(map, MatchType::Begin),
        vec!["d1.local/api", "d1.local/", "d2.local/app", "d2.local/"]
    );
}

#[test]
fn test_regex_group_longer_rules_first() {
    let short = HostPath::regex("/a+");
    let long = HostPath::regex("/api/v[0-9]+");

    let mut maps = HostsMaps::new();
    let first = maps.add_map("first.map");
    first.add_hostname_path_mapping("d.local", &short, "b1");
    first.add_hostname_path_mapping("d.local", &long, "b2");
    let first_keys = keys(first, MatchType::Regex);

    let second = maps.add_map("second.map");
    second.add_hostname_path_mapping("d.local", &long, "b2");
    second.add_hostname_path_mapping("d.local", &short, "b1");

    assert_eq!(first_keys, vec![r"^d\.local/api/v[0-9]+$", r"^d\.local/a+$"]);
    assert_eq!(first_keys, keys(second, MatchType::Regex));
}

#[test]
fn test_regex_group_ties_ascending() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("host.map");
    map.add_hostname_mapping("*.bb.local", "b2");
    map.add_hostname_mapping("*.aa.local", "b1");

    assert_eq!(
        keys(map, MatchType::Regex),
        vec![r"^[^.]+\.aa\.local$", r"^[^.]+\.bb\.local$"]
    );
}

#[test]
fn test_regex_path_of_literal_hostname() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("host.map");
    map.add_hostname_path_mapping("d.local", &HostPath::regex("/api/v[0-9]+"), "b1");

    let re = compile(map);
    assert!(re.is_match("d.local/api/v1"));
    assert!(!re.is_match("d.local/api/v1/users"));
    assert!(!re.is_match("xd.local/api/v1"));
    assert!(!re.is_match("dxlocal/api/v1"));
}

// 와일드카드 호스트의 경로 규칙은 원래 매칭 방식과 관계없이 Regex 그룹에
// 들어가므로 같은 매칭 방식의 일반 호스트 규칙보다 항상 우선순위가 낮다.
// 의도된 설계라기보다 알려진 동작이며, 그대로 유지되어야 한다.
#[test]
fn test_wildcard_hostname_paths_always_land_in_regex_group() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("host.map");
    map.add_hostname_path_mapping("*.d.local", &HostPath::prefix("/app"), "b1");
    map.add_hostname_path_mapping("*.d.local", &HostPath::exact("/login"), "b2");
    map.add_hostname_path_mapping("www.d.local", &HostPath::prefix("/app"), "b3");

    assert!(map.has_prefix());
    assert!(!map.has_exact());
    assert_eq!(keys(map, MatchType::Prefix), vec!["www.d.local/app"]);
    assert_eq!(
        keys(map, MatchType::Regex),
        vec![r"^[^.]+\.d\.local/app(/.*)?$", r"^[^.]+\.d\.local/login$"]
    );

    let prefix = Regex::new(&map.values(MatchType::Regex)[0].key).unwrap();
    assert!(prefix.is_match("a.d.local/app"));
    assert!(prefix.is_match("a.d.local/app/x"));
    assert!(!prefix.is_match("a.d.local/application"));
}

#[test]
fn test_wildcard_hostname_with_trailing_slash_prefix() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("host.map");
    map.add_hostname_path_mapping("*.d.local", &HostPath::prefix("/app/"), "b1");
    map.add_hostname_path_mapping("*.d.local", &HostPath::begin("/static"), "b2");

    assert_eq!(
        keys(map, MatchType::Regex),
        vec![r"^[^.]+\.d\.local/static", r"^[^.]+\.d\.local/app/"]
    );
}

#[test]
fn test_begin_paths_are_case_insensitive() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("host.map");
    map.add_hostname_path_mapping("D.local", &HostPath::begin("/Static"), "b1");
    map.add_hostname_path_mapping("D.local", &HostPath::prefix("/App"), "b2");

    assert_eq!(keys(map, MatchType::Begin), vec!["d.local/static"]);
    assert_eq!(keys(map, MatchType::Prefix), vec!["d.local/App"]);
}

#[test]
fn test_alias_name_and_regex() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("host.map");
    let alias = HostAliasConfig {
        alias_name: "alias.local".to_string(),
        alias_regex: r"[a-z]+\.alias\.local".to_string(),
    };
    map.add_alias_path_mapping(&alias, &HostPath::prefix("/app"), "b1");

    assert_eq!(keys(map, MatchType::Prefix), vec!["alias.local/app"]);
    assert_eq!(
        keys(map, MatchType::Regex),
        vec![r"^[a-z]+\.alias\.local/app(/.*)?$"]
    );
}

#[test]
fn test_alias_wildcard_name() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("host.map");
    map.add_alias_path_mapping(&HostAliasConfig::name("*.alias.local"), &HostPath::exact("/"), "b1");
    map.add_alias_path_mapping(&HostAliasConfig::default(), &HostPath::exact("/"), "b2");

    assert_eq!(keys(map, MatchType::Regex), vec![r"^[^.]+\.alias\.local/$"]);
    assert!(!map.has_exact());
}

#[test]
fn test_filename_derivation() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("map/host.map");
    map.add_hostname_mapping("*.d.local", "b1");
    map.add_hostname_path_mapping("d.local", &HostPath::prefix("/"), "b2");
    map.append_item("d.local");

    assert_eq!(map.filename(MatchType::Regex).unwrap(), "map/host__regex.map");
    assert_eq!(map.filename_prefix().unwrap(), "map/host__prefix.map");
    assert_eq!(map.filename_empty().unwrap(), "map/host.map");

    let first = map.filename_regex().unwrap();
    let second = map.filename_regex().unwrap();
    assert_eq!(first, second);
    assert!(std::ptr::eq(first, second), "캐시된 이름을 돌려줘야 함");
}

#[test]
fn test_filename_of_empty_group() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("map/host.map");
    map.add_hostname_mapping("d.local", "b1");

    assert!(map.filename_exact().is_ok());
    assert_eq!(
        map.filename(MatchType::Begin).unwrap_err(),
        HostsMapError::EmptyContent {
            basename: "map/host.map".to_string(),
            match_type: MatchType::Begin,
        }
    );
    assert!(map.filename_empty().is_err());
}

#[test]
fn test_list_only_table() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("https.list");
    assert!(!map.has_host());

    map.append_item("d2.local");
    map.append_item("d1.local");

    assert!(map.has_host());
    assert_eq!(map.matches(), vec![MatchType::Empty]);
    // 목록 항목은 추가된 순서를 유지
    assert_eq!(keys(map, MatchType::Empty), vec!["d2.local", "d1.local"]);
    assert!(map.values(MatchType::Empty)[0].value.is_empty());
}

#[test]
fn test_duplicated_keys_are_kept() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("host.map");
    map.add_hostname_mapping("d.local", "b1");
    map.add_hostname_mapping("d.local", "b2");

    assert_eq!(map.values(MatchType::Exact).len(), 2);
}

#[test]
fn test_entry_serialization() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("host.map");
    map.add_hostname_path_mapping("d.local", &HostPath::exact("/app"), "default_app_8080");

    let json = serde_json::to_value(&map.values(MatchType::Exact)[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"key": "d.local/app", "value": "default_app_8080"})
    );
}

#[test]
fn test_host_ordering_is_independent_of_insertion_order() {
    let rows = [("example.com", ""), ("example.com.au", ""), ("example.com", "/api")];
    let build = |rows: &[(&str, &str)]| {
        let mut maps = HostsMaps::new();
        let map = maps.add_map("host.map");
        for (hostname, path) in rows {
            if path.is_empty() {
                map.add_hostname_mapping(hostname, "b1");
            } else {
                map.add_hostname_path_mapping(hostname, &HostPath::exact(*path), "b1");
            }
        }
        keys(map, MatchType::Exact)
    };

    let forward = build(&rows);
    let reversed: Vec<(&str, &str)> = rows.iter().rev().copied().collect();

    assert_eq!(forward, vec!["example.com/api", "example.com", "example.com.au"]);
    assert_eq!(forward, build(&reversed));
}

#[test]
fn test_wildcard_hostname_with_hyphen_is_escaped() {
    let mut maps = HostsMaps::new();
    let map = maps.add_map("host.map");
    map.add_hostname_mapping("*.my-app.com", "b1");

    // '-'도 이스케이프되므로 규칙 길이에 포함됨
    assert_eq!(keys(map, MatchType::Regex), vec![r"^[^.]+\.my\-app\.com$"]);
    let re = compile(map);
    assert!(re.is_match("a.my-app.com"));
    assert!(!re.is_match("a.myxapp.com"));
}
