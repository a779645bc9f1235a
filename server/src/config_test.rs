use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
    assert!(cfg.images_dir.ends_with("public/images"));
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("IMAGES_DIR", "/srv/images"),
        ("LOG_FILTER", "debug"),
    ]))
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.images_dir, PathBuf::from("/srv/images"));
    assert_eq!(cfg.log_filter, "debug");
}

#[test]
fn blank_log_filter_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("LOG_FILTER", "  ")])).unwrap();
    assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
}

#[test]
fn invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "eighty".to_owned() });
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn invalid_host_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "not-an-ip")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "HOST", value: "not-an-ip".to_owned() });
}
