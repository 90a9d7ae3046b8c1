use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
    assert!(cfg.assets_dir.ends_with("public"));
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("HOST", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("ASSETS_DIR", "/srv/portfolio"),
    ]))
    .unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/portfolio"));
}

#[test]
fn blank_assets_dir_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup(&[("ASSETS_DIR", "  ")])).unwrap();
    assert!(cfg.assets_dir.ends_with("public"));
}

#[test]
fn ipv6_host_is_accepted() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "::1"), ("PORT", "4000")])).unwrap();
    assert_eq!(cfg.addr, "[::1]:4000".parse::<SocketAddr>().unwrap());
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));

    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(err.to_string().starts_with("invalid PORT \"70000\""));
}

#[test]
fn invalid_host_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost { ref value, .. } if value == "localhost"));
}

#[test]
fn leptos_error_displays_context() {
    let err = ConfigError::Leptos("missing output-name".to_owned());
    assert_eq!(err.to_string(), "leptos configuration: missing output-name");
}
