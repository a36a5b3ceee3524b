use super::*;

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_numbers() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

// =============================================================================
// parse_host
// =============================================================================

#[test]
fn parse_host_defaults_to_unspecified() {
    assert_eq!(parse_host(None), Ok(DEFAULT_HOST));
}

#[test]
fn parse_host_accepts_ipv4_and_ipv6() {
    assert_eq!(parse_host(Some("127.0.0.1")), Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert!(parse_host(Some("::1")).is_ok());
}

#[test]
fn parse_host_rejects_hostnames() {
    assert_eq!(parse_host(Some("localhost")), Err(ConfigError::InvalidHost("localhost".into())));
}

// =============================================================================
// log_filter / addr
// =============================================================================

#[test]
fn log_filter_defaults_to_info() {
    assert_eq!(log_filter(None), "info");
    assert_eq!(log_filter(Some("")), "info");
    assert_eq!(log_filter(Some("chessmaster=debug")), "chessmaster=debug");
}

#[test]
fn default_config_binds_all_interfaces_on_3000() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn error_messages_name_the_variable() {
    assert_eq!(ConfigError::InvalidPort("x".into()).to_string(), "invalid PORT: \"x\"");
}
