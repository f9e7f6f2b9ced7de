use super::*;

// =============================================================
// parse_port
// =============================================================

#[test]
fn parse_port_defaults_when_missing() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_number() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, HostError::InvalidPort { var: "PORT", .. }));
    assert!(err.to_string().contains("eighty"));
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
}

// =============================================================
// parse_host
// =============================================================

#[test]
fn parse_host_defaults_to_unspecified() {
    assert_eq!(parse_host(None).unwrap(), DEFAULT_HOST);
}

#[test]
fn parse_host_accepts_ipv4_and_ipv6() {
    assert_eq!(parse_host(Some("127.0.0.1")).unwrap(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert!(parse_host(Some("::1")).unwrap().is_ipv6());
}

#[test]
fn parse_host_rejects_hostname() {
    assert!(matches!(parse_host(Some("localhost")), Err(HostError::InvalidHost { .. })));
}

// =============================================================
// HostConfig
// =============================================================

#[test]
fn default_config_listens_on_all_interfaces() {
    let config = HostConfig::default();
    assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
}
