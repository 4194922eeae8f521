use super::*;

// =============================================================================
// from_base_url
// =============================================================================

#[test]
fn missing_base_url_is_same_origin() {
    let config = ClientConfig::from_base_url(None).unwrap();
    assert_eq!(config.api_base_url, "");
    assert_eq!(config.register_endpoint(), "/api/auth/register");
}

#[test]
fn blank_base_url_is_same_origin() {
    let config = ClientConfig::from_base_url(Some("   ")).unwrap();
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn trailing_slashes_and_whitespace_are_trimmed() {
    let config = ClientConfig::from_base_url(Some("  https://api.example.com//  ")).unwrap();
    assert_eq!(config.api_base_url, "https://api.example.com");
    assert_eq!(config.register_endpoint(), "https://api.example.com/api/auth/register");
}

#[test]
fn path_prefix_is_kept() {
    let config = ClientConfig::from_base_url(Some("http://127.0.0.1:4000/backend/")).unwrap();
    assert_eq!(config.register_endpoint(), "http://127.0.0.1:4000/backend/api/auth/register");
}

#[test]
fn non_http_scheme_is_rejected() {
    assert_eq!(
        ClientConfig::from_base_url(Some("ftp://example.com")),
        Err(ConfigError::InvalidBaseUrl("ftp://example.com".to_owned()))
    );
}

#[test]
fn scheme_without_host_is_rejected() {
    assert!(ClientConfig::from_base_url(Some("https://")).is_err());
    assert!(ClientConfig::from_base_url(Some("example.com")).is_err());
}

#[test]
fn login_route_is_login() {
    assert_eq!(ClientConfig::default().login_route(), "/login");
}
