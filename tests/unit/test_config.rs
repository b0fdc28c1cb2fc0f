use servicetrade_client::config::Config;
use servicetrade_client::constants::DEFAULT_TIMEOUT;

#[test]
fn api_url_appends_api_segment() {
    let config = Config::with_credentials("https://test.host.com", "user", "pass");
    assert_eq!(config.api_url(), "https://test.host.com/api");
}

#[test]
fn api_url_trims_trailing_slash() {
    let config = Config::with_credentials("https://test.host.com/", "user", "pass");
    assert_eq!(config.api_url(), "https://test.host.com/api");
}

#[test]
fn credentials_resolve_prefers_explicit_arguments() {
    let config = Config::with_credentials("https://test.host.com", "fixed_user", "fixed_pass");

    let (username, password) = config.credentials.resolve(None, None);
    assert_eq!(username, "fixed_user");
    assert_eq!(password, "fixed_pass");

    let (username, password) = config.credentials.resolve(Some("other_user"), None);
    assert_eq!(username, "other_user");
    assert_eq!(password, "fixed_pass");

    let (username, password) = config
        .credentials
        .resolve(Some("other_user"), Some("other_pass"));
    assert_eq!(username, "other_user");
    assert_eq!(password, "other_pass");
}

#[test]
fn with_credentials_uses_defaults_for_remaining_fields() {
    let config = Config::with_credentials("https://test.host.com", "user", "pass");
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT);
    assert!(config.user_agent.is_none());
    assert!(config.session_cookie.is_none());
    assert!(config.auto_relogin);
}
