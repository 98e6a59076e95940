use axum::http::{HeaderMap, HeaderValue, header};
use spotstats::types::Token;
use spotstats::utils::*;
use std::path::{Path, PathBuf};

// Helper function to build request headers carrying the given cookie lines
fn headers_with_cookies(cookies: &[&str]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for cookie in cookies {
        headers.append(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
    }
    headers
}

#[test]
fn test_generate_session_id() {
    let id = generate_session_id();

    // Should be exactly 64 characters
    assert_eq!(id.len(), 64);

    // Should contain only alphanumeric characters
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated ids should be different
    assert_ne!(id, generate_session_id());
}

#[test]
fn test_generate_state() {
    let state = generate_state();

    assert_eq!(state.len(), 32);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(state, generate_state());
}

#[test]
fn test_session_id_from_headers() {
    // No cookie at all
    assert_eq!(session_id_from_headers(&HeaderMap::new()), None);

    // Single cookie
    let headers = headers_with_cookies(&["spotstats_session=abc123"]);
    assert_eq!(session_id_from_headers(&headers), Some("abc123".to_string()));

    // Among other cookies, with spacing
    let headers = headers_with_cookies(&["theme=dark; spotstats_session=xyz ; lang=es"]);
    assert_eq!(session_id_from_headers(&headers), Some("xyz".to_string()));

    // Spread over several Cookie headers
    let headers = headers_with_cookies(&["theme=dark", "spotstats_session=second"]);
    assert_eq!(session_id_from_headers(&headers), Some("second".to_string()));

    // Empty value and similarly named cookies are ignored
    let headers = headers_with_cookies(&["spotstats_session=; spotstats_session_old=nope"]);
    assert_eq!(session_id_from_headers(&headers), None);
}

#[test]
fn test_session_cookie() {
    let cookie = session_cookie("abc123");

    assert!(cookie.starts_with("spotstats_session=abc123;"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[test]
fn test_resolve_static_path() {
    let root = Path::new("public");

    // Root and directories map to index.html
    assert_eq!(
        resolve_static_path(root, "/"),
        Some(PathBuf::from("public/index.html"))
    );
    assert_eq!(
        resolve_static_path(root, "/docs/"),
        Some(PathBuf::from("public/docs/index.html"))
    );

    // Regular files
    assert_eq!(
        resolve_static_path(root, "/stats.html"),
        Some(PathBuf::from("public/stats.html"))
    );
    assert_eq!(
        resolve_static_path(root, "/./css/site.css"),
        Some(PathBuf::from("public/css/site.css"))
    );

    // Anything escaping the root is rejected
    assert_eq!(resolve_static_path(root, "/../Cargo.toml"), None);
    assert_eq!(resolve_static_path(root, "/css/../../secret"), None);
}

#[test]
fn test_content_type_for() {
    assert_eq!(
        content_type_for(Path::new("stats.html")),
        "text/html; charset=utf-8"
    );
    assert_eq!(
        content_type_for(Path::new("app.JS")),
        "text/javascript; charset=utf-8"
    );
    assert_eq!(content_type_for(Path::new("logo.png")), "image/png");
    assert_eq!(
        content_type_for(Path::new("archive")),
        "application/octet-stream"
    );
}

#[test]
fn test_token_is_expired() {
    let token = Token {
        access_token: "access".to_string(),
        expires_in: 3600,
        obtained_at: 1_000,
    };

    assert!(!token.is_expired(1_000));
    assert!(!token.is_expired(4_599));
    assert!(token.is_expired(4_600));

    // Saturates instead of overflowing
    let forever = Token {
        expires_in: u64::MAX,
        ..token
    };
    assert!(!forever.is_expired(u64::MAX - 1));
}
