use super::*;

#[test]
fn graphql_endpoint_from_bare_domain() {
    let url = graphql_endpoint("example.myshopify.com", "2024-10").unwrap();
    assert_eq!(
        url.as_str(),
        "https://example.myshopify.com/api/2024-10/graphql.json"
    );
}

#[test]
fn graphql_endpoint_strips_path_from_full_url() {
    let url = graphql_endpoint("https://example.myshopify.com/collections/all", "2024-10").unwrap();
    assert_eq!(
        url.as_str(),
        "https://example.myshopify.com/api/2024-10/graphql.json"
    );
}

#[test]
fn graphql_endpoint_keeps_explicit_scheme_and_port() {
    let url = graphql_endpoint("http://127.0.0.1:8080", "unstable").unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/unstable/graphql.json");
}

#[test]
fn graphql_endpoint_rejects_blank_domain() {
    let err = graphql_endpoint("  ", "2024-10").unwrap_err();
    assert!(
        matches!(err, StorefrontError::InvalidShopDomain { .. }),
        "expected InvalidShopDomain, got: {err:?}"
    );
}

#[test]
fn graphql_endpoint_rejects_blank_version() {
    let err = graphql_endpoint("example.myshopify.com", "").unwrap_err();
    assert!(
        matches!(err, StorefrontError::InvalidShopDomain { .. }),
        "expected InvalidShopDomain, got: {err:?}"
    );
}

#[test]
fn debug_output_redacts_access_token() {
    let client = StorefrontClient::new(
        "example.myshopify.com",
        "2024-10",
        "secret-token",
        5,
        "upsell-test/0.1",
    )
    .unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("[redacted]"));
    assert!(!debug.contains("secret-token"));
}
