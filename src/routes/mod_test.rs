use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn not_found_returns_404_with_message() {
    let (status, body) = not_found().await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Page not found.");
}

#[test]
fn base_routes_builds() {
    let _router: Router = base_routes();
}
