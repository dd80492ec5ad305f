use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn api_routes_builds_with_fresh_state() {
    let _router = api_routes(AppState::new());
}
