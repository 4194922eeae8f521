use super::*;

// =============================================================================
// Helpers
// =============================================================================

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("register").build()
}

async fn spawn_app() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("test listener should bind");
    let addr = listener.local_addr().expect("listener should have an address");
    let router = app(test_options());
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server failed");
    });
    format!("http://{addr}")
}

async fn fetch(base: &str, path: &str) -> (u16, String) {
    let response = reqwest::get(format!("{base}{path}")).await.expect("request should complete");
    let status = response.status().as_u16();
    let body = response.text().await.expect("body should be text");
    (status, body)
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn register_page_renders_form_markup() {
    let base = spawn_app().await;

    let (status, body) = fetch(&base, "/register").await;

    assert_eq!(status, 200);
    assert!(body.contains(r#"name="profile""#), "missing image picker: {body}");
    assert!(body.contains(r#"name="email""#));
    assert!(body.contains("Login Here"));
}

#[tokio::test]
async fn root_serves_register_page() {
    let base = spawn_app().await;

    let (status, body) = fetch(&base, "/").await;

    assert_eq!(status, 200);
    assert!(body.contains("Login Here"));
}

#[tokio::test]
async fn rendered_page_loads_the_hydration_bundle() {
    let base = spawn_app().await;

    let (_, body) = fetch(&base, "/register").await;

    assert!(body.contains("/pkg/register.js"), "hydration scripts missing: {body}");
}

#[tokio::test]
async fn login_route_renders_landing_page() {
    let base = spawn_app().await;

    let (status, body) = fetch(&base, "/login").await;

    assert_eq!(status, 200);
    assert!(body.contains("Register Here"));
}

// =============================================================================
// Plumbing
// =============================================================================

#[tokio::test]
async fn healthz_is_ok() {
    let base = spawn_app().await;

    let (status, _) = fetch(&base, "/healthz").await;

    assert_eq!(status, 200);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let base = spawn_app().await;

    let (status, _) = fetch(&base, "/nope").await;

    assert_eq!(status, 404);
}
