mod common;

use axum::http::StatusCode;
use common::RecordingSink;
use multimedium_site::config::SiteVariant;
use std::sync::Arc;

fn server() -> axum_test::TestServer {
    common::create_test_server(common::create_test_state(Arc::new(RecordingSink::default())))
}

#[tokio::test]
async fn test_home_uses_primary_hero() {
    let response = server().get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Websites That Look Premium and Convert"));
    assert!(html.contains("<title>Premium Web Design That Converts | Multimedium.dev</title>"));
    assert!(html.contains(r#"<link rel="canonical" href="https://multimedium.dev">"#));
    assert!(html.contains("ProfessionalService"));
}

#[tokio::test]
async fn test_home_alt_variant_hero() {
    let state = common::create_test_state_with(
        common::fixtures_dir(),
        Arc::new(RecordingSink::default()),
        SiteVariant::Alt,
    );
    let response = common::create_test_server(state).get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Make Your Business Look Established"));
    assert!(!html.contains("Websites That Look Premium and Convert"));
}

#[tokio::test]
async fn test_static_pages_render() {
    let server = server();

    for path in [
        "/about",
        "/services",
        "/pricing",
        "/work",
        "/legal/privacy",
        "/legal/terms",
        "/hoa",
        "/small-business",
        "/contact",
    ] {
        let response = server.get(path).await;
        response.assert_status_ok();
        assert!(
            response.text().contains("BreadcrumbList"),
            "{path} is missing its breadcrumb"
        );
    }
}

#[tokio::test]
async fn test_landing_page_has_service_schema() {
    let response = server().get("/hoa").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#""@type":"Service""#));
    assert!(html.contains("https://multimedium.dev/pricing#hoa"));
}

#[tokio::test]
async fn test_case_study_detail_and_unknown() {
    let server = server();

    let response = server.get("/work/pa-real-estate-support").await;
    response.assert_status_ok();
    assert!(response.text().contains("PA Real Estate Support Services, LLC"));

    let response = server.get("/work/not-a-client").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Page not found"));
}

#[tokio::test]
async fn test_blog_index_lists_valid_posts_newest_first() {
    let response = server().get("/blog").await;

    response.assert_status_ok();
    let html = response.text();

    let speed = html.find("Why Speed Still Matters").unwrap();
    let hoa = html.find("HOA Portal Checklist").unwrap();
    let images = html.find("Setting an Image Budget").unwrap();
    assert!(speed < hoa && hoa < images);

    assert!(!html.contains("Half-finished draft"));
    assert!(html.contains("February 10, 2024"));
    assert!(html.contains("1 min read"));
}

#[tokio::test]
async fn test_blog_index_category_filter() {
    let server = server();

    let response = server
        .get("/blog")
        .add_query_param("category", "HOA")
        .await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("HOA Portal Checklist"));
    assert!(!html.contains("Why Speed Still Matters"));
    assert!(html.contains(r#"href="/blog?category=HOA" aria-current="page""#));

    let response = server
        .get("/blog")
        .add_query_param("category", "Gardening")
        .await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("HOA Portal Checklist"));
    assert!(html.contains("Why Speed Still Matters"));
    assert!(html.contains(r#"href="/blog" aria-current="page""#));
}

#[tokio::test]
async fn test_blog_post_renders_with_toc_and_related() {
    let response = server().get("/blog/why-speed-matters").await;

    response.assert_status_ok();
    let html = response.text();

    assert!(html.contains(r##"<h2 id="where-the-time-goes"><a class="no-underline" href="#where-the-time-goes">"##));
    assert!(html.contains(r##"<a href="#core-web-vitals">Core Web Vitals</a>"##));
    assert!(html.contains("<table>"));
    assert!(html.contains(r#"<meta property="og:type" content="article">"#));
    assert!(html.contains(r#""@type":"Article""#));
    assert!(html.contains("https://multimedium.dev/static/blog/speed.png"));

    let related_images = html.find(r#"href="/blog/image-budgets""#).unwrap();
    let related_hoa = html.find(r#"href="/blog/hoa-portal-checklist""#).unwrap();
    assert!(related_images < related_hoa);
}

#[tokio::test]
async fn test_blog_post_not_found_cases() {
    let server = server();

    for path in ["/blog/nope", "/blog/draft-notes", "/blog/Why-Speed-Matters"] {
        server
            .get(path)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_unknown_path_renders_404_page() {
    let response = server().get("/definitely/not/here").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let html = response.text();
    assert!(html.contains("Page not found"));
    assert!(html.contains("<html"));
}
