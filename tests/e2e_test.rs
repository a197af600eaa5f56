//! End-to-end flow tests for CineMax
//!
//! Page route -> view -> proxy -> mocked Provider, plus the views driven
//! over HTTP through `LocalApiClient` the way a browser drives `/api`.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use tower::ServiceExt;

use cinemax::api::LocalApiClient;
use cinemax::config::Config;
use cinemax::server::{self, AppState};
use cinemax::ui::{DetailView, HomeView, SearchPageParams, SearchResultsView};

// =============================================================================
// Fixtures
// =============================================================================

fn results_json(count: u64, page: u32, total_pages: u32) -> String {
    let results: Vec<_> = (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Inception {}", id),
                "poster_path": format!("/p{}.jpg", id),
                "vote_average": 8.0,
                "release_date": "2010-07-15",
                "overview": "Dreams."
            })
        })
        .collect();
    json!({
        "page": page,
        "results": results,
        "total_pages": total_pages,
        "total_results": count
    })
    .to_string()
}

fn build_app(server: &ServerGuard) -> Router {
    server::router(AppState::new(Config {
        api_key: "test_key".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        provider_url: server.url(),
        request_timeout_secs: 5,
    }))
}

async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// =============================================================================
// Views over /api (LocalApiClient)
// =============================================================================

#[tokio::test]
async fn test_search_page_fetches_api_once_with_default_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "inception".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_body(results_json(12, 1, 1))
        .expect(1)
        .create_async()
        .await;

    let api = LocalApiClient::new(server.url());
    let mut view = SearchResultsView::new();
    let params = SearchPageParams {
        q: Some("inception".to_string()),
        page: None,
    };
    view.load(&params, &api).await;

    mock.assert_async().await;
    let html = view.render();
    assert!(html.contains("Found 12 results"));
    assert!(!html.contains(r#"class="pagination""#));
    assert_eq!(html.matches(r#"class="card""#).count(), 12);
}

#[tokio::test]
async fn test_search_page_api_error_shows_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"error": "Failed to search movies"}"#)
        .create_async()
        .await;

    let api = LocalApiClient::new(server.url());
    let mut view = SearchResultsView::new();
    let params = SearchPageParams {
        q: Some("inception".to_string()),
        page: Some("3".to_string()),
    };
    view.load(&params, &api).await;

    assert_eq!(view.state().error(), Some("Failed to fetch search results"));
    assert!(view.render().contains("Failed to fetch search results"));
}

#[tokio::test]
async fn test_home_view_over_api() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/trending")
        .with_body(results_json(3, 1, 10))
        .expect(1)
        .create_async()
        .await;

    let api = LocalApiClient::new(server.url());
    let mut view = HomeView::new();
    view.load(&api).await;

    mock.assert_async().await;
    assert_eq!(view.state().data().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_detail_view_null_body_is_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/movie/42")
        .with_body("null")
        .create_async()
        .await;

    let api = LocalApiClient::new(server.url());
    let mut view = DetailView::new("42");
    view.load(&api).await;

    assert_eq!(view.state().error(), Some("Movie not found"));
}

// =============================================================================
// Full page routes
// =============================================================================

#[tokio::test]
async fn test_home_page_renders_trending() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/trending/movie/week")
        .match_query(Matcher::UrlEncoded("api_key".into(), "test_key".into()))
        .with_body(results_json(4, 1, 100))
        .create_async()
        .await;

    let (status, html) = get_page(build_app(&server), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Discover Amazing Movies"));
    assert!(html.contains("Trending This Week"));
    assert!(html.contains(r#"href="/movie/4""#));
    assert!(html.contains("https://image.tmdb.org/t/p/w500/p1.jpg"));
}

#[tokio::test]
async fn test_home_page_provider_down_shows_banner() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/trending/movie/week")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let (status, html) = get_page(build_app(&server), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Failed to fetch movies"));
    assert!(!html.contains(r#"class="card""#));
}

#[tokio::test]
async fn test_search_page_without_query_is_prompt() {
    let mut server = Server::new_async().await;
    let provider = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let (status, html) = get_page(build_app(&server), "/search").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Start Searching for Movies"));
    provider.assert_async().await;
}

#[tokio::test]
async fn test_search_page_paginates() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "batman".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
        ]))
        .with_body(results_json(20, 2, 5))
        .expect(1)
        .create_async()
        .await;

    let (_, html) = get_page(build_app(&server), "/search?q=batman&page=2").await;
    mock.assert_async().await;

    assert!(html.contains("Search Results for &quot;batman&quot;"));
    assert!(html.contains("Found 20 results"));
    assert!(html.contains("Page 2 of 5"));
    assert!(html.contains(r#"href="/search?q=batman&amp;page=1">Previous"#));
    assert!(html.contains(r#"href="/search?q=batman&amp;page=3">Next"#));
}

#[tokio::test]
async fn test_search_page_no_results() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Any)
        .with_body(results_json(0, 1, 0))
        .create_async()
        .await;

    let (_, html) = get_page(build_app(&server), "/search?q=qwertyuiop").await;
    assert!(html.contains("No movies found"));
    assert!(html.contains("Try searching with different keywords"));
}

#[tokio::test]
async fn test_movie_page_renders_detail() {
    let mut server = Server::new_async().await;
    let _movie = server
        .mock("GET", "/movie/27205")
        .match_query(Matcher::Any)
        .with_body(
            json!({
                "id": 27205,
                "title": "Inception",
                "backdrop_path": "/bd.jpg",
                "poster_path": "/p.jpg",
                "vote_average": 8.4,
                "release_date": "2010-07-15",
                "runtime": 148,
                "budget": 160000000,
                "revenue": 825532764,
                "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
                "overview": "Cobb steals secrets."
            })
            .to_string(),
        )
        .create_async()
        .await;
    let _credits = server
        .mock("GET", "/movie/27205/credits")
        .match_query(Matcher::Any)
        .with_body(
            json!({
                "cast": [{"id": 1, "name": "Leonardo DiCaprio", "character": "Cobb", "profile_path": "/leo.jpg"}],
                "crew": [{"id": 2, "name": "Christopher Nolan", "job": "Director"}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let (status, html) = get_page(build_app(&server), "/movie/27205").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>Inception | CineMax</title>"));
    assert!(html.contains("★ 4.2/5"));
    assert!(html.contains("July 15, 2010"));
    assert!(html.contains("148 minutes"));
    assert!(html.contains("Science Fiction"));
    assert!(html.contains("$160.0M"));
    assert!(html.contains("$825.5M"));
    assert!(html.contains("Christopher Nolan"));
    assert!(html.contains("https://image.tmdb.org/t/p/w200/leo.jpg"));
}

#[tokio::test]
async fn test_movie_page_provider_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", Matcher::Regex(r"^/movie/".to_string()))
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let (status, html) = get_page(build_app(&server), "/movie/0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h2>Error</h2>"));
    assert!(html.contains("Failed to fetch movie details"));
    assert!(html.contains("Back to Home"));
}

#[tokio::test]
async fn test_placeholder_svg() {
    let server = Server::new_async().await;
    let response = build_app(&server)
        .oneshot(
            Request::builder()
                .uri("/placeholder.svg")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/svg+xml"
    );
}
