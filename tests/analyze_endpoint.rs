//! HTTP behavior tests for the catalog insights router.

use std::fs;
use std::path::Path;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use catalog_insights::{analyzer_router, AnalyzerConfig, AppState, DataLoader};
use tempfile::tempdir;
use tower::ServiceExt;

const HEADER: &str = "product_id,product_name,category,discounted_price,actual_price,discount_percentage,rating,rating_count";

fn router_for(csv: &str) -> axum::Router {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("amazon.csv");
    fs::write(&path, csv).expect("write fixture");
    router_for_path(&path)
}

fn router_for_path(path: &Path) -> axum::Router {
    let table = DataLoader::load_catalog(path).expect("load catalog");
    analyzer_router(AppState::new(table, AnalyzerConfig::default()))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    (status, body.to_vec())
}

fn catalog_csv() -> String {
    let rows = [
        "B01,Cable,Computers&Accessories|Cables|USB,₹399,\"₹1,099\",64%,4.2,\"24,269\"",
        "B02,Charger,Electronics|Chargers,₹199,₹349,43%,4.0,\"43,994\"",
        "B03,Mouse,Computers&Accessories|Mice,₹299,₹599,50%,4.3,\"7,928\"",
        "B04,Kettle,Home&Kitchen|Kitchen,₹899,\"₹1,999\",55%,3.9,\"1,200\"",
        "B05,Bad Rating,Electronics|Misc,₹99,₹199,50%,|,992",
        "B06,Earbuds,Electronics|Audio,\"₹1,299\",\"₹2,999\",57%,4.1,\"15,000\"",
        "B07,Book,Books,₹150,₹300,50%,4.6,100",
        "B08,Lamp,Home&Kitchen|Lighting,₹450,₹900,50%,4.0,350",
    ];
    format!("{HEADER}\n{}\n", rows.join("\n"))
}

#[tokio::test]
async fn test_index_page_is_served() {
    let (status, body) = get(router_for(&catalog_csv()), "/").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).expect("utf8");
    assert!(html.contains("/static/script.js"));
    assert!(html.contains("processButton"));
}

#[tokio::test]
async fn test_script_is_served() {
    let (status, body) = get(router_for(&catalog_csv()), "/static/script.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).expect("utf8").contains("/api/analyze"));
}

#[tokio::test]
async fn test_analyze_returns_all_views() {
    let (status, body) = get(router_for(&catalog_csv()), "/api/analyze").await;
    assert_eq!(status, StatusCode::OK);

    let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
    for key in [
        "head",
        "info",
        "missing",
        "describe",
        "top_categories",
        "avg_rating_categories",
        "discount_rating_insight",
    ] {
        assert!(payload.get(key).is_some(), "missing key {key}");
    }

    let head = payload["head"].as_str().expect("head markup");
    assert!(head.starts_with("<table"));
    // Header row plus five preview rows.
    assert_eq!(head.matches("<tr>").count(), 6);

    // The row with a "|" rating was dropped.
    let info = payload["info"].as_str().expect("info text");
    assert!(info.contains("7 entries"));

    assert_eq!(
        payload["missing"].as_str(),
        Some(catalog_insights::web::NO_MISSING_VALUES)
    );

    let insight = payload["discount_rating_insight"]
        .as_str()
        .expect("insight text");
    assert!(insight.starts_with("The correlation between discount percentage and rating is"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_requests_share_table() {
    let app = router_for(&catalog_csv());
    let (first, second) = tokio::join!(
        get(app.clone(), "/api/analyze"),
        get(app, "/api/analyze")
    );
    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(second.0, StatusCode::OK);
    assert_eq!(first.1, second.1);
}

#[tokio::test]
async fn test_category_maps_keep_order() {
    let (_, body) = get(router_for(&catalog_csv()), "/api/analyze").await;

    // Parse into ordered maps to observe key order from the wire.
    #[derive(serde::Deserialize)]
    struct Maps {
        top_categories: indexmap::IndexMap<String, u32>,
        avg_rating_categories: indexmap::IndexMap<String, f64>,
    }
    let maps: Maps = serde_json::from_slice(&body).expect("json payload");

    let top: Vec<(&str, u32)> = maps
        .top_categories
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    assert_eq!(
        top,
        vec![
            ("Computers&Accessories", 2),
            ("Electronics", 2),
            ("Home&Kitchen", 2),
            ("Books", 1),
        ]
    );

    assert!(maps
        .avg_rating_categories
        .keys()
        .all(|k| maps.top_categories.contains_key(k)));
    let means: Vec<f64> = maps.avg_rating_categories.values().copied().collect();
    assert!(means.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(maps.avg_rating_categories.get_index(0).map(|(k, _)| k.as_str()), Some("Books"));
}

#[tokio::test]
async fn test_missing_values_table_when_prices_malformed() {
    let csv = format!(
        "{HEADER}\nB01,A,Books,free,₹300,50%,4.6,100\nB02,B,Books,₹100,₹200,50%,4.0,10\n"
    );
    let (status, body) = get(router_for(&csv), "/api/analyze").await;
    assert_eq!(status, StatusCode::OK);
    let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
    let missing = payload["missing"].as_str().expect("missing markup");
    assert!(missing.contains("<td>discounted_price</td>"));
    assert!(missing.contains("<td>1</td>"));
}

#[tokio::test]
async fn test_single_pair_reports_insufficient_data() {
    let csv = format!("{HEADER}\nB01,A,Books,₹150,₹300,50%,4.6,100\n");
    let (status, body) = get(router_for(&csv), "/api/analyze").await;
    assert_eq!(status, StatusCode::OK);
    let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
    assert!(payload["discount_rating_insight"]
        .as_str()
        .expect("insight")
        .starts_with("Insufficient data"));
}

#[tokio::test]
async fn test_empty_table_is_server_error() {
    let csv = format!("{HEADER}\nB01,A,Books,₹150,₹300,50%,|,100\nB02,B,Books,₹150,₹300,50%,4.0,\n");
    let (status, body) = get(router_for(&csv), "/api/analyze").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
    let message = payload
        .pointer("/error")
        .and_then(serde_json::Value::as_str)
        .expect("error message");
    assert!(!message.is_empty());
    assert!(payload.get("head").is_none());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, body) = get(router_for(&catalog_csv()), "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
    assert_eq!(payload["error"].as_str(), Some("not found: /api/unknown"));
}
