//! HTTP-level tests for the pedinfo router.
//! Drives the router in-process; no socket is bound.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use pedinfo_catalog::Catalog;
use pedinfo_web::config::Config;
use pedinfo_web::router::build_router;
use pedinfo_web::state::AppState;

fn app() -> Router {
    let catalog = Catalog::load().expect("catalog builds");
    build_router(AppState::new(catalog, Config::default()))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), 1 << 20).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn ids(list: &Value) -> Vec<u64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn list_diseases_unfiltered() {
    let (status, body) = get("/diseases").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (1..=45).collect::<Vec<u64>>());
    assert_eq!(
        body[0],
        json!({
            "id": 1,
            "name": "Корь",
            "age_group": "Дошкольный возраст",
            "pathogen_type": "Вирус"
        })
    );
}

#[tokio::test]
async fn list_diseases_by_age_group_label() {
    let (status, body) =
        get("/diseases?age_group=%D0%94%D0%B5%D1%82%D0%B8%20%D0%B4%D0%BE%207%20%D0%BB%D0%B5%D1%82").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![2, 7, 16, 25]);
}

#[tokio::test]
async fn list_diseases_combined_filters() {
    let uri = "/diseases?transmission=%D0%A4%D0%B5%D0%BA%D0%B0%D0%BB%D1%8C%D0%BD%D0%BE-%D0%BE%D1%80%D0%B0%D0%BB%D1%8C%D0%BD%D1%8B%D0%B9\
               &pathogen_type=%D0%BF%D0%B0%D1%80%D0%B0%D0%B7%D0%B8%D1%82";
    let (status, body) = get(uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![24, 43]);
}

#[tokio::test]
async fn list_diseases_no_match_is_empty() {
    let (status, body) = get("/diseases?q=zzz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_diseases_invalid_age_group_is_422() {
    let (status, body) = get("/diseases?age_group=teenagers").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn get_disease_with_statistics() {
    let (status, body) = get("/diseases/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Корь");
    assert_eq!(body["transmission"], "Воздушно-капельный");
    assert_eq!(body["prevention"], "Вакцинация по национальному календарю");

    let symptoms: Vec<u64> = body["symptoms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_u64().unwrap())
        .collect();
    assert_eq!(symptoms, vec![1, 2, 10]);

    let stats = body["statistics"].as_array().unwrap();
    assert_eq!(stats.len(), 12);
    assert_eq!(
        stats[0],
        json!({ "disease_id": 1, "year": 2021, "season": "Зима", "cases": 40 })
    );
    assert!(stats.iter().all(|s| s["disease_id"] == 1));
}

#[tokio::test]
async fn get_unknown_disease_is_404() {
    for uri in ["/diseases/0", "/diseases/46", "/diseases/-5"] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body, json!({ "detail": "Заболевание не найдено" }));
    }
}

#[tokio::test]
async fn get_disease_beyond_i64_is_404() {
    for uri in ["/diseases/99999999999999999999", "/diseases/-99999999999999999999"] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body, json!({ "detail": "Заболевание не найдено" }));
    }
}

#[tokio::test]
async fn get_disease_non_integer_id_is_422() {
    let (status, _) = get("/diseases/measles").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_symptoms_in_order() {
    let (status, body) = get("/symptoms").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (1..=10).collect::<Vec<u64>>());
    assert_eq!(
        body[9],
        json!({ "id": 10, "name": "Увеличение лимфоузлов", "description": "Лимфаденопатия" })
    );
}

#[tokio::test]
async fn search_by_symptom_hits() {
    let (status, body) = get("/search/by-symptom/9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![4, 9, 19]);
}

#[tokio::test]
async fn search_by_unused_symptom_is_404() {
    let (status, body) = get("/search/by-symptom/11").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Нет заболеваний с данным симптомом" }));
}

#[tokio::test]
async fn search_by_symptom_beyond_i64_is_404() {
    let (status, body) = get("/search/by-symptom/99999999999999999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Нет заболеваний с данным симптомом" }));

    let (status, _) = get("/search/by-symptom/fever").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn statistics_beyond_i64_is_empty() {
    for uri in ["/statistics?disease_id=99999999999999999999", "/statistics?year=99999999999999999999"] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, json!([]));
    }
}

#[tokio::test]
async fn statistics_filters() {
    let (status, all) = get("/statistics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 540);

    let (status, body) = get("/statistics?year=2021&season=%D0%97%D0%B8%D0%BC%D0%B0&disease_id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "disease_id": 1, "year": 2021, "season": "Зима", "cases": 40 }]));

    let (status, body) = get("/statistics?season=summer&disease_id=7").await;
    assert_eq!(status, StatusCode::OK);
    let cases: Vec<u64> = body.as_array().unwrap().iter().map(|s| s["cases"].as_u64().unwrap()).collect();
    assert_eq!(cases, vec![96, 107, 116]);

    let (status, body) = get("/statistics?disease_id=999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn statistics_invalid_season_is_422() {
    let (status, _) = get("/statistics?season=monsoon").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = get("/statistics?year=last").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn filter_meta_lists() {
    let (status, body) = get("/meta/filters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["age_groups"],
        json!(["Дети до 7 лет", "Детский возраст", "Дошкольный возраст"])
    );
    assert_eq!(
        body["transmissions"],
        json!([
            "Воздушно-капельный",
            "Восходящий путь из носоглотки",
            "Контактно-бытовой",
            "Контактный",
            "Трансмиссивный",
            "Фекально-оральный"
        ])
    );
    assert_eq!(
        body["pathogen_types"],
        json!(["Бактерии", "Бактерия", "Вирус", "Грибок", "Паразит"])
    );
}

#[tokio::test]
async fn index_serves_html() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let body = to_bytes(response.into_body(), 1 << 20).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("/static/js/main.js"));
}

#[tokio::test]
async fn static_assets_are_served() {
    let request = Request::builder().uri("/static/js/main.js").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
