mod common;

use common::TestApp;
use http::StatusCode;
use serde_json::json;

fn record(kind: &str) -> serde_json::Value {
    json!({
        "record_type": kind,
        "equipment_product": "Frigorífico 1",
        "value": "3.2",
        "user_name": "Chef",
    })
}

#[tokio::test]
async fn alerts_follow_todays_counts() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let (status, body) = app.get("/api/haccp/alerts", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let alerts = body["alerts"].as_array().unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0]["type"], "warning");
    assert_eq!(alerts[0]["priority"], "high");
    assert_eq!(alerts[1]["priority"], "medium");

    for _ in 0..3 {
        app.post("/api/haccp", Some(&token), record("temperature")).await;
    }
    let (_, body) = app.get("/api/haccp/alerts", Some(&token)).await;
    assert_eq!(body["alerts"].as_array().unwrap().len(), 1);
    assert_eq!(body["alerts"][0]["priority"], "medium");

    for _ in 0..2 {
        app.post("/api/haccp", Some(&token), record("cleaning")).await;
    }
    let (_, body) = app.get("/api/haccp/alerts", Some(&token)).await;
    assert_eq!(body["alerts"], json!([]));
}

#[tokio::test]
async fn records_list_newest_first_with_filter() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    app.post("/api/haccp", Some(&token), record("cleaning")).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let (status, latest) = app
        .post("/api/haccp", Some(&token), record("goods_reception"))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, all) = app.get("/api/haccp", Some(&token)).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
    assert_eq!(all[0]["record_id"], latest["record_id"]);

    let (_, cleaning) = app
        .get("/api/haccp?record_type=cleaning", Some(&token))
        .await;
    assert_eq!(cleaning.as_array().unwrap().len(), 1);
    assert_eq!(cleaning[0]["record_type"], "cleaning");

    let (status, _) = app.post("/api/haccp", Some(&token), record("humidity")).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn dashboard_counts_today() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let (status, stats) = app.get("/api/dashboard/stats", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["today_reservations"], 0);
    assert_eq!(stats["occupancy_rate"], 0.0);
    assert_eq!(stats["upcoming_reservations"], json!([]));
    assert_eq!(stats["haccp_alerts"], 5);
    assert_eq!(stats["pending_records"], 5);

    app.post("/api/haccp", Some(&token), record("expiry")).await;
    app.post("/api/haccp", Some(&token), record("temperature")).await;

    let (_, stats) = app.get("/api/dashboard/stats", Some(&token)).await;
    assert_eq!(stats["haccp_alerts"], 3);

    let (status, _) = app.get("/api/dashboard/stats", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
