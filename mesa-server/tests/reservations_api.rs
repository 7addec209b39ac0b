mod common;

use common::{TestApp, reservation};
use http::StatusCode;
use serde_json::json;

// 2024-06-10 is a Monday, 2024-06-16 a Sunday
const MONDAY: &str = "2024-06-10";
const SUNDAY: &str = "2024-06-16";

fn settings(lunch_ceiling: u32, open_days: &[u8]) -> serde_json::Value {
    json!({
        "open_days": open_days,
        "lunch_start": "12:00",
        "lunch_end": "15:00",
        "dinner_start": "19:00",
        "dinner_end": "23:00",
        "avg_table_time": 90,
        "max_capacity_lunch": lunch_ceiling,
        "max_capacity_dinner": 60,
    })
}

#[tokio::test]
async fn admission_needs_settings() {
    let app = TestApp::new().await;
    let (status, body) = app
        .post("/api/reservations", None, reservation(2, MONDAY, "13:00"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E4001");
}

#[tokio::test]
async fn public_settings_read_creates_defaults() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/api/settings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["open_days"], json!([0, 1, 2, 3, 4, 5]));
    assert_eq!(body["lunch_start"], "12:00");
    assert_eq!(body["max_capacity_dinner"], 60);

    // Now admission works without anyone logging in
    let (status, body) = app
        .post("/api/reservations", None, reservation(2, MONDAY, "13:00"))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["status"], "confirmed");
    assert_eq!(body["meal_type"], "lunch");
    assert_eq!(body["table_id"], serde_json::Value::Null);
}

#[tokio::test]
async fn settings_update_requires_auth_and_validates() {
    let app = TestApp::new().await;
    let (status, _) = app.put("/api/settings", None, settings(50, &[0])).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = app.admin_token().await;
    let mut inverted = settings(50, &[0]);
    inverted["lunch_start"] = json!("16:00");
    let (status, body) = app.put("/api/settings", Some(&token), inverted).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    let (status, body) = app
        .put("/api/settings", Some(&token), settings(u32::MAX, &[0]))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    let (status, _) = app.get("/api/dashboard/stats", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .put("/api/settings", Some(&token), settings(20, &[4, 0, 0]))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["open_days"], json!([0, 4]));
    assert_eq!(body["max_capacity_lunch"], 20);
}

#[tokio::test]
async fn rejection_reasons_have_codes() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.put("/api/settings", Some(&token), settings(50, &[1, 2, 3, 4, 5, 6]))
        .await;

    let (status, body) = app
        .post("/api/reservations", None, reservation(2, MONDAY, "13:00"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E4003");

    let (_, body) = app
        .post("/api/reservations", None, reservation(2, SUNDAY, "17:00"))
        .await;
    assert_eq!(body["code"], "E4004");

    let (_, body) = app
        .post("/api/reservations", None, reservation(2, "16/06/2024", "13:00"))
        .await;
    assert_eq!(body["code"], "E4002");

    let (status, body) = app
        .post("/api/reservations", None, reservation(0, SUNDAY, "13:00"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    let mut blank = reservation(2, SUNDAY, "13:00");
    blank["name"] = json!("   ");
    let (_, body) = app.post("/api/reservations", None, blank).await;
    assert_eq!(body["code"], "E0002");

    let (_, list) = app.get("/api/reservations", Some(&token)).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn ceiling_scenario_over_http() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.get("/api/settings", None).await;

    for _ in 0..6 {
        let (status, _) = app
            .post("/api/reservations", None, reservation(8, MONDAY, "12:00"))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = app
        .post("/api/reservations", None, reservation(3, MONDAY, "13:00"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E4005");

    let (status, _) = app
        .post("/api/reservations", None, reservation(2, MONDAY, "15:00"))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, lunch) = app
        .get(&format!("/api/reservations?date={MONDAY}"), Some(&token))
        .await;
    let total: u64 = lunch
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["guests"].as_u64().unwrap())
        .sum();
    assert_eq!(total, 50);
}

#[tokio::test]
async fn tables_are_assigned_first_fit_and_freed_on_cancel() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.get("/api/settings", None).await;

    let (_, room) = app
        .post("/api/rooms", Some(&token), json!({ "name": "Sala", "capacity": 20 }))
        .await;
    let room_id = room["room_id"].as_str().unwrap().to_string();
    let (_, small) = app
        .post(
            "/api/tables",
            Some(&token),
            json!({ "number": "1", "room_id": room_id, "capacity": 2 }),
        )
        .await;
    let (_, large) = app
        .post(
            "/api/tables",
            Some(&token),
            json!({ "number": "2", "room_id": room_id, "capacity": 6 }),
        )
        .await;

    let (_, a) = app
        .post("/api/reservations", None, reservation(2, MONDAY, "20:00"))
        .await;
    assert_eq!(a["table_id"], small["table_id"]);
    assert_eq!(a["meal_type"], "dinner");

    let (_, b) = app
        .post("/api/reservations", None, reservation(2, MONDAY, "20:30"))
        .await;
    assert_eq!(b["table_id"], large["table_id"]);

    let (_, c) = app
        .post("/api/reservations", None, reservation(2, MONDAY, "21:00"))
        .await;
    assert_eq!(c["status"], "confirmed");
    assert_eq!(c["table_id"], serde_json::Value::Null);

    let a_id = a["reservation_id"].as_str().unwrap();
    let (status, _) = app
        .delete(&format!("/api/reservations/{a_id}"), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, cancelled) = app
        .get("/api/reservations?status=cancelled", Some(&token))
        .await;
    assert_eq!(cancelled.as_array().unwrap().len(), 1);
    assert_eq!(cancelled[0]["reservation_id"], a["reservation_id"]);

    let (_, d) = app
        .post("/api/reservations", None, reservation(2, MONDAY, "22:00"))
        .await;
    assert_eq!(d["table_id"], small["table_id"]);
}

#[tokio::test]
async fn administrative_update_and_cancel() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.get("/api/settings", None).await;

    let (_, r) = app
        .post("/api/reservations", None, reservation(2, MONDAY, "13:00"))
        .await;
    let id = r["reservation_id"].as_str().unwrap();

    let (status, updated) = app
        .put(
            &format!("/api/reservations/{id}"),
            Some(&token),
            json!({ "time": "20:00", "guests": 90, "notes": "birthday" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["meal_type"], "dinner");
    assert_eq!(updated["guests"], 90);
    assert_eq!(updated["time"], "20:00");
    assert_eq!(updated["notes"], "birthday");

    let (status, body) = app
        .put(
            &format!("/api/reservations/{id}"),
            Some(&token),
            json!({ "time": "17:00" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E4004");

    let (status, body) = app
        .put(
            "/api/reservations/does-not-exist",
            Some(&token),
            json!({ "guests": 2 }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");

    let (status, _) = app
        .delete("/api/reservations/does-not-exist", Some(&token))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/api/reservations", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn oversized_parties_are_rejected() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.get("/api/settings", None).await;

    let (status, body) = app
        .post("/api/reservations", None, reservation(501, MONDAY, "13:00"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    let (_, r) = app
        .post("/api/reservations", None, reservation(2, MONDAY, "13:00"))
        .await;
    let id = r["reservation_id"].as_str().unwrap();

    let (status, body) = app
        .put(
            &format!("/api/reservations/{id}"),
            Some(&token),
            json!({ "guests": 4294967295u64 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    let (status, next) = app
        .post("/api/reservations", None, reservation(1, MONDAY, "13:00"))
        .await;
    assert_eq!(status, StatusCode::OK, "{next}");
    assert_eq!(next["status"], "confirmed");
}

#[tokio::test]
async fn unknown_status_filter_uses_error_body() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .get("/api/reservations?status=bogus", Some(&token))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
    assert!(body["message"].as_str().unwrap().contains("bogus"));
}
