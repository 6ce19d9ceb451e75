//! Full request flows against PostgreSQL in a container.

use axum::Router;
use axum::http::StatusCode;
use serde_json::json;

use crate::integration::common::{
    app_with_pool, cookie_pair, get, json_body, post_json, seed_example, send, set_cookie,
    setup_test_db,
};

const PASSWORD: &str = "correct horse battery staple";

async fn login(app: &Router) -> String {
    let body = json!({"email": "rivera@school.test", "password": PASSWORD});
    let response = send(app, post_json("/teacher/login", &body, None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = set_cookie(&response).expect("session cookie");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert_eq!(
        json_body(response).await,
        json!({"success": true, "teacher": {"name": "Ms. Rivera", "id": 5}})
    );
    cookie_pair(&cookie)
}

#[tokio::test]
async fn test_mark_then_view_attendance() {
    let (pool, _container) = setup_test_db().await;
    seed_example(&pool, PASSWORD).await;
    let (app, _key) = app_with_pool(pool);
    let cookie = login(&app).await;

    let mark = json!({
        "schedule_id": 12,
        "date": "2024-05-06",
        "attendance_data": [{"student_id": 1, "status": "present"}]
    });
    let response = send(
        &app,
        post_json("/api/teacher/mark_attendance", &mark, Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"success": true, "message": "Attendance for 1 students saved."})
    );

    let response = send(
        &app,
        get(
            "/api/teacher/attendance?schedule_id=12&date=2024-05-06",
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let data = body["data"].as_array().expect("data array");

    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["student_name"], "Alice");
    assert_eq!(data[0]["status"], "present");
    assert!(data[0]["timestamp"].is_string());
    assert_eq!(data[1]["student_name"], "Bob");
    assert_eq!(data[1]["student_email"], "bob@school.test");
    assert_eq!(data[1]["status"], "absent");
    assert!(data[1]["timestamp"].is_null());
}

#[tokio::test]
async fn test_marking_twice_keeps_latest_status() {
    let (pool, _container) = setup_test_db().await;
    seed_example(&pool, PASSWORD).await;
    let (app, _key) = app_with_pool(pool.clone());
    let cookie = login(&app).await;

    for status in ["present", "absent", "late"] {
        let mark = json!({
            "schedule_id": "12",
            "date": "2024-05-06",
            "attendance_data": [{"student_id": 2, "status": status}]
        });
        let response = send(
            &app,
            post_json("/api/teacher/mark_attendance", &mark, Some(&cookie)),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT status FROM attendance WHERE student_id = 2 AND schedule_id = 12",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert_eq!(rows, vec![("late".to_string(),)]);
}

#[tokio::test]
async fn test_failed_batch_saves_nothing() {
    let (pool, _container) = setup_test_db().await;
    seed_example(&pool, PASSWORD).await;
    let (app, _key) = app_with_pool(pool.clone());
    let cookie = login(&app).await;

    let mark = json!({
        "schedule_id": 12,
        "date": "2024-05-06",
        "attendance_data": [
            {"student_id": 1, "status": "present"},
            {"student_id": 404, "status": "present"}
        ]
    });
    let response = send(
        &app,
        post_json("/api/teacher/mark_attendance", &mark, Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["success"], json!(false));
    assert!(body["message"].as_str().unwrap().starts_with("Database error: "));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attendance")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_wrong_password_sets_no_session() {
    let (pool, _container) = setup_test_db().await;
    seed_example(&pool, PASSWORD).await;
    let (app, _key) = app_with_pool(pool);

    for body in [
        json!({"email": "rivera@school.test", "password": "wrong"}),
        json!({"email": "nobody@school.test", "password": PASSWORD}),
    ] {
        let response = send(&app, post_json("/teacher/login", &body, None)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(set_cookie(&response).is_none());
        assert_eq!(
            json_body(response).await,
            json!({"success": false, "message": "Invalid credentials."})
        );
    }
}

#[tokio::test]
async fn test_plaintext_stored_password_is_rejected() {
    let (pool, _container) = setup_test_db().await;
    sqlx::query(
        "INSERT INTO teachers (name, email, password_hash) VALUES ('Legacy', 'legacy@school.test', 'plain')",
    )
    .execute(&pool)
    .await
    .unwrap();
    let (app, _key) = app_with_pool(pool);

    let body = json!({"email": "legacy@school.test", "password": "plain"});
    let response = send(&app, post_json("/teacher/login", &body, None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_roster_and_unknown_schedule() {
    let (pool, _container) = setup_test_db().await;
    seed_example(&pool, PASSWORD).await;
    let (app, _key) = app_with_pool(pool);
    let cookie = login(&app).await;

    let response = send(
        &app,
        get("/api/teacher/class_students?schedule_id=12", Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"success": true, "data": [
            {"student_id": 1, "name": "Alice", "email": "alice@school.test", "batch": "B1"},
            {"student_id": 2, "name": "Bob", "email": "bob@school.test", "batch": "B1"}
        ]})
    );

    let response = send(
        &app,
        get("/api/teacher/class_students?schedule_id=999", Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        json!({"success": false, "message": "Schedule not found."})
    );

    let response = send(
        &app,
        get(
            "/api/teacher/attendance?schedule_id=999&date=2024-05-06",
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_batch_gives_empty_sheet() {
    let (pool, _container) = setup_test_db().await;
    seed_example(&pool, PASSWORD).await;
    let (app, _key) = app_with_pool(pool);
    let cookie = login(&app).await;

    // Schedule 13 is batch B2, which has no students
    let response = send(
        &app,
        get(
            "/api/teacher/attendance?schedule_id=13&date=2024-05-06",
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"success": true, "data": []}));
}

#[tokio::test]
async fn test_schedule_endpoints() {
    let (pool, _container) = setup_test_db().await;
    seed_example(&pool, PASSWORD).await;
    let (app, _key) = app_with_pool(pool);
    let cookie = login(&app).await;

    let response = send(&app, get("/api/teacher/schedule", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["data"][0],
        json!({
            "day_of_week": "Monday",
            "start_time": "08:30:00",
            "end_time": "09:30:00",
            "batch": "B2",
            "class_name": "10A",
            "subject_name": "Mathematics"
        })
    );
    assert_eq!(body["data"][1]["start_time"], "10:00:00");

    let response = send(&app, get("/api/teacher/all_classes", Some(&cookie))).await;
    let body = json_body(response).await;
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["schedule_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![12, 13]);

    // Depends on the current weekday; only the shape is stable
    let response = send(&app, get("/api/teacher/today_classes", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], json!(true));
    assert!(body["data"].is_array());

    let response = send(&app, get("/health", None)).await;
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
}
