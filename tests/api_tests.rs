//! API integration tests
//!
//! These run against a live server on localhost:8080 with a fresh database.
//! The server creates the bootstrap admin account (admin@turfbook.local /
//! admin1234, from config/default.toml) on startup.
//! Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Login as the seeded admin and return a bearer token
async fn admin_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@turfbook.local",
            "password": "admin1234"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

/// Register a fresh user and return a bearer token
async fn user_token(client: &Client) -> String {
    let unique = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "name": "Test User",
            "email": format!("user{}@example.com", unique),
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to send register request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse register response");
    body["token"].as_str().expect("No token in response").to_string()
}

/// Create a city, venue and turf; returns (venue_id, turf_id)
async fn setup_turf(client: &Client, token: &str, duration: i64, buffer: i64) -> (i64, i64) {
    let unique = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    let response = client
        .post(format!("{}/cities", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": format!("Test City {}", unique) }))
        .send()
        .await
        .expect("Failed to create city");
    assert_eq!(response.status(), 201);
    let city: Value = response.json().await.unwrap();

    let response = client
        .post(format!("{}/venues", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "cityId": city["id"],
            "name": "Test Arena",
            "address": "1 Test Street"
        }))
        .send()
        .await
        .expect("Failed to create venue");
    assert_eq!(response.status(), 201);
    let venue: Value = response.json().await.unwrap();

    let response = client
        .post(format!("{}/turfs", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "venueId": venue["id"],
            "name": "Main Pitch",
            "sportType": "football",
            "pricePerHour": 1200.0,
            "slotDurationMinutes": duration,
            "bufferMinutes": buffer
        }))
        .send()
        .await
        .expect("Failed to create turf");
    assert_eq!(response.status(), 201);
    let turf: Value = response.json().await.unwrap();

    (
        venue["id"].as_i64().unwrap(),
        turf["id"].as_i64().unwrap(),
    )
}

/// Generate slots for a turf+date and return the created slot records
async fn generate_slots(
    client: &Client,
    token: &str,
    turf_id: i64,
    date: &str,
    start: &str,
    end: &str,
) -> Vec<Value> {
    let response = client
        .post(format!("{}/slots/generate", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "turfId": turf_id,
            "date": date,
            "startTime": start,
            "endTime": end
        }))
        .send()
        .await
        .expect("Failed to generate slots");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    body["slots"].as_array().unwrap().clone()
}

async fn fetch_slot_status(client: &Client, turf_id: i64, date: &str, slot_id: i64) -> String {
    let response = client
        .get(format!("{}/slots?turfId={}&date={}", BASE_URL, turf_id, date))
        .send()
        .await
        .expect("Failed to list slots");
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    body["slots"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"].as_i64() == Some(slot_id))
        .expect("Slot not in listing")["status"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_bootstrap_admin_can_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@turfbook.local",
            "password": "admin1234"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"]["role"], "admin");
    assert!(body["token"].as_str().is_some());
}

#[tokio::test]
#[ignore]
async fn test_register_rejects_weak_input() {
    let client = Client::new();

    // Short password
    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "name": "Test User",
            "email": "weak@example.com",
            "password": "short"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"].as_str().is_some());

    // Malformed email
    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "name": "Test User",
            "email": "not-an-email",
            "password": "password123"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_malformed_body_is_400_with_json_message() {
    let client = Client::new();

    // Missing required field
    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({ "name": "No Credentials" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"].as_str().is_some());

    // Body that is not JSON at all
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .header("Content-Type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
#[ignore]
async fn test_generate_slots_missing_field_is_400() {
    let client = Client::new();
    let token = admin_token(&client).await;

    let response = client
        .post(format!("{}/slots/generate", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "turfId": 1,
            "date": "2025-06-01",
            "endTime": "10:00"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@turfbook.local",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_slot_listing_requires_turf_and_date() {
    let client = Client::new();

    let response = client
        .get(format!("{}/slots?turfId=1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let response = client
        .get(format!("{}/slots?date=2025-06-01", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_generate_slots_returns_buffered_grid() {
    let client = Client::new();
    let token = admin_token(&client).await;
    let (_venue_id, turf_id) = setup_turf(&client, &token, 60, 15).await;

    let slots = generate_slots(&client, &token, turf_id, "2025-06-01", "06:00", "10:00").await;

    // 06:00-07:00, 07:15-08:15, 08:30-09:30; the fourth slot would end at
    // 10:45 and is discarded
    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0]["startTime"], "06:00");
    assert_eq!(slots[0]["endTime"], "07:00");
    assert_eq!(slots[1]["startTime"], "07:15");
    assert_eq!(slots[2]["startTime"], "08:30");
    assert!(slots.iter().all(|s| s["status"] == "AVAILABLE"));
}

#[tokio::test]
#[ignore]
async fn test_generate_slots_unknown_turf_is_404() {
    let client = Client::new();
    let token = admin_token(&client).await;

    let response = client
        .post(format!("{}/slots/generate", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "turfId": 999999,
            "date": "2025-06-01",
            "startTime": "06:00",
            "endTime": "10:00"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_regeneration_replaces_previous_grid() {
    let client = Client::new();
    let token = admin_token(&client).await;
    let (_venue_id, turf_id) = setup_turf(&client, &token, 60, 0).await;

    let first = generate_slots(&client, &token, turf_id, "2025-06-02", "06:00", "10:00").await;
    assert_eq!(first.len(), 4);

    let second = generate_slots(&client, &token, turf_id, "2025-06-02", "08:00", "11:00").await;
    assert_eq!(second.len(), 3);

    // Only the second grid survives
    let response = client
        .get(format!("{}/slots?turfId={}&date=2025-06-02", BASE_URL, turf_id))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    let listed = body["slots"].as_array().unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0]["startTime"], "08:00");
    assert_eq!(listed[2]["endTime"], "11:00");
}

#[tokio::test]
#[ignore]
async fn test_concurrent_bookings_exactly_one_wins() {
    let client = Client::new();
    let admin = admin_token(&client).await;
    let (venue_id, turf_id) = setup_turf(&client, &admin, 60, 0).await;
    let slots = generate_slots(&client, &admin, turf_id, "2025-06-03", "06:00", "07:00").await;
    let slot_id = slots[0]["id"].as_i64().unwrap();

    let user_a = user_token(&client).await;
    let user_b = user_token(&client).await;

    let payload = json!({
        "slotId": slot_id,
        "venueId": venue_id,
        "bookingDate": "2025-06-03"
    });

    let req_a = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", user_a))
        .json(&payload)
        .send();
    let req_b = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", user_b))
        .json(&payload)
        .send();

    let (res_a, res_b) = tokio::join!(req_a, req_b);
    let status_a = res_a.unwrap().status().as_u16();
    let status_b = res_b.unwrap().status().as_u16();

    let mut statuses = [status_a, status_b];
    statuses.sort();
    assert_eq!(statuses, [201, 409]);

    // The slot ends BOOKED, never AVAILABLE
    let status = fetch_slot_status(&client, turf_id, "2025-06-03", slot_id).await;
    assert_eq!(status, "BOOKED");
}

#[tokio::test]
#[ignore]
async fn test_cancel_then_rebook_cycle() {
    let client = Client::new();
    let admin = admin_token(&client).await;
    let (venue_id, turf_id) = setup_turf(&client, &admin, 60, 0).await;
    let slots = generate_slots(&client, &admin, turf_id, "2025-06-04", "06:00", "07:00").await;
    let slot_id = slots[0]["id"].as_i64().unwrap();

    let user = user_token(&client).await;
    let payload = json!({
        "slotId": slot_id,
        "venueId": venue_id,
        "bookingDate": "2025-06-04"
    });

    // Book
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", user))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let booking: Value = response.json().await.unwrap();
    assert_eq!(booking["status"], "confirmed");
    let booking_id = booking["id"].as_i64().unwrap();

    // Cancel reverts the slot to AVAILABLE
    let response = client
        .put(format!("{}/bookings/{}/cancel", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", user))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let cancelled: Value = response.json().await.unwrap();
    assert_eq!(cancelled["status"], "cancelled");

    let status = fetch_slot_status(&client, turf_id, "2025-06-04", slot_id).await;
    assert_eq!(status, "AVAILABLE");

    // Rebook the same slot
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", user))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let status = fetch_slot_status(&client, turf_id, "2025-06-04", slot_id).await;
    assert_eq!(status, "BOOKED");
}

#[tokio::test]
#[ignore]
async fn test_double_cancel_is_conflict_and_slot_unchanged() {
    let client = Client::new();
    let admin = admin_token(&client).await;
    let (venue_id, turf_id) = setup_turf(&client, &admin, 60, 0).await;
    let slots = generate_slots(&client, &admin, turf_id, "2025-06-05", "06:00", "07:00").await;
    let slot_id = slots[0]["id"].as_i64().unwrap();

    let user = user_token(&client).await;
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", user))
        .json(&json!({
            "slotId": slot_id,
            "venueId": venue_id,
            "bookingDate": "2025-06-05"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let booking: Value = response.json().await.unwrap();
    let booking_id = booking["id"].as_i64().unwrap();

    let response = client
        .put(format!("{}/bookings/{}/cancel", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", user))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = client
        .put(format!("{}/bookings/{}/cancel", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", user))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 409);

    // Second cancel left the slot alone
    let status = fetch_slot_status(&client, turf_id, "2025-06-05", slot_id).await;
    assert_eq!(status, "AVAILABLE");
}

#[tokio::test]
#[ignore]
async fn test_cancel_requires_owner_or_admin() {
    let client = Client::new();
    let admin = admin_token(&client).await;
    let (venue_id, turf_id) = setup_turf(&client, &admin, 60, 0).await;
    let slots = generate_slots(&client, &admin, turf_id, "2025-06-06", "06:00", "07:00").await;
    let slot_id = slots[0]["id"].as_i64().unwrap();

    let owner = user_token(&client).await;
    let stranger = user_token(&client).await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", owner))
        .json(&json!({
            "slotId": slot_id,
            "venueId": venue_id,
            "bookingDate": "2025-06-06"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let booking: Value = response.json().await.unwrap();
    let booking_id = booking["id"].as_i64().unwrap();

    // Another user cannot cancel
    let response = client
        .put(format!("{}/bookings/{}/cancel", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", stranger))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 403);

    // An admin can
    let response = client
        .put(format!("{}/bookings/{}/cancel", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", admin))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_booking_blocked_slot_is_conflict() {
    let client = Client::new();
    let admin = admin_token(&client).await;
    let (venue_id, turf_id) = setup_turf(&client, &admin, 60, 0).await;
    let slots = generate_slots(&client, &admin, turf_id, "2025-06-07", "06:00", "07:00").await;
    let slot_id = slots[0]["id"].as_i64().unwrap();

    // Admin blocks the slot directly
    let response = client
        .put(format!("{}/slots/{}", BASE_URL, slot_id))
        .header("Authorization", format!("Bearer {}", admin))
        .json(&json!({ "status": "BLOCKED", "blockedBy": "maintenance" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let user = user_token(&client).await;
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", user))
        .json(&json!({
            "slotId": slot_id,
            "venueId": venue_id,
            "bookingDate": "2025-06-07"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_slot_admin_routes_reject_non_admin() {
    let client = Client::new();
    let user = user_token(&client).await;

    let response = client
        .post(format!("{}/slots/generate", BASE_URL))
        .header("Authorization", format!("Bearer {}", user))
        .json(&json!({
            "turfId": 1,
            "date": "2025-06-01",
            "startTime": "06:00",
            "endTime": "10:00"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 403);

    let response = client
        .delete(format!("{}/slots/1", BASE_URL))
        .header("Authorization", format!("Bearer {}", user))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 403);
}
