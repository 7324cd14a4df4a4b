use strava_client::http_client::ReqwestStravaClient;
use strava_client::{StravaApi, StravaError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn list_activities_passes_bearer_auth_and_window_query() {
    let server = MockServer::start().await;
    let body = serde_json::json!([
        {"id": 11, "name": "Morning Run", "type": "Run",
         "start_date": "2024-07-01T06:30:00Z", "elapsed_time": 1550},
        {"id": 12, "name": "Core", "type": "Workout",
         "start_date": "2024-07-02T18:00:00Z", "elapsed_time": 1200}
    ]);
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .and(header("authorization", "Bearer tok"))
        .and(query_param("after", "1719792000"))
        .and(query_param("before", "1720396799"))
        .and(query_param("per_page", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = ReqwestStravaClient::new(&server.uri());
    let activities = client
        .list_activities("tok", 1_719_792_000, 1_720_396_799, 200)
        .await
        .expect("activities");
    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].id, 11);
    assert_eq!(activities[0].activity_type, "Run");
    assert_eq!(activities[1].activity_type, "Workout");
}

#[tokio::test]
async fn get_activity_parses_detail_with_splits() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "id": 11,
        "name": "Morning Run",
        "start_date": "2024-07-01T06:30:00Z",
        "distance": 5000.0,
        "moving_time": 1500,
        "elapsed_time": 1550,
        "average_speed": 3.333,
        "calories": 312.7,
        "splits_metric": [
            {"split": 1, "distance": 1000.0, "moving_time": 300,
             "average_speed": 3.333, "average_heartrate": 150.4,
             "elevation_difference": 2.3}
        ]
    });
    Mock::given(method("GET"))
        .and(path("/api/v3/activities/11"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = ReqwestStravaClient::new(&server.uri());
    let detail = client.get_activity("tok", 11).await.expect("detail");
    assert_eq!(detail.distance, 5000.0);
    assert_eq!(detail.calories, Some(312.7));
    let splits = detail.splits_metric.expect("splits");
    assert_eq!(splits.len(), 1);
    assert_eq!(splits[0].average_heartrate, Some(150.4));
}

#[tokio::test]
async fn unauthorized_list_maps_to_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "Authorization Error"})),
        )
        .mount(&server)
        .await;

    let client = ReqwestStravaClient::new(&server.uri());
    match client.list_activities("bad", 0, 1, 200).await {
        Err(StravaError::Remote { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("Authorization Error"));
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}
