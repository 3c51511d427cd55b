//! Full feed-to-detail flow over a local mock server.
//!
//! Drives the two controllers the way the UI task would: dispatch a load,
//! drain the event channel, hand off to the detail screen, toggle a like
//! there, and check the change is visible back on the feed.

use std::sync::Arc;

use postline::adapters::{AssumeOnline, ReqwestHttpClient};
use postline::app::{DetailController, FeedController, SortOrder};
use postline::client::ApiClient;
use postline::domain::{ExpansionState, LikeState};
use postline::error::FetchError;
use postline::events::AppEvent;
use postline::view_state::Dirty;
use tokio::sync::mpsc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED_BODY: &str = r#"{"posts":[
    {"id":1,"timestamp":1000,"title":"oldest","preview_text":"a","likes_count":3},
    {"id":2,"timestamp":3000,"title":"newest","preview_text":"b","likes_count":1},
    {"id":3,"timestamp":2000,"title":"middle","preview_text":"c","likes_count":3}
]}"#;

const POST_1_BODY: &str = r#"{"post":{"id":1,"timestamp":1000,"title":"oldest","text":"full text of the oldest post","post_image":"https://img/1.png","likes_count":3}}"#;

async fn server_with_feed() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/main.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED_BODY))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/posts/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(POST_1_BODY))
        .mount(&server)
        .await;
    server
}

fn feed_controller(
    base_url: String,
) -> (FeedController, mpsc::UnboundedReceiver<AppEvent>) {
    let client = Arc::new(ApiClient::with_base_url(
        base_url,
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(AssumeOnline),
    ));
    let (tx, rx) = mpsc::unbounded_channel();
    let feed = FeedController::new(client, LikeState::shared(), ExpansionState::shared(), tx);
    (feed, rx)
}

#[tokio::test]
async fn feed_to_detail_like_round_trip() {
    let server = server_with_feed().await;
    let (mut feed, mut rx) = feed_controller(server.uri());

    feed.load();
    assert!(feed.phase().is_loading());

    let event = rx.recv().await.unwrap();
    feed.handle_event(event);
    assert!(feed.phase().is_loaded());
    assert_eq!(feed.len(), 3);
    assert_eq!(feed.take_dirty(), Dirty::Everything);
    assert_eq!(feed.row_view_state(0).unwrap().effective_likes, 3);

    // open post 1 in the detail screen
    let mut detail: DetailController = feed.select(1);
    detail.load();
    let event = rx.recv().await.unwrap();
    detail.handle_event(event);

    let view = detail.view_state().unwrap();
    assert_eq!(view.text, "full text of the oldest post");
    assert_eq!(view.effective_likes, 3);

    // like it on the detail screen; the change flows back to the feed
    detail.toggle_like();
    assert_eq!(detail.view_state().unwrap().effective_likes, 4);

    let event = rx.recv().await.unwrap();
    assert!(matches!(event, AppEvent::LikeChanged { post_id: 1 }));
    feed.handle_event(event);

    let row = feed.row_view_state(0).unwrap();
    assert!(row.liked);
    assert_eq!(row.effective_likes, 4);
    assert_eq!(feed.take_dirty(), Dirty::Rows(vec![1]));
}

#[tokio::test]
async fn sorting_survives_a_refresh() {
    let server = server_with_feed().await;
    let (mut feed, mut rx) = feed_controller(server.uri());

    feed.load();
    let event = rx.recv().await.unwrap();
    feed.handle_event(event);

    feed.sort_by_date();
    assert_eq!(feed.order(), SortOrder::ByDate);
    let ids: Vec<_> = (0..3).map(|i| feed.item(i).unwrap().id).collect();
    assert_eq!(ids, vec![2, 3, 1]);

    feed.sort_by_likes();
    // 1 and 3 tie at 3 likes; arrival order breaks the tie
    let ids: Vec<_> = (0..3).map(|i| feed.item(i).unwrap().id).collect();
    assert_eq!(ids, vec![1, 3, 2]);

    // a refresh replaces rows and resets to arrival order
    feed.load();
    let event = rx.recv().await.unwrap();
    feed.handle_event(event);
    assert_eq!(feed.order(), SortOrder::Arrival);
    let ids: Vec<_> = (0..3).map(|i| feed.item(i).unwrap().id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn failed_load_keeps_rows_and_retry_recovers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/main.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED_BODY))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/main.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/main.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED_BODY))
        .mount(&server)
        .await;

    let (mut feed, mut rx) = feed_controller(server.uri());

    feed.load();
    let event = rx.recv().await.unwrap();
    feed.handle_event(event);
    assert_eq!(feed.len(), 3);

    // refresh hits the 503; the stale rows stay on screen
    feed.load();
    let event = rx.recv().await.unwrap();
    feed.handle_event(event);
    let err = feed.phase().failure().unwrap();
    assert!(matches!(err, FetchError::InvalidResponse { status: 503 }));
    assert!(err.is_retryable());
    assert_eq!(feed.len(), 3);

    // user-initiated retry succeeds
    feed.load();
    let event = rx.recv().await.unwrap();
    feed.handle_event(event);
    assert!(feed.phase().is_loaded());
}

#[tokio::test]
async fn expansion_is_feed_local() {
    let server = server_with_feed().await;
    let (mut feed, mut rx) = feed_controller(server.uri());

    feed.load();
    let event = rx.recv().await.unwrap();
    feed.handle_event(event);
    feed.take_dirty();

    feed.toggle_expansion(2);
    assert!(feed.row_view_state(1).unwrap().expanded);
    assert!(!feed.row_view_state(0).unwrap().expanded);
    assert_eq!(feed.take_dirty(), Dirty::Rows(vec![2]));

    // collapsing is the same gesture
    feed.toggle_expansion(2);
    assert!(!feed.row_view_state(1).unwrap().expanded);
}
