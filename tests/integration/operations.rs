//! Happy-path round trips for summarize, query and feedback.

use crate::integration::mock_server::MockServerFixture;
use serde_json::json;
use spout::{
    ArticleQueryRequest, ChatLog, Error, FeedbackRequest, Operation, SpoutApi, SummaryRequest,
    SummaryResponse,
};
use uuid::Uuid;

const QUERY_ID: &str = "6f1c2a9e-3b7d-4f0a-9c58-2d1e4b7a8c90";

#[tokio::test]
async fn test_summarize_returns_decoded_body() {
    let mut fixture = MockServerFixture::new().await;
    let body = r#"{"logs":[{"text":"deploy failed twice, rolled back","source":"summary"}]}"#;
    let mock = fixture
        .mock_with_request_body(
            Operation::Summarize,
            json!({"logs": [
                {"text": "deploy failed", "source": "slack"},
                {"text": "rolling back", "source": "slack"}
            ]}),
            200,
            body,
        )
        .await;

    let client = fixture.client();
    let req = SummaryRequest::new(vec![
        ChatLog::new("deploy failed", "slack"),
        ChatLog::new("rolling back", "slack"),
    ]);
    let resp = client.summarize(&req).await.expect("summarize failed");

    let expected: SummaryResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp, expected);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_query_returns_articles_and_query_id() {
    let mut fixture = MockServerFixture::new().await;
    let body = json!({
        "query_id": QUERY_ID,
        "articles": [
            {
                "article_id": "art-42",
                "confidence": 0.93,
                "source": "clarin",
                "source_url": "https://example.org/art-42",
                "article_body": "Full text",
                "article_title": "Headline"
            },
            {
                "article_id": "art-7",
                "confidence": 0.41,
                "source": "lavoz",
                "source_url": "https://example.org/art-7",
                "article_body": "",
                "article_title": "Other"
            }
        ]
    })
    .to_string();
    let mock = fixture
        .mock_with_request_body(Operation::Query, json!({"text_query": "inflation"}), 200, &body)
        .await;

    let resp = fixture
        .client()
        .query(&ArticleQueryRequest::new("inflation"))
        .await
        .expect("query failed");

    assert_eq!(resp.query_id, Uuid::parse_str(QUERY_ID).unwrap());
    assert_eq!(resp.articles.len(), 2);
    assert_eq!(resp.articles[0].article_id, "art-42");
    assert_eq!(resp.articles[1].confidence, 0.41);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_feedback_no_content_is_success() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_no_content(Operation::Feedback).await;

    let id = Uuid::parse_str(QUERY_ID).unwrap();
    fixture
        .client()
        .feedback(&FeedbackRequest::helpful(id))
        .await
        .expect("feedback failed");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unhelpful_feedback_omits_flag_on_the_wire() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_with_request_body(Operation::Feedback, json!({"query_id": QUERY_ID}), 204, "")
        .await;

    let id = Uuid::parse_str(QUERY_ID).unwrap();
    fixture
        .client()
        .feedback(&FeedbackRequest::unhelpful(id))
        .await
        .expect("feedback failed");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_feedback_with_ok_status_is_unexpected() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response(Operation::Feedback, 200, r#"{"ok":true}"#)
        .await;

    let err = fixture
        .client()
        .feedback(&FeedbackRequest::helpful(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(200));
    assert!(matches!(err, Error::UnexpectedStatus { operation: Operation::Feedback, .. }));
}

#[tokio::test]
async fn test_every_operation_sends_bearer_key() {
    let mut fixture = MockServerFixture::new().await;
    // Each mock only matches when the authorization header is exact.
    let summarize = fixture
        .mock_json_response(Operation::Summarize, 200, r#"{"logs":[]}"#)
        .await;
    let query = fixture
        .mock_json_response(
            Operation::Query,
            200,
            &json!({"query_id": QUERY_ID, "articles": []}).to_string(),
        )
        .await;
    let feedback = fixture.mock_no_content(Operation::Feedback).await;

    let client = fixture.client();
    client.summarize(&SummaryRequest::default()).await.unwrap();
    client.query(&ArticleQueryRequest::new("")).await.unwrap();
    client
        .feedback(&FeedbackRequest::helpful(Uuid::new_v4()))
        .await
        .unwrap();

    summarize.assert_async().await;
    query.assert_async().await;
    feedback.assert_async().await;
}

#[tokio::test]
async fn test_query_with_null_articles_is_empty_result() {
    let mut fixture = MockServerFixture::new().await;
    let body = format!(r#"{{"query_id":"{}","articles":null}}"#, QUERY_ID);
    let mock = fixture.mock_json_response(Operation::Query, 200, &body).await;

    let resp = fixture
        .client()
        .query(&ArticleQueryRequest::new("nothing matches this"))
        .await
        .expect("query failed");

    assert_eq!(resp.query_id, Uuid::parse_str(QUERY_ID).unwrap());
    assert!(resp.articles.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_summarize_through_trait_object() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_with_request_body(
            Operation::Summarize,
            json!({"logs": [{"text": "ping", "source": "irc"}]}),
            200,
            r#"{"logs":[{"text":"pong","source":"spout"}]}"#,
        )
        .await;

    let client = fixture.client();
    let api: &dyn SpoutApi = &client;
    let resp = api
        .summarize(&SummaryRequest::new(vec![ChatLog::new("ping", "irc")]))
        .await
        .expect("summarize failed");

    assert_eq!(resp.logs, vec![ChatLog::new("pong", "spout")]);
    mock.assert_async().await;
}
