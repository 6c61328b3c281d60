//! Messages endpoint tests against a mock server.

mod common;

use serde_json::json;
use sqwiggle::{
    AttachmentStatus, AttachmentType, CreateMessageRequest, Error, ErrorType, Message,
    UpdateMessageRequest, UserRole,
};
use wiremock::matchers::{basic_auth, body_string, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_message_decodes_every_field() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/messages/3423093"))
        .and(basic_auth(common::API_KEY, "X"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::message_json()))
        .expect(1)
        .mount(&server)
        .await;

    let message = client.messages().get(3423093).await.unwrap();

    assert_eq!(message.id, 3423093);
    assert_eq!(message.stream_id, 48914);
    assert_eq!(message.text, "");
    assert_eq!(message.author.name, "Herman Schaaf");
    assert_eq!(message.author.role, UserRole::Owner);
    assert_eq!(message.attachments.len(), 1);
    let attachment = &message.attachments[0];
    assert_eq!(attachment.id, 206099);
    assert_eq!(attachment.kind, AttachmentType::Image);
    assert_eq!(attachment.status, AttachmentStatus::Uploaded);
    assert_eq!(attachment.width, Some(3861));
    assert_eq!(attachment.height, Some(3861));
    assert!(message.mentions.is_empty());
    assert!(message.conversation_id.is_none());
}

#[tokio::test]
async fn test_message_survives_reencoding() {
    let (server, client) = common::setup().await;

    let original: Message = serde_json::from_value(common::message_json()).unwrap();
    let mut with_conversation = original.clone();
    with_conversation.conversation_id = Some(5521);

    Mock::given(method("GET"))
        .and(path("/messages/3423093"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&with_conversation))
        .mount(&server)
        .await;

    let fetched = client.messages().get(3423093).await.unwrap();
    assert_eq!(fetched, with_conversation);
    assert_eq!(fetched.conversation_id, Some(5521));
}

#[tokio::test]
async fn test_list_messages_without_pagination_sends_no_query() {
    let (server, client) = common::setup().await;

    let mut second = common::message_json();
    second["id"] = json!(3423092);
    let mut third = common::message_json();
    third["id"] = json!(3423001);

    Mock::given(method("GET"))
        .and(path("/messages"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([
                common::message_json(),
                second,
                third
            ])),
        )
        .mount(&server)
        .await;

    let messages = client.messages().list(0, 0).await.unwrap();

    let ids: Vec<u64> = messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![3423093, 3423092, 3423001]);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_list_messages_sends_positive_pagination() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let messages = client.messages().list(3, 50).await.unwrap();
    assert!(messages.is_empty());

    let messages = client.messages().list(0, 25).await.unwrap();
    assert!(messages.is_empty());

    let requests = server.received_requests().await.unwrap();
    let pairs: Vec<Vec<(String, String)>> = requests
        .iter()
        .map(|r| {
            r.url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect()
        })
        .collect();

    assert_eq!(
        pairs[0],
        vec![
            ("page".to_string(), "3".to_string()),
            ("limit".to_string(), "50".to_string())
        ]
    );
    assert_eq!(pairs[1], vec![("limit".to_string(), "25".to_string())]);
}

#[tokio::test]
async fn test_list_messages_tolerates_null_defaulted_fields() {
    let (server, client) = common::setup().await;

    let mut with_link = common::message_json();
    with_link["id"] = json!(3423094);
    with_link["text"] = json!(null);
    with_link["author"]["email"] = json!(null);
    with_link["author"]["snapshot_interval"] = json!(null);
    with_link["attachments"] = json!([{
        "id": 206100,
        "type": "link",
        "url": null,
        "title": "Sqwiggle",
        "description": null,
        "image": null,
        "status": null,
        "animated": null,
        "created_at": "2014-08-04T12:42:00.1Z",
        "updated_at": "2014-08-04T12:42:00.1Z"
    }]);

    Mock::given(method("GET"))
        .and(path("/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([with_link, common::message_json()])),
        )
        .mount(&server)
        .await;

    let messages = client.messages().list(0, 0).await.unwrap();
    assert_eq!(messages.len(), 2);

    let message = &messages[0];
    assert_eq!(message.id, 3423094);
    assert_eq!(message.stream_id, 48914);
    assert_eq!(message.text, "");
    assert_eq!(message.author.name, "Herman Schaaf");
    assert_eq!(message.author.email, "");
    assert_eq!(message.author.snapshot_interval, 0);

    let link = &message.attachments[0];
    assert_eq!(link.id, 206100);
    assert_eq!(link.kind, AttachmentType::Link);
    assert_eq!(link.status, AttachmentStatus::Unknown);
    assert_eq!(link.url, "");
    assert!(!link.animated);
    assert_eq!(link.title.as_deref(), Some("Sqwiggle"));

    assert_eq!(messages[1].attachments[0].status, AttachmentStatus::Uploaded);
}

#[tokio::test]
async fn test_create_message_sends_form_body() {
    let (server, client) = common::setup().await;

    let mut created = common::message_json();
    created["text"] = json!("wow");

    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(basic_auth(common::API_KEY, "X"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(201).set_body_json(created))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateMessageRequest::new(48914, "wow")
        .with_format("html")
        .with_parse(true);
    let message = client.messages().create(request).await.unwrap();
    assert_eq!(message.text, "wow");

    let requests = server.received_requests().await.unwrap();
    let mut form = common::form_pairs(&requests[0].body);
    form.sort();
    assert_eq!(
        form,
        vec![
            ("format".to_string(), "html".to_string()),
            ("parse".to_string(), "true".to_string()),
            ("stream_id".to_string(), "48914".to_string()),
            ("text".to_string(), "wow".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_post_message_omits_unset_options() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(body_string("stream_id=48914&text=hello+there"))
        .respond_with(ResponseTemplate::new(201).set_body_json(common::message_json()))
        .expect(1)
        .mount(&server)
        .await;

    client.messages().post(48914, "hello there").await.unwrap();
}

#[tokio::test]
async fn test_create_message_requires_created_status() {
    let (server, client) = common::setup().await;

    // A 200 is not what the endpoint promises, so the body is read as an error.
    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "validation",
            "message": "Text can't be blank",
            "param": "text"
        })))
        .mount(&server)
        .await;

    let err = client.messages().post(48914, "").await.unwrap_err();
    match err {
        Error::Api { status, error } => {
            assert_eq!(status, 200);
            assert_eq!(error.kind, ErrorType::Validation);
            assert_eq!(error.param.as_deref(), Some("text"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_update_message_sends_only_supplied_fields() {
    let (server, client) = common::setup().await;

    let mut updated = common::message_json();
    updated["text"] = json!("edited");

    Mock::given(method("PUT"))
        .and(path("/messages/3423093"))
        .and(body_string("text=edited"))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&server)
        .await;

    let message = client
        .messages()
        .update(
            3423093,
            UpdateMessageRequest {
                text: Some("edited".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(message.text, "edited");
}

#[tokio::test]
async fn test_delete_message_expects_no_content() {
    let (server, client) = common::setup().await;

    Mock::given(method("DELETE"))
        .and(path("/messages/3434978"))
        .and(basic_auth(common::API_KEY, "X"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.messages().delete(3434978).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_delete_message_not_found() {
    let (server, client) = common::setup().await;

    Mock::given(method("DELETE"))
        .and(path("/messages/3434978"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "type": "invalid_param",
            "message": "Message not found",
            "details": "No message with id 3434978",
            "param": "id"
        })))
        .mount(&server)
        .await;

    let err = client.messages().delete(3434978).await.unwrap_err();
    assert!(err.is_not_found());
    let api = err.api_error().unwrap();
    assert_eq!(api.kind, ErrorType::InvalidParam);
    assert_eq!(api.message, "Message not found");
    assert_eq!(api.details.as_deref(), Some("No message with id 3434978"));
}
