//! Shared fixtures for integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use sqwiggle::SqwiggleClient;
use wiremock::MockServer;

pub const API_KEY: &str = "cli_8d0f670196e5c63db53168a3d39bf2ce";

/// Start a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, SqwiggleClient) {
    let server = MockServer::start().await;
    let client = SqwiggleClient::builder()
        .api_key(API_KEY)
        .base_url(server.uri())
        .build()
        .expect("client should build");
    (server, client)
}

/// Decode a form-encoded request body into ordered key/value pairs.
pub fn form_pairs(body: &[u8]) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

pub fn author_json() -> Value {
    json!({
        "id": 19112,
        "role": "owner",
        "media_device_id": null,
        "status": "available",
        "message": null,
        "name": "Herman Schaaf",
        "email": "herman@example.com",
        "avatar": "https://sqwiggle-avatars.s3.amazonaws.com/19112/avatar.png",
        "snapshot": "https://sqwiggle-snapshots.s3.amazonaws.com/19112/snapshot.jpg",
        "snapshot_interval": 60,
        "confirmed": true,
        "time_zone": "Tokyo",
        "time_zone_offset": 9.0,
        "created_at": "2014-06-20T09:11:02.121Z",
        "last_active_at": "2014-08-04T12:40:12.507Z",
        "last_connected_at": "2014-08-04T08:01:55.92Z"
    })
}

pub fn message_json() -> Value {
    json!({
        "id": 3423093,
        "stream_id": 48914,
        "text": "",
        "author": author_json(),
        "attachments": [{
            "id": 206099,
            "type": "image",
            "url": "https://sqwiggle-assets.s3.amazonaws.com/uploads/206099/photo.jpg",
            "title": "photo.jpg",
            "description": null,
            "image": "https://sqwiggle-assets.s3.amazonaws.com/uploads/206099/thumb_photo.jpg",
            "status": "uploaded",
            "animated": false,
            "created_at": "2014-08-04T12:41:50.317Z",
            "updated_at": "2014-08-04T12:41:53.9Z",
            "width": 3861,
            "height": 3861
        }],
        "mentions": [],
        "created_at": "2014-08-04T12:41:50.301Z",
        "updated_at": "2014-08-04T12:41:50.301Z"
    })
}

pub fn stream_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "user_id": 19112,
        "name": name,
        "path": name.to_lowercase(),
        "icon": "chat",
        "icon_color": "#3fa9f5",
        "subscribed": true,
        "created_at": "2014-06-20T09:11:02.5Z",
        "status": "active",
        "type": "standard",
        "description": ""
    })
}

pub fn auth_error_json() -> Value {
    json!({
        "type": "authentication",
        "message": "Sorry, your account could not be authenticated",
        "details": "Please check your API key and try again",
        "param": null
    })
}
