//! Resource and request types for the Sqwiggle API.
//!
//! These types mirror the server's JSON shapes. Fields the API does not
//! document are optional and decoded leniently, see [`crate::lenient`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{lenient, timestamp};

/// Declares a string-valued wire enum with an `Unknown` fallback.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Value not known to this client.
            #[default]
            #[serde(other)]
            Unknown,
        }

        impl $name {
            /// Wire representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Unknown => "unknown",
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Messages
// ─────────────────────────────────────────────────────────────────────────────

/// An item in a chat stream, created by a person, a bot or the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message ID.
    pub id: u64,
    /// Stream the message belongs to.
    pub stream_id: u64,
    /// Plain text content, HTML escaped.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub text: String,
    /// User or API client that created the message.
    pub author: User,
    /// Media displayed with the message.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub attachments: Vec<Attachment>,
    /// Users mentioned in the message.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub mentions: Vec<Mention>,
    /// Creation time.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Last edit time.
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    /// Conversation the message was posted from, if any.
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub conversation_id: Option<u64>,
}

/// Request to post a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateMessageRequest {
    /// Target stream.
    pub stream_id: u64,
    /// Message text. Mentions use `@(user_name)[user:user_id]`.
    pub text: String,
    /// `html` allows a subset of HTML tags in the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Whether links should be expanded into rich attachments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse: Option<bool>,
}

impl CreateMessageRequest {
    /// Create a plain message request.
    pub fn new(stream_id: u64, text: impl Into<String>) -> Self {
        Self {
            stream_id,
            text: text.into(),
            format: None,
            parse: None,
        }
    }

    /// Set the text format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Enable or disable link parsing.
    pub fn with_parse(mut self, parse: bool) -> Self {
        self.parse = Some(parse);
        self
    }
}

/// Request to edit a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateMessageRequest {
    /// New text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Mentions
// ─────────────────────────────────────────────────────────────────────────────

wire_enum! {
    /// Kind of entity a mention refers to.
    pub enum SubjectType {
        /// A user of the organization.
        User => "user",
    }
}

/// A mention inside a message's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    /// Mention ID.
    pub id: u64,
    /// Message containing the mention.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub message_id: u64,
    /// Display name of the mentioned subject.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    /// Start and end character offsets into the message text.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub indices: Vec<usize>,
    /// Matched text.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub text: String,
    /// Kind of the mentioned subject.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub subject_type: SubjectType,
    /// ID of the mentioned subject.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub subject_id: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Attachments
// ─────────────────────────────────────────────────────────────────────────────

wire_enum! {
    /// Kind of media an attachment holds.
    pub enum AttachmentType {
        /// Image upload or linked image.
        Image => "image",
        /// Web page.
        Link => "link",
        /// File upload.
        File => "file",
        /// Tweet.
        TwitterStatus => "twitter_status",
        /// Twitter profile.
        TwitterUser => "twitter_user",
        /// Video.
        Video => "video",
        /// Code snippet.
        Code => "code",
        /// GitHub gist.
        Gist => "gist",
    }
}

wire_enum! {
    /// Upload state of an attachment.
    pub enum AttachmentStatus {
        /// Upload in progress.
        Pending => "pending",
        /// Upload finished.
        Uploaded => "uploaded",
    }
}

/// Media belonging to a message: a link, image, video, file upload and more.
///
/// New attachment types appear over time, so match on [`Attachment::kind`]
/// with a fallback arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment ID.
    pub id: u64,
    /// Attachment type.
    #[serde(rename = "type", default, deserialize_with = "lenient::or_default")]
    pub kind: AttachmentType,
    /// Where the content can be accessed.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub url: String,
    /// Title, for example a file name or page title.
    #[serde(default)]
    pub title: Option<String>,
    /// Description, for example a page summary.
    #[serde(default)]
    pub description: Option<String>,
    /// Image representing the attachment, possibly hosted elsewhere.
    #[serde(default)]
    pub image: Option<String>,
    /// Upload state.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: AttachmentStatus,
    /// Whether an image is animated.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub animated: bool,
    /// Creation time.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Last update time.
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    /// Image width in pixels.
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<u32>,
    /// Image height in pixels.
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<u32>,
}

/// Request to update an attachment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateAttachmentRequest {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Streams
// ─────────────────────────────────────────────────────────────────────────────

wire_enum! {
    /// Whether a stream is in use.
    pub enum StreamStatus {
        /// Open for messages.
        Active => "active",
        /// Archived.
        Inactive => "inactive",
    }
}

wire_enum! {
    /// Purpose of a stream.
    pub enum StreamType {
        /// Regular team stream.
        Standard => "standard",
        /// Support stream.
        Support => "support",
    }
}

/// A chat stream, similar to a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    /// Stream ID.
    pub id: u64,
    /// User that created the stream.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub user_id: u64,
    /// Full stream name.
    pub name: String,
    /// Path in the web app, e.g. `app.sqwiggle.com/:path`.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub path: String,
    /// Icon name.
    #[serde(default)]
    pub icon: Option<String>,
    /// Hex color, e.g. `#121212`.
    #[serde(default)]
    pub icon_color: Option<String>,
    /// Whether the current user receives notifications.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub subscribed: bool,
    /// Creation time.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Lifecycle state. Undocumented.
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<StreamStatus>,
    /// Stream kind. Undocumented.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<StreamType>,
    /// Free-form description. Undocumented.
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

/// Request to create a stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateStreamRequest {
    /// Stream name.
    pub name: String,
    /// Icon name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Hex color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
}

impl CreateStreamRequest {
    /// Create a request with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Request to update a stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateStreamRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    /// Change notification subscription for the current user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<bool>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

wire_enum! {
    /// Role of a user within the organization.
    pub enum UserRole {
        /// Regular member.
        User => "user",
        /// Organization owner.
        Owner => "owner",
        /// Manager.
        Manager => "manager",
        /// Banned member.
        Banned => "banned",
    }
}

wire_enum! {
    /// Presence of a user.
    pub enum UserStatus {
        Busy => "busy",
        Available => "available",
        Offline => "offline",
    }
}

/// A person on the organization's team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: u64,
    /// Role in the organization.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub role: UserRole,
    /// Device media is currently received on.
    #[serde(default)]
    pub media_device_id: Option<String>,
    /// Presence.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: UserStatus,
    /// Status message, such as "out for lunch".
    #[serde(default)]
    pub message: Option<String>,
    /// Full name.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    /// Email address.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub email: String,
    /// Static avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Last snapshot URL.
    #[serde(default)]
    pub snapshot: Option<String>,
    /// Seconds between automatic snapshots.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub snapshot_interval: u32,
    /// Email confirmation status.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub confirmed: bool,
    /// Time zone name (Rails format).
    #[serde(default)]
    pub time_zone: Option<String>,
    /// Hours offset from UTC, may be fractional (e.g. 5.5).
    #[serde(default)]
    pub time_zone_offset: Option<f64>,
    /// Creation time. Absent for API clients embedded as message authors.
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last recorded activity.
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub last_active_at: Option<DateTime<Utc>>,
    /// Start of the current online session.
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub last_connected_at: Option<DateTime<Utc>>,
}

/// Request to update a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    /// Status message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_interval: Option<u32>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Organizations
// ─────────────────────────────────────────────────────────────────────────────

/// The tenant every user belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID.
    pub id: u64,
    /// Organization name.
    pub name: String,
    /// Path in the web app, e.g. `sqwiggle.com/:path`.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub path: String,
    /// Creation time.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Billing details.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub billing: OrgBilling,
    /// Security settings. Undocumented.
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub security: Option<OrgSecurity>,
    /// Shareable signup link. Undocumented.
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub invite_url: Option<String>,
    /// Number of members. Undocumented.
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_count: Option<u64>,
    /// Plan limit on conversation size. Undocumented.
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_conversation_participants: Option<u64>,
}

/// Billing block of an [`Organization`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgBilling {
    /// Plan name.
    #[serde(default)]
    pub plan: Option<String>,
    /// Billing state, e.g. `trial`.
    #[serde(default)]
    pub status: Option<String>,
    /// Whether an active credit card is on file.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub active_card: bool,
    /// Whether receipts are emailed.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub receipts: bool,
    /// Billing email address.
    #[serde(default)]
    pub email: Option<String>,
}

/// Security flags of an [`Organization`]. None of these are documented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgSecurity {
    #[serde(deserialize_with = "lenient::or_default")]
    pub media_accept: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub domain_restrict: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub domain_signup: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub open_invites: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub uploads_disabled: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub manual_disabled: bool,
}

/// Request to update an organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateOrganizationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Billing email address.
    #[serde(rename = "billing[email]", skip_serializing_if = "Option::is_none")]
    pub billing_email: Option<String>,
    /// Whether receipts are emailed.
    #[serde(rename = "billing[receipts]", skip_serializing_if = "Option::is_none")]
    pub billing_receipts: Option<bool>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversations
// ─────────────────────────────────────────────────────────────────────────────

wire_enum! {
    /// Whether a conversation is still running.
    pub enum ConversationStatus {
        Open => "open",
        Closed => "closed",
    }
}

/// An ephemeral audio/video session between two or more people.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Conversation ID.
    pub id: u64,
    /// Open or closed.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: ConversationStatus,
    /// Seconds the conversation lasted, or has been running if open.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub duration: u64,
    /// Start time.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Users currently in the conversation.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub participating: Vec<User>,
    /// Users who have been in the conversation at any point.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub participated: Vec<User>,
    /// Display color index. Undocumented.
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub color_id: Option<u64>,
    /// Whether the call runs through an MCU. Undocumented.
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub mcu: Option<bool>,
    /// MCU server flag. Undocumented.
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub mcu_server: Option<bool>,
    /// Locked flag. Undocumented.
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub locked: Option<bool>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Invites
// ─────────────────────────────────────────────────────────────────────────────

/// An invitation for someone to join the organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invite {
    /// Invite ID.
    pub id: u64,
    /// User that created the invite.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub from_id: u64,
    /// Address the invite was sent to.
    pub email: String,
    /// Static avatar for the address.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Redemption URL.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub url: String,
    /// Creation time.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Request to invite someone by email.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateInviteRequest {
    /// Address to invite.
    pub email: String,
}

impl CreateInviteRequest {
    /// Create an invite request for an address.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
