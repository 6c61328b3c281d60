//! API endpoint implementations.

mod attachments;
mod conversations;
mod info;
mod invites;
mod messages;
mod organizations;
mod streams;
mod users;

pub use attachments::AttachmentsApi;
pub use conversations::ConversationsApi;
pub use info::InfoApi;
pub use invites::InvitesApi;
pub use messages::MessagesApi;
pub use organizations::OrganizationsApi;
pub use streams::StreamsApi;
pub use users::UsersApi;
