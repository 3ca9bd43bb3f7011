//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から ChatHub 経由で呼び出され、Domain 層を操作します。

pub mod admin_broadcast;
pub mod admin_notifier;
pub mod error;
pub mod hub;
pub mod list_users;
pub mod register_topics;
pub mod send_message;
pub mod sign_in;
pub mod sign_out;

#[cfg(test)]
pub(crate) mod testing;

pub use admin_broadcast::AdminBroadcastUseCase;
pub use admin_notifier::AdminNotifier;
pub use error::{BroadcastError, SendMessageError, SignInError};
pub use hub::ChatHub;
pub use list_users::ListUsersUseCase;
pub use register_topics::RegisterTopicsUseCase;
pub use send_message::SendMessageUseCase;
pub use sign_in::SignInUseCase;
pub use sign_out::SignOutUseCase;
