//! UI 層
//!
//! HTTP / WebSocket のエンドポイントとサーバーの起動処理。

mod handler;
mod runner;
mod signal;
pub mod state;

pub use runner::{build_router, run};
