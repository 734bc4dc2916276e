//! Reasoning-agent gateway adapters

mod http;
mod scripted;

pub use http::HttpLlmGateway;
pub use scripted::ScriptedGateway;
