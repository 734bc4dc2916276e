//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated question to route through the roles
//! - [`request_context::RequestContext`]: opaque caller-supplied context
//! - [`error::DomainError`]: domain-level errors
//! - [`keyword_set::KeywordSet`]: word-start keyword matching

pub mod error;
pub mod keyword_set;
pub mod question;
pub mod request_context;
