//! # Quill Shared
//!
//! Wire types of the posts API, shared by the server and any Rust client.

pub mod dto;

pub use dto::{PostPayload, PostResponse};
