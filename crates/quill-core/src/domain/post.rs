use chrono::{NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Primary key of a post, assigned by the datastore.
pub type PostId = i32;

/// Upper bound on the length of a post title, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Post entity - a persisted blog post.
///
/// `created_at` is naive UTC and never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

/// Validated title and content, ready to be written.
///
/// The only way to obtain one is [`PostDraft::parse`], so every draft that
/// reaches a repository has already passed the field rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    content: String,
}

impl PostDraft {
    /// Validate raw request fields.
    ///
    /// All failing fields are reported in a single [`DomainError::Validation`].
    pub fn parse(title: Option<String>, content: Option<String>) -> Result<Self, DomainError> {
        let mut problems = Vec::new();

        match title.as_deref() {
            None => problems.push("title is required".to_string()),
            Some(t) if t.trim().is_empty() => problems.push("title must not be empty".to_string()),
            Some(t) if t.chars().count() > TITLE_MAX_CHARS => problems.push(format!(
                "title must be at most {TITLE_MAX_CHARS} characters"
            )),
            Some(_) => {}
        }

        match content.as_deref() {
            None => problems.push("content is required".to_string()),
            Some(c) if c.trim().is_empty() => {
                problems.push("content must not be empty".to_string())
            }
            Some(_) => {}
        }

        match (title, content) {
            (Some(title), Some(content)) if problems.is_empty() => Ok(Self { title, content }),
            _ => Err(DomainError::Validation(problems.join(", "))),
        }
    }

    pub fn into_parts(self) -> (String, String) {
        (self.title, self.content)
    }

    /// Stamp the draft with its creation time.
    pub fn into_new_post(self) -> NewPost {
        NewPost {
            title: self.title,
            content: self.content,
            created_at: Utc::now().naive_utc().trunc_subsecs(6),
        }
    }
}

/// A post that has not been inserted yet; the datastore assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

impl NewPost {
    /// Attach the id the datastore generated.
    pub fn with_id(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            created_at: self.created_at,
        }
    }
}
