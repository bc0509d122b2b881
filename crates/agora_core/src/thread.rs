//! Thread record shapes and their validation schemas.
//!
//! Threads form a forest: a row with `thread_reply_thread_id = None` is a
//! top-level post, anything else is a reply to the referenced thread. The
//! parent-pointer graph is assumed acyclic; nothing in this layer enforces
//! that.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A persisted thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    /// Primary key
    pub thread_id: Uuid,
    /// Authoring profile
    pub thread_profile_id: Uuid,
    /// Parent thread; `None` marks a top-level post
    pub thread_reply_thread_id: Option<Uuid>,
    /// Post body
    #[validate(length(max = 255, message = "thread content is too long (max 255 characters)"))]
    pub thread_content: String,
    /// Creation time, assigned by storage; default sort key (newest first)
    pub thread_datetime: NaiveDateTime,
    /// Attached image URL
    #[validate(
        url(message = "please provide a valid thread image url"),
        length(max = 255, message = "thread image url is too long (max 255 characters)")
    )]
    pub thread_image_url: Option<String>,
}

/// Insert draft for a thread.
///
/// Storage generates `thread_id` and stamps `thread_datetime` with the
/// current time; a caller-supplied timestamp has no representation here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewThread {
    /// Authoring profile
    pub thread_profile_id: Uuid,
    /// Parent thread; `None` posts at top level
    pub thread_reply_thread_id: Option<Uuid>,
    /// Post body
    #[validate(length(max = 255, message = "thread content is too long (max 255 characters)"))]
    pub thread_content: String,
    /// Attached image URL
    #[validate(
        url(message = "please provide a valid thread image url"),
        length(max = 255, message = "thread image url is too long (max 255 characters)")
    )]
    pub thread_image_url: Option<String>,
}

impl Thread {
    /// Whether this thread is a top-level post rather than a reply.
    pub fn is_top_level(&self) -> bool {
        self.thread_reply_thread_id.is_none()
    }
}
