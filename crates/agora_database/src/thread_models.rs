//! Diesel models for the thread table.

use agora_core::{NewThread, Thread, check};
use agora_error::AgoraError;
use chrono::NaiveDateTime;
use derive_builder::Builder;
use derive_getters::Getters;
use diesel::prelude::*;
use uuid::Uuid;

/// Database row for the thread table.
///
/// `QueryableByName` lets the recursive tree query load this row from raw
/// SQL alongside the regular DSL queries.
#[derive(Debug, Clone, Queryable, QueryableByName, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::thread)]
#[diesel(primary_key(thread_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ThreadRow {
    /// Primary key
    pub thread_id: Uuid,
    /// Authoring profile
    pub thread_profile_id: Uuid,
    /// Parent thread, null for top-level posts
    pub thread_reply_thread_id: Option<Uuid>,
    /// Post body
    pub thread_content: String,
    /// Creation time, assigned by storage
    pub thread_datetime: NaiveDateTime,
    /// Attached image URL
    pub thread_image_url: Option<String>,
}

/// Fetched rows pass back through the validation schema before reaching a
/// caller.
impl TryFrom<ThreadRow> for Thread {
    type Error = AgoraError;

    fn try_from(row: ThreadRow) -> Result<Self, Self::Error> {
        let thread = Thread {
            thread_id: row.thread_id,
            thread_profile_id: row.thread_profile_id,
            thread_reply_thread_id: row.thread_reply_thread_id,
            thread_content: row.thread_content,
            thread_datetime: row.thread_datetime,
            thread_image_url: row.thread_image_url,
        };
        check(&thread)?;
        Ok(thread)
    }
}

/// Insertable struct for the thread table.
///
/// Omits `thread_id` and `thread_datetime`: both come from column defaults
/// (`gen_random_uuid()` and `now()`), so a caller-supplied timestamp has no
/// way in.
#[derive(Debug, Clone, Insertable, Getters, Builder)]
#[diesel(table_name = crate::schema::thread)]
#[builder(setter(into))]
pub struct NewThreadRow {
    /// Authoring profile
    pub thread_profile_id: Uuid,
    /// Parent thread, `None` posts at top level
    #[builder(default)]
    pub thread_reply_thread_id: Option<Uuid>,
    /// Post body
    pub thread_content: String,
    /// Attached image URL
    #[builder(default)]
    pub thread_image_url: Option<String>,
}

impl From<NewThread> for NewThreadRow {
    fn from(thread: NewThread) -> Self {
        Self {
            thread_profile_id: thread.thread_profile_id,
            thread_reply_thread_id: thread.thread_reply_thread_id,
            thread_content: thread.thread_content,
            thread_image_url: thread.thread_image_url,
        }
    }
}
