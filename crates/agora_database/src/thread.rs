//! Thread data access.
//!
//! Covers the flat listings, the profile-scoped listings, the recursive
//! reply tree, pagination over top-level posts, and deletion. Top-level
//! listings filter on `thread_reply_thread_id IS NULL`; replies are
//! reached through the tree query, not the listings.

use crate::lookup::at_most_one;
use crate::schema::{profile, thread};
use crate::{NewThreadRow, ThreadRow};
use agora_core::{NewThread, Thread, ThreadPage, check};
use agora_error::{AgoraResult, DatabaseError};
use diesel::prelude::*;
use tracing::instrument;
use uuid::Uuid;

/// Recursive walk of the reply forest rooted at a single thread.
///
/// Seeds with the root row, then repeatedly joins children whose
/// `thread_reply_thread_id` points at a row already in the set. `UNION`
/// (set, not multiset) deduplicates, so the walk reaches a fixpoint and
/// terminates even if the assumed acyclicity of the parent-pointer graph
/// is ever violated.
const THREAD_TREE_QUERY: &str = "\
WITH RECURSIVE thread_tree AS (\
    SELECT thread_id, thread_profile_id, thread_reply_thread_id, \
           thread_content, thread_datetime, thread_image_url \
    FROM thread \
    WHERE thread_id = $1 \
    UNION \
    SELECT t.thread_id, t.thread_profile_id, t.thread_reply_thread_id, \
           t.thread_content, t.thread_datetime, t.thread_image_url \
    FROM thread t \
    INNER JOIN thread_tree tt ON tt.thread_id = t.thread_reply_thread_id\
) \
SELECT thread_id, thread_profile_id, thread_reply_thread_id, \
       thread_content, thread_datetime, thread_image_url \
FROM thread_tree";

/// Insert a new thread. Storage generates `thread_id` and stamps the
/// current time into `thread_datetime`.
///
/// # Errors
///
/// Returns a validation error when the draft fails its schema, or a
/// database error when the insert fails (including an unknown profile or
/// parent thread id).
#[instrument(skip(conn, new_thread), fields(thread_profile_id = %new_thread.thread_profile_id))]
pub fn insert_thread(conn: &mut PgConnection, new_thread: NewThread) -> AgoraResult<&'static str> {
    check(&new_thread)?;

    let row = NewThreadRow::from(new_thread);
    diesel::insert_into(thread::table)
        .values(&row)
        .execute(conn)
        .map_err(DatabaseError::from)?;

    tracing::debug!("Inserted thread");
    Ok("Thread successfully posted")
}

/// All threads, top-level posts and replies alike, newest first.
#[instrument(skip(conn))]
pub fn select_all_threads(conn: &mut PgConnection) -> AgoraResult<Vec<Thread>> {
    let rows = thread::table
        .order(thread::thread_datetime.desc())
        .select(ThreadRow::as_select())
        .load::<ThreadRow>(conn)
        .map_err(DatabaseError::from)?;

    rows.into_iter().map(Thread::try_from).collect()
}

/// Top-level threads authored by the profile with the given display name.
#[instrument(skip(conn, profile_name))]
pub fn select_threads_by_profile_name(
    conn: &mut PgConnection,
    profile_name: &str,
) -> AgoraResult<Vec<Thread>> {
    let rows = thread::table
        .inner_join(profile::table)
        .filter(profile::profile_name.eq(profile_name))
        .filter(thread::thread_reply_thread_id.is_null())
        .select(ThreadRow::as_select())
        .load::<ThreadRow>(conn)
        .map_err(DatabaseError::from)?;

    rows.into_iter().map(Thread::try_from).collect()
}

/// Top-level threads authored by the given profile id.
#[instrument(skip(conn))]
pub fn select_threads_by_thread_profile_id(
    conn: &mut PgConnection,
    thread_profile_id: Uuid,
) -> AgoraResult<Vec<Thread>> {
    let rows = thread::table
        .filter(thread::thread_profile_id.eq(thread_profile_id))
        .filter(thread::thread_reply_thread_id.is_null())
        .select(ThreadRow::as_select())
        .load::<ThreadRow>(conn)
        .map_err(DatabaseError::from)?;

    rows.into_iter().map(Thread::try_from).collect()
}

/// Look up a single thread by id, if any.
#[instrument(skip(conn))]
pub fn select_thread_by_thread_id(
    conn: &mut PgConnection,
    thread_id: Uuid,
) -> AgoraResult<Option<Thread>> {
    let rows = thread::table
        .filter(thread::thread_id.eq(thread_id))
        .select(ThreadRow::as_select())
        .load::<ThreadRow>(conn)
        .map_err(DatabaseError::from)?;

    at_most_one(rows, "thread by id")?
        .map(Thread::try_from)
        .transpose()
}

/// The thread with the given id plus every descendant reply, at any depth.
///
/// Order beyond the traversal's own is not specified.
#[instrument(skip(conn))]
pub fn select_all_reply_threads_by_thread_id(
    conn: &mut PgConnection,
    thread_id: Uuid,
) -> AgoraResult<Vec<Thread>> {
    let rows = diesel::sql_query(THREAD_TREE_QUERY)
        .bind::<diesel::sql_types::Uuid, _>(thread_id)
        .load::<ThreadRow>(conn)
        .map_err(DatabaseError::from)?;

    tracing::debug!(rows = rows.len(), "Walked reply tree");
    rows.into_iter().map(Thread::try_from).collect()
}

/// One page of top-level threads, newest first.
///
/// Page size is fixed at [`agora_core::THREAD_PAGE_SIZE`]; the page number
/// is validated at construction, so no negative offset can reach here.
#[instrument(skip(conn), fields(page = page.number()))]
pub fn select_page_of_threads(
    conn: &mut PgConnection,
    page: ThreadPage,
) -> AgoraResult<Vec<Thread>> {
    let rows = thread::table
        .filter(thread::thread_reply_thread_id.is_null())
        .order(thread::thread_datetime.desc())
        .limit(page.limit())
        .offset(page.offset())
        .select(ThreadRow::as_select())
        .load::<ThreadRow>(conn)
        .map_err(DatabaseError::from)?;

    rows.into_iter().map(Thread::try_from).collect()
}

/// Delete a thread by id.
///
/// Unconditional: succeeds with the same confirmation whether or not a row
/// existed. Descendant replies go with it via the schema's cascade on the
/// self-reference.
#[instrument(skip(conn))]
pub fn delete_thread_by_thread_id(
    conn: &mut PgConnection,
    thread_id: Uuid,
) -> AgoraResult<&'static str> {
    let deleted = diesel::delete(thread::table.filter(thread::thread_id.eq(thread_id)))
        .execute(conn)
        .map_err(DatabaseError::from)?;

    tracing::debug!(deleted, "Deleted thread");
    Ok("Thread successfully deleted")
}
