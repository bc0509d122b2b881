//! PostgreSQL data access for the agora discussion data layer.
//!
//! Thin, statement-at-a-time operations over the `profile` and `thread`
//! tables. Every statement is parameterized; identifiers and timestamps
//! for new rows come from column defaults, not from this layer.

mod connection;
mod lookup;
mod profile;
mod profile_models;
pub mod schema;
mod thread;
mod thread_models;

pub use connection::{MIGRATIONS, create_pool, establish_connection, run_migrations};
pub use profile::{
    insert_profile, select_private_profile_by_profile_activation_token,
    select_private_profile_by_profile_email, select_private_profile_by_profile_id,
    select_public_profile_by_profile_id, select_public_profile_by_profile_name,
    select_public_profiles_by_profile_name, update_profile,
};
pub use profile_models::{NewProfileRow, NewProfileRowBuilder, ProfileRow, PublicProfileRow};
pub use thread::{
    delete_thread_by_thread_id, insert_thread, select_all_reply_threads_by_thread_id,
    select_all_threads, select_page_of_threads, select_thread_by_thread_id,
    select_threads_by_profile_name, select_threads_by_thread_profile_id,
};
pub use thread_models::{NewThreadRow, NewThreadRowBuilder, ThreadRow};

use agora_error::DatabaseError;

/// Result alias for connection-level operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
