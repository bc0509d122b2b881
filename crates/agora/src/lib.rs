//! Unified surface for the agora discussion data layer.
//!
//! Re-exports the domain types, validation schemas, error types, and
//! PostgreSQL data-access operations from the workspace crates.

pub use agora_core::{
    NewProfile, NewThread, PrivateProfile, PublicProfile, SignUpProfile, THREAD_PAGE_SIZE, Thread,
    ThreadForest, ThreadPage, check,
};
pub use agora_database::{
    DatabaseResult, MIGRATIONS, NewProfileRow, NewThreadRow, ProfileRow, PublicProfileRow,
    ThreadRow, create_pool, delete_thread_by_thread_id, establish_connection, insert_profile,
    insert_thread, run_migrations, select_all_reply_threads_by_thread_id, select_all_threads,
    select_page_of_threads, select_private_profile_by_profile_activation_token,
    select_private_profile_by_profile_email, select_private_profile_by_profile_id,
    select_public_profile_by_profile_id, select_public_profile_by_profile_name,
    select_public_profiles_by_profile_name, select_thread_by_thread_id,
    select_threads_by_profile_name, select_threads_by_thread_profile_id, update_profile,
};
pub use agora_error::{
    AgoraError, AgoraResult, DatabaseError, DatabaseErrorKind, FieldViolation, ValidationError,
    ValidationErrorKind,
};
