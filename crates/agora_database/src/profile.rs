//! Profile data access.
//!
//! Writes validate their payload before touching storage; reads validate
//! every fetched row on the way out. Exact-match lookups enforce the
//! at-most-one contract: a second row is an integrity failure, not data.
//! Public lookups select only the public columns, so the private shape
//! never crosses the boundary.

use crate::lookup::at_most_one;
use crate::schema::profile;
use crate::{NewProfileRow, ProfileRow, PublicProfileRow};
use agora_core::{NewProfile, PrivateProfile, PublicProfile, check};
use agora_error::{AgoraResult, DatabaseError};
use diesel::prelude::*;
use tracing::instrument;
use uuid::Uuid;

/// Insert a new profile. Storage generates `profile_id`.
///
/// # Errors
///
/// Returns a validation error when the draft fails its schema, or a
/// database error when the insert fails (including a duplicate email).
#[instrument(skip(conn, new_profile), fields(profile_name = %new_profile.profile_name))]
pub fn insert_profile(conn: &mut PgConnection, new_profile: NewProfile) -> AgoraResult<&'static str> {
    check(&new_profile)?;

    let row = NewProfileRow::from(new_profile);
    diesel::insert_into(profile::table)
        .values(&row)
        .execute(conn)
        .map_err(DatabaseError::from)?;

    tracing::debug!("Inserted profile");
    Ok("Profile Successfully Created")
}

/// Overwrite a profile row by id.
///
/// Full-record replacement: every column is written, including nulls.
/// There are no partial-patch semantics.
///
/// # Errors
///
/// Returns a validation error when the profile fails its schema, or a
/// database error when the update fails.
#[instrument(skip(conn, profile), fields(profile_id = %profile.profile_id))]
pub fn update_profile(conn: &mut PgConnection, profile: PrivateProfile) -> AgoraResult<&'static str> {
    check(&profile)?;

    let profile_id = profile.profile_id;
    let changes = NewProfileRow::from(profile);
    let updated = diesel::update(profile::table.find(profile_id))
        .set(&changes)
        .execute(conn)
        .map_err(DatabaseError::from)?;

    tracing::debug!(updated, "Updated profile");
    Ok("Profile successfully updated")
}

/// Look up the private profile with the given email, if any.
#[instrument(skip(conn, profile_email))]
pub fn select_private_profile_by_profile_email(
    conn: &mut PgConnection,
    profile_email: &str,
) -> AgoraResult<Option<PrivateProfile>> {
    let rows = profile::table
        .filter(profile::profile_email.eq(profile_email))
        .select(ProfileRow::as_select())
        .load::<ProfileRow>(conn)
        .map_err(DatabaseError::from)?;

    at_most_one(rows, "profile by email")?
        .map(PrivateProfile::try_from)
        .transpose()
}

/// Look up the private profile with the given id, if any.
#[instrument(skip(conn))]
pub fn select_private_profile_by_profile_id(
    conn: &mut PgConnection,
    profile_id: Uuid,
) -> AgoraResult<Option<PrivateProfile>> {
    let rows = profile::table
        .filter(profile::profile_id.eq(profile_id))
        .select(ProfileRow::as_select())
        .load::<ProfileRow>(conn)
        .map_err(DatabaseError::from)?;

    at_most_one(rows, "profile by id")?
        .map(PrivateProfile::try_from)
        .transpose()
}

/// Look up the public profile with the given id, if any.
#[instrument(skip(conn))]
pub fn select_public_profile_by_profile_id(
    conn: &mut PgConnection,
    profile_id: Uuid,
) -> AgoraResult<Option<PublicProfile>> {
    let rows = profile::table
        .filter(profile::profile_id.eq(profile_id))
        .select(PublicProfileRow::as_select())
        .load::<PublicProfileRow>(conn)
        .map_err(DatabaseError::from)?;

    at_most_one(rows, "public profile by id")?
        .map(PublicProfile::try_from)
        .transpose()
}

/// Look up the public profile with exactly the given display name, if any.
///
/// Display names are treated as unique for this lookup; storage returning
/// more than one row is an integrity failure.
#[instrument(skip(conn, profile_name))]
pub fn select_public_profile_by_profile_name(
    conn: &mut PgConnection,
    profile_name: &str,
) -> AgoraResult<Option<PublicProfile>> {
    let rows = profile::table
        .filter(profile::profile_name.eq(profile_name))
        .select(PublicProfileRow::as_select())
        .load::<PublicProfileRow>(conn)
        .map_err(DatabaseError::from)?;

    at_most_one(rows, "public profile by name")?
        .map(PublicProfile::try_from)
        .transpose()
}

/// Search public profiles whose display name contains the given fragment.
///
/// Substring containment, wildcarded on both sides; no implied ordering.
#[instrument(skip(conn, profile_name))]
pub fn select_public_profiles_by_profile_name(
    conn: &mut PgConnection,
    profile_name: &str,
) -> AgoraResult<Vec<PublicProfile>> {
    let pattern = format!("%{}%", profile_name);
    let rows = profile::table
        .filter(profile::profile_name.like(pattern))
        .select(PublicProfileRow::as_select())
        .load::<PublicProfileRow>(conn)
        .map_err(DatabaseError::from)?;

    tracing::debug!(matches = rows.len(), "Searched profiles by name fragment");
    rows.into_iter().map(PublicProfile::try_from).collect()
}

/// Look up the private profile holding the given activation token, if any.
///
/// Used by the account activation flow to resolve a token back to its
/// profile.
#[instrument(skip(conn, profile_activation_token))]
pub fn select_private_profile_by_profile_activation_token(
    conn: &mut PgConnection,
    profile_activation_token: &str,
) -> AgoraResult<Option<PrivateProfile>> {
    let rows = profile::table
        .filter(profile::profile_activation_token.eq(profile_activation_token))
        .select(ProfileRow::as_select())
        .load::<ProfileRow>(conn)
        .map_err(DatabaseError::from)?;

    at_most_one(rows, "profile by activation token")?
        .map(PrivateProfile::try_from)
        .transpose()
}
