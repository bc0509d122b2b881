//! Diesel models for the profile table.

use agora_core::{NewProfile, PrivateProfile, PublicProfile, check};
use agora_error::AgoraError;
use derive_builder::Builder;
use derive_getters::Getters;
use diesel::prelude::*;
use uuid::Uuid;

/// Database row for the profile table, full (private) shape.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::profile)]
#[diesel(primary_key(profile_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProfileRow {
    /// Primary key
    pub profile_id: Uuid,
    /// Free-text about section
    pub profile_about: Option<String>,
    /// Activation token, present only pre-activation
    pub profile_activation_token: Option<String>,
    /// Login email
    pub profile_email: String,
    /// Credential hash
    pub profile_hash: String,
    /// Avatar URL
    pub profile_image_url: Option<String>,
    /// Display name
    pub profile_name: String,
}

/// Fetched rows pass back through the validation schema before reaching a
/// caller, so schema drift in the database surfaces as a validation error.
impl TryFrom<ProfileRow> for PrivateProfile {
    type Error = AgoraError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let profile = PrivateProfile {
            profile_id: row.profile_id,
            profile_about: row.profile_about,
            profile_activation_token: row.profile_activation_token,
            profile_email: row.profile_email,
            profile_hash: row.profile_hash,
            profile_image_url: row.profile_image_url,
            profile_name: row.profile_name,
        };
        check(&profile)?;
        Ok(profile)
    }
}

/// Database row carrying only the publicly visible profile columns.
///
/// Public lookups select this shape, so the credential columns never leave
/// the database for those code paths.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::profile)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PublicProfileRow {
    /// Primary key
    pub profile_id: Uuid,
    /// Free-text about section
    pub profile_about: Option<String>,
    /// Avatar URL
    pub profile_image_url: Option<String>,
    /// Display name
    pub profile_name: String,
}

impl TryFrom<PublicProfileRow> for PublicProfile {
    type Error = AgoraError;

    fn try_from(row: PublicProfileRow) -> Result<Self, Self::Error> {
        let profile = PublicProfile {
            profile_id: row.profile_id,
            profile_about: row.profile_about,
            profile_image_url: row.profile_image_url,
            profile_name: row.profile_name,
        };
        check(&profile)?;
        Ok(profile)
    }
}

/// Insertable and changeset struct for the profile table.
///
/// Omits `profile_id`: inserts rely on the column default, updates key on
/// the id separately. `treat_none_as_null` keeps updates full-row
/// overwrites rather than partial patches.
#[derive(Debug, Clone, Insertable, AsChangeset, Getters, Builder)]
#[diesel(table_name = crate::schema::profile)]
#[diesel(treat_none_as_null = true)]
#[builder(setter(into))]
pub struct NewProfileRow {
    /// Free-text about section
    #[builder(default)]
    pub profile_about: Option<String>,
    /// Activation token issued at sign-up
    #[builder(default)]
    pub profile_activation_token: Option<String>,
    /// Login email
    pub profile_email: String,
    /// Credential hash
    pub profile_hash: String,
    /// Avatar URL
    #[builder(default)]
    pub profile_image_url: Option<String>,
    /// Display name
    pub profile_name: String,
}

impl From<NewProfile> for NewProfileRow {
    fn from(profile: NewProfile) -> Self {
        Self {
            profile_about: profile.profile_about,
            profile_activation_token: profile.profile_activation_token,
            profile_email: profile.profile_email,
            profile_hash: profile.profile_hash,
            profile_image_url: profile.profile_image_url,
            profile_name: profile.profile_name,
        }
    }
}

/// Update payloads carry the full private shape; the id travels separately
/// as the update key.
impl From<PrivateProfile> for NewProfileRow {
    fn from(profile: PrivateProfile) -> Self {
        Self {
            profile_about: profile.profile_about,
            profile_activation_token: profile.profile_activation_token,
            profile_email: profile.profile_email,
            profile_hash: profile.profile_hash,
            profile_image_url: profile.profile_image_url,
            profile_name: profile.profile_name,
        }
    }
}
