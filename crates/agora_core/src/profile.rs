//! Profile record shapes and their validation schemas.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Full profile row, including credential fields.
///
/// This shape must never cross the boundary to an external caller; hand
/// out [`PublicProfile`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PrivateProfile {
    /// Primary key
    pub profile_id: Uuid,
    /// Free-text about section
    #[validate(length(max = 512, message = "profile about is too long (max 512 characters)"))]
    pub profile_about: Option<String>,
    /// Opaque token present only before account activation
    #[validate(length(
        equal = 32,
        message = "profile activation token must be 32 characters"
    ))]
    pub profile_activation_token: Option<String>,
    /// Login email, unique across profiles
    #[validate(
        email(message = "please provide a valid profile email"),
        length(max = 128, message = "profile email is too long (max 128 characters)")
    )]
    pub profile_email: String,
    /// Credential hash
    #[validate(length(equal = 97, message = "profile hash must be 97 characters"))]
    pub profile_hash: String,
    /// Avatar URL
    #[validate(
        url(message = "please provide a valid profile image url"),
        length(max = 255, message = "profile image url is too long (max 255 characters)")
    )]
    pub profile_image_url: Option<String>,
    /// Display name, also a lookup key
    #[validate(custom(function = validate_profile_name))]
    pub profile_name: String,
}

/// Profile shape safe to hand to external callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    /// Primary key
    pub profile_id: Uuid,
    /// Free-text about section
    #[validate(length(max = 512, message = "profile about is too long (max 512 characters)"))]
    pub profile_about: Option<String>,
    /// Avatar URL
    #[validate(
        url(message = "please provide a valid profile image url"),
        length(max = 255, message = "profile image url is too long (max 255 characters)")
    )]
    pub profile_image_url: Option<String>,
    /// Display name
    #[validate(custom(function = validate_profile_name))]
    pub profile_name: String,
}

/// Drops `profile_hash`, `profile_activation_token`, and `profile_email`;
/// every other field carries over unchanged.
impl From<PrivateProfile> for PublicProfile {
    fn from(profile: PrivateProfile) -> Self {
        // Full destructuring: a new PrivateProfile field will not compile
        // until it is explicitly carried or dropped here.
        let PrivateProfile {
            profile_id,
            profile_about,
            profile_activation_token: _,
            profile_email: _,
            profile_hash: _,
            profile_image_url,
            profile_name,
        } = profile;
        Self {
            profile_id,
            profile_about,
            profile_image_url,
            profile_name,
        }
    }
}

/// Insert draft for a profile. Storage generates `profile_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    /// Free-text about section
    #[validate(length(max = 512, message = "profile about is too long (max 512 characters)"))]
    pub profile_about: Option<String>,
    /// Opaque token issued at sign-up
    #[validate(length(
        equal = 32,
        message = "profile activation token must be 32 characters"
    ))]
    pub profile_activation_token: Option<String>,
    /// Login email
    #[validate(
        email(message = "please provide a valid profile email"),
        length(max = 128, message = "profile email is too long (max 128 characters)")
    )]
    pub profile_email: String,
    /// Credential hash
    #[validate(length(equal = 97, message = "profile hash must be 97 characters"))]
    pub profile_hash: String,
    /// Avatar URL
    #[validate(
        url(message = "please provide a valid profile image url"),
        length(max = 255, message = "profile image url is too long (max 255 characters)")
    )]
    pub profile_image_url: Option<String>,
    /// Display name
    #[validate(custom(function = validate_profile_name))]
    pub profile_name: String,
}

/// Shape of the data a client submits when signing up.
///
/// Validation shape only; deriving `profile_hash` from the password happens
/// in the authentication layer.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpProfile {
    /// Login email
    #[validate(
        email(message = "please provide a valid profile email"),
        length(max = 128, message = "profile email is too long (max 128 characters)")
    )]
    pub profile_email: String,
    /// Display name
    #[validate(custom(function = validate_profile_name))]
    pub profile_name: String,
    /// Password, 8-32 characters
    #[validate(length(
        min = 8,
        max = 32,
        message = "please provide a valid password (8-32 characters)"
    ))]
    pub profile_password: String,
    /// Must match `profile_password`
    #[validate(must_match(other = profile_password, message = "passwords do not match"))]
    pub profile_password_confirm: String,
}

/// Display names must be 1-32 characters after trimming.
fn validate_profile_name(profile_name: &str) -> Result<(), validator::ValidationError> {
    let trimmed = profile_name.trim();
    if trimmed.is_empty() || trimmed.chars().count() > 32 {
        let mut err = validator::ValidationError::new("length");
        err.message =
            Some("please provide a valid profile name (1-32 characters after trimming)".into());
        return Err(err);
    }
    Ok(())
}
