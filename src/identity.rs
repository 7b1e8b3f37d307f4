//! Greeting data derived from the authentication provider.
//!
//! Read-only and informational; nothing in the storefront is gated on it.

use crate::domain::UserProfile;

pub const GUEST_NAME: &str = "Guest";
pub const UNNAMED_USER: &str = "No Name";
pub const PLACEHOLDER_PHOTO_URL: &str = "https://via.placeholder.com/150";

/// Source of the currently signed-in user.
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<UserProfile>;
}

/// Provider that always reports the same user (or nobody).
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user: Option<UserProfile>,
}

impl StaticIdentity {
    pub fn signed_in(user: UserProfile) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<UserProfile> {
        self.user.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Greeting {
    pub display_name: String,
    pub photo_url: String,
}

impl Greeting {
    pub fn for_user(user: Option<&UserProfile>) -> Self {
        match user {
            None => Self {
                display_name: GUEST_NAME.to_string(),
                photo_url: PLACEHOLDER_PHOTO_URL.to_string(),
            },
            Some(user) => Self {
                display_name: user
                    .display_name
                    .clone()
                    .unwrap_or_else(|| UNNAMED_USER.to_string()),
                photo_url: user
                    .photo_url
                    .clone()
                    .unwrap_or_else(|| PLACEHOLDER_PHOTO_URL.to_string()),
            },
        }
    }

    pub fn from_provider(provider: &dyn IdentityProvider) -> Self {
        Self::for_user(provider.current_user().as_ref())
    }
}
