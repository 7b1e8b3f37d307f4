/// The signed-in user as reported by the authentication provider.
///
/// Both fields are optional because the provider may not know them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

impl UserProfile {
    pub fn new(display_name: Option<String>, photo_url: Option<String>) -> Self {
        Self {
            display_name,
            photo_url,
        }
    }
}
