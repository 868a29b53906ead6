use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The kinds of accounts that own a live location.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Maid,
    Homeowner,
    CleaningCompany,
    HomeNurse,
}

/// The authenticated user on whose behalf a location is reported.
///
/// The role tag is kept verbatim because accounts of other
/// kinds (e.g. admins) exist but don't own a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_type: String,
}

impl Actor {
    pub fn new(user_type: impl Into<String>) -> Self {
        Self {
            user_type: user_type.into(),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user_type.parse().ok()
    }
}

impl From<Role> for Actor {
    fn from(role: Role) -> Self {
        Self::new(role.as_ref())
    }
}
