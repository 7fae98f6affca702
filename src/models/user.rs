use serde::{Deserialize, Serialize};
use validator::Validate;

/// Public user fields shared by every user shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBase {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Sign-up payload, the only shape that carries a raw password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserIn {
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub password: String,
}

impl UserIn {
    /// Split into the public fields and the raw password
    pub fn into_parts(self) -> (UserBase, String) {
        let base = UserBase {
            username: self.username,
            email: self.email,
            full_name: self.full_name,
        };
        (base, self.password)
    }
}

/// Stored user: the raw password has been replaced by its hash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInDb {
    #[serde(flatten)]
    pub base: UserBase,
    pub hashed_password: String,
}

/// Response shape for every user endpoint; has no password field at all
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserOut {
    #[serde(flatten)]
    pub base: UserBase,
}

impl From<UserInDb> for UserOut {
    fn from(user: UserInDb) -> Self {
        Self { base: user.base }
    }
}

impl From<UserBase> for UserOut {
    fn from(base: UserBase) -> Self {
        Self { base }
    }
}
