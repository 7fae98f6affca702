//! User creation flow: `UserIn` -> `UserInDb` -> `UserOut`
//!
//! Nothing is persisted. The "save" step only builds the stored shape and logs.

use crate::models::{UserBase, UserIn, UserInDb, UserOut};

/// Turns a raw password into the value kept in `UserInDb::hashed_password`
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, raw_password: &str) -> String;
}

/// Demo hasher: prefixes a constant. Not a real hash.
#[derive(Debug, Clone, Default)]
pub struct FakePasswordHasher;

impl PasswordHasher for FakePasswordHasher {
    fn hash(&self, raw_password: &str) -> String {
        format!("supersecret{}", raw_password)
    }
}

/// Replace the raw password with its hash and pretend to store the user
pub fn save_user(user_in: UserIn, hasher: &dyn PasswordHasher) -> UserInDb {
    let (base, password) = user_in.into_parts();
    let hashed_password = hasher.hash(&password);

    tracing::info!(username = %base.username, "User saved! ..not really");

    UserInDb { base, hashed_password }
}

pub fn create_user(user_in: UserIn, hasher: &dyn PasswordHasher) -> UserOut {
    UserOut::from(save_user(user_in, hasher))
}

/// Canned lookup behind `GET /user`; the name is only logged
pub fn get_user(name: &str) -> UserOut {
    tracing::debug!(name = %name, "looking up user");

    UserOut::from(UserBase {
        username: "Test".to_string(),
        email: "jj@email.com".to_string(),
        full_name: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_in(password: &str) -> UserIn {
        serde_json::from_value(serde_json::json!({
            "username": "john",
            "email": "john@example.com",
            "full_name": "John Doe",
            "password": password
        }))
        .unwrap()
    }

    #[test]
    fn fake_hasher_prefixes_constant() {
        assert_eq!(FakePasswordHasher.hash("x"), "supersecretx");
    }

    #[test]
    fn saved_user_holds_only_the_hash() {
        let db = save_user(user_in("x"), &FakePasswordHasher);
        assert_eq!(db.hashed_password, "supersecretx");
        assert_eq!(db.base.username, "john");

        let value = serde_json::to_value(&db).unwrap();
        assert!(value.get("password").is_none());
    }

    #[test]
    fn created_user_has_no_password_material() {
        let out = create_user(user_in("x"), &FakePasswordHasher);
        let value = serde_json::to_value(&out).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.keys().all(|k| !k.contains("password")));
        assert!(object.values().all(|v| v != "x" && v != "supersecretx"));
        assert_eq!(value["full_name"], "John Doe");
    }

    #[test]
    fn get_user_returns_canned_record() {
        let out = get_user("anyone");
        assert_eq!(out.base.username, "Test");
        assert_eq!(out.base.email, "jj@email.com");
    }
}
