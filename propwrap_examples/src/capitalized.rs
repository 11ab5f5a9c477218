//! An example of a wrapped property that normalizes every string
//! assigned to it.
//!
//! Both the values given to [`User::new`] and those given to the generated
//! setters pass through [`Capitalized`], so a [`User`] can never hold a name
//! that is not upper case.

use propwrap::{properties, Transform};
use serde::{Deserialize, Serialize};

/// Folds every stored string to upper case
#[derive(Debug)]
pub struct Capitalized;

impl Transform for Capitalized {
    type Value = String;

    fn transform(value: String) -> String {
        value.to_uppercase()
    }
}

/// A user whose names are always stored in capitals
#[properties(constructor)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user's given name
    #[wrap(Capitalized)]
    pub first_name: String,
    /// The user's family name
    #[wrap(Capitalized)]
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn construction_capitalizes() {
        let user = User::new("hi".to_owned(), "there".to_owned());
        assert_eq!(user.first_name(), "HI");
        assert_eq!(user.last_name(), "THERE");
    }

    #[test]
    fn assignment_capitalizes() {
        let mut user = User::new("grace".to_owned(), "hopper".to_owned());
        user.set_first_name("Amazing Grace".to_owned());
        assert_eq!(user.first_name(), "AMAZING GRACE");
        assert_eq!(user.last_name(), "HOPPER");
    }

    #[test]
    fn deserialized_users_are_capitalized() {
        let user: User =
            serde_json::from_str(r#"{"first_name":"ada","last_name":"Lovelace"}"#).unwrap();
        assert_eq!(user, User::new("ADA".to_owned(), "LOVELACE".to_owned()));
    }

    #[test]
    fn serializes_stored_names() {
        let user = User::new("alan".to_owned(), "turing".to_owned());
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            r#"{"first_name":"ALAN","last_name":"TURING"}"#
        );
    }

    #[quickcheck]
    fn already_capitalized_names_are_kept(s: String) -> bool {
        let upper = s.to_uppercase();
        let user = User::new(upper.clone(), upper.clone());
        *user.first_name() == upper && *user.last_name() == upper
    }
}
