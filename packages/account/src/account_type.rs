//! The closed set of account roles.
//!
//! Every variant is backed by its literal name (`USER`, `SUPERUSER`,
//! `UNKNOWN`) and compares equal to that raw string in either direction.

use std::str::FromStr as _;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::error::ValidationError;

/// Role or state of an [`crate::Account`].
#[derive(
    Debug,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    EnumIter,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Regular account
    User,
    /// Privileged account
    Superuser,
    /// Placeholder for an absent or unauthenticated identity
    Unknown,
}

impl AccountType {
    /// Returns the literal name backing this variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Superuser => "SUPERUSER",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parses the exact variant name, reporting failures against the
    /// `accountType` field.
    ///
    /// Matching is case-sensitive and never falls back to
    /// [`AccountType::Unknown`].
    ///
    /// # Errors
    ///
    /// * [`ValidationError::InvalidAccountType`] if `value` is not a variant name
    pub fn validate(value: &str) -> Result<Self, ValidationError> {
        Self::from_str(value).map_err(|_| ValidationError::InvalidAccountType {
            value: value.to_string(),
        })
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for AccountType {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for AccountType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<String> for AccountType {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<AccountType> for str {
    fn eq(&self, other: &AccountType) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<AccountType> for &str {
    fn eq(&self, other: &AccountType) -> bool {
        *self == other.as_str()
    }
}

impl PartialEq<AccountType> for String {
    fn eq(&self, other: &AccountType) -> bool {
        self == other.as_str()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator as _;

    use super::*;

    #[test_log::test]
    fn account_type_equals_its_name() {
        assert_eq!(AccountType::User, "USER");
        assert_eq!(AccountType::Superuser, "SUPERUSER");
        assert_eq!(AccountType::Unknown, "UNKNOWN");

        assert!("USER" == AccountType::User);
        assert!(String::from("SUPERUSER") == AccountType::Superuser);
        assert!(AccountType::Unknown == String::from("UNKNOWN"));
    }

    #[test_log::test]
    fn account_type_does_not_equal_other_names() {
        assert!(AccountType::User != "SUPERUSER");
        assert!(AccountType::User != "user");
        assert!("UNKNOWN" != AccountType::User);
    }

    #[test_log::test]
    fn as_ref_display_and_as_str_agree() {
        for account_type in AccountType::iter() {
            assert_eq!(account_type.as_ref(), account_type.as_str());
            assert_eq!(account_type.to_string(), account_type.as_str());
        }
    }

    #[test_log::test]
    fn iter_lists_three_variants_in_order() {
        assert_eq!(
            AccountType::iter().collect::<Vec<_>>(),
            vec![
                AccountType::User,
                AccountType::Superuser,
                AccountType::Unknown
            ]
        );
    }

    #[test_log::test]
    fn validate_accepts_exact_names() {
        assert_eq!(AccountType::validate("USER"), Ok(AccountType::User));
        assert_eq!(
            AccountType::validate("SUPERUSER"),
            Ok(AccountType::Superuser)
        );
        assert_eq!(AccountType::validate("UNKNOWN"), Ok(AccountType::Unknown));
    }

    #[test_log::test]
    fn validate_rejects_unrecognized_names_without_coercing() {
        for value in ["user", "ADMIN", "", " USER"] {
            assert_eq!(
                AccountType::validate(value),
                Err(ValidationError::InvalidAccountType {
                    value: value.to_string()
                })
            );
        }
    }

    #[test_log::test]
    fn serde_uses_literal_names() {
        assert_eq!(
            serde_json::to_value(AccountType::Superuser).unwrap(),
            serde_json::json!("SUPERUSER")
        );
        assert_eq!(
            serde_json::from_value::<AccountType>(serde_json::json!("USER")).unwrap(),
            AccountType::User
        );
        assert!(serde_json::from_value::<AccountType>(serde_json::json!("ADMIN")).is_err());
    }
}
