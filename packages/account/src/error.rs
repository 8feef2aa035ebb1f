use thiserror::Error;

/// Raised when account data does not satisfy the [`crate::Account`] schema.
///
/// Field names are reported by their serialized (camelCase) names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent or `null`.
    #[error("Missing required field: {field:?}")]
    MissingField { field: &'static str },
    /// The `accountType` value does not name an [`crate::AccountType`] variant.
    #[error("Invalid value for field \"accountType\": {value:?} is not one of USER, SUPERUSER, UNKNOWN")]
    InvalidAccountType { value: String },
    /// A field was present with the wrong shape.
    #[error("Invalid type for field {field:?}: expected {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
    /// The account document itself was not an object.
    #[error("Account must be an object")]
    NotAnObject,
}

impl ValidationError {
    /// The field that failed validation, if the error concerns a single field.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field } | Self::InvalidType { field, .. } => Some(*field),
            Self::InvalidAccountType { .. } => Some(crate::ACCOUNT_TYPE),
            Self::NotAnObject => None,
        }
    }
}
