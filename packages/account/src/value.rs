//! Typed field extraction from `serde_json` documents.
//!
//! This is the schema-validation layer behind [`crate::Account::from_value`]:
//! each field is looked up by name and converted to its Rust type, and any
//! failure is reported as a [`ValidationError`] naming that field. Every
//! field is required: absent and `null` fields are both missing.

use serde_json::Value;

use crate::{AccountDetail, AccountType, error::ValidationError};

/// Reason a present value could not be converted to the target type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The value has the wrong JSON shape.
    Type(&'static str),
    /// The value is a string that does not name an [`AccountType`].
    AccountType(String),
}

impl ConvertError {
    /// Attaches the field name the value was read from.
    #[must_use]
    pub fn for_field(self, field: &'static str) -> ValidationError {
        match self {
            Self::Type(expected) => ValidationError::InvalidType { field, expected },
            Self::AccountType(value) => ValidationError::InvalidAccountType { value },
        }
    }
}

/// Trait for converting a JSON value to a target type.
pub trait ToValueType<T> {
    /// Converts this value to the target type.
    ///
    /// # Errors
    ///
    /// * If the value has the wrong shape for `T`
    fn to_value_type(self) -> Result<T, ConvertError>;
}

impl ToValueType<String> for &Value {
    fn to_value_type(self) -> Result<String, ConvertError> {
        Ok(self
            .as_str()
            .ok_or(ConvertError::Type("string"))?
            .to_string())
    }
}

impl ToValueType<AccountType> for &Value {
    fn to_value_type(self) -> Result<AccountType, ConvertError> {
        let value = self.as_str().ok_or(ConvertError::Type("string"))?;

        AccountType::validate(value).map_err(|_| ConvertError::AccountType(value.to_string()))
    }
}

impl ToValueType<AccountDetail> for &Value {
    fn to_value_type(self) -> Result<AccountDetail, ConvertError> {
        self.as_object()
            .cloned()
            .ok_or(ConvertError::Type("object"))
    }
}

/// Reads named fields out of a JSON object.
pub trait ToValue {
    /// Looks up `field` and converts it to `T`.
    ///
    /// # Errors
    ///
    /// * [`ValidationError::NotAnObject`] if `self` is not a JSON object
    /// * [`ValidationError::MissingField`] if the field is absent or `null`
    /// * [`ValidationError::InvalidType`] or [`ValidationError::InvalidAccountType`]
    ///   if the field fails to convert
    fn to_value<'a, T>(&'a self, field: &'static str) -> Result<T, ValidationError>
    where
        &'a Value: ToValueType<T>;
}

impl ToValue for Value {
    fn to_value<'a, T>(&'a self, field: &'static str) -> Result<T, ValidationError>
    where
        &'a Value: ToValueType<T>,
    {
        let object = self.as_object().ok_or(ValidationError::NotAnObject)?;

        match object.get(field) {
            None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
            Some(inner) => inner
                .to_value_type()
                .map_err(|e| e.for_field(field)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test_log::test]
    fn to_value_reads_string_field() {
        let json = json!({ "accountId": "user1234" });

        assert_eq!(
            json.to_value::<String>("accountId").unwrap(),
            "user1234".to_string()
        );
    }

    #[test_log::test]
    fn to_value_reads_account_type_field() {
        let json = json!({ "accountType": "SUPERUSER" });

        assert_eq!(
            json.to_value::<AccountType>("accountType").unwrap(),
            AccountType::Superuser
        );
    }

    #[test_log::test]
    fn to_value_reads_detail_field_unmodified() {
        let json = json!({ "accountDetail": { "age": 20, "tags": ["a", "b"] } });

        let detail = json.to_value::<AccountDetail>("accountDetail").unwrap();

        assert_eq!(detail["age"], 20);
        assert_eq!(detail["tags"], json!(["a", "b"]));
    }

    #[test_log::test]
    fn to_value_reports_missing_and_null_fields() {
        let json = json!({ "accountName": null });

        assert_eq!(
            json.to_value::<String>("accountId"),
            Err(ValidationError::MissingField { field: "accountId" })
        );
        assert_eq!(
            json.to_value::<String>("accountName"),
            Err(ValidationError::MissingField {
                field: "accountName"
            })
        );
    }

    #[test_log::test]
    fn to_value_reports_wrong_shapes() {
        let json = json!({ "accountId": 1234, "accountDetail": [], "accountType": 1 });

        assert_eq!(
            json.to_value::<String>("accountId"),
            Err(ValidationError::InvalidType {
                field: "accountId",
                expected: "string"
            })
        );
        assert_eq!(
            json.to_value::<AccountDetail>("accountDetail"),
            Err(ValidationError::InvalidType {
                field: "accountDetail",
                expected: "object"
            })
        );
        assert_eq!(
            json.to_value::<AccountType>("accountType"),
            Err(ValidationError::InvalidType {
                field: "accountType",
                expected: "string"
            })
        );
    }

    #[test_log::test]
    fn to_value_reports_unrecognized_account_type() {
        let json = json!({ "accountType": "ADMIN" });

        assert_eq!(
            json.to_value::<AccountType>("accountType"),
            Err(ValidationError::InvalidAccountType {
                value: "ADMIN".to_string()
            })
        );
    }

    #[test_log::test]
    fn to_value_rejects_non_objects() {
        assert_eq!(
            json!("USER").to_value::<String>("accountType"),
            Err(ValidationError::NotAnObject)
        );
    }
}
