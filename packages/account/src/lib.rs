//! Validated account model for `AccountBox`.
//!
//! An [`Account`] describes an identity: its [`AccountType`], an identifier, a
//! display name and a free-form detail mapping. Values are immutable once
//! built and can only be obtained in a valid state:
//!
//! * [`Account::new`] - from already-typed fields
//! * [`Account::builder`] - from loosely-typed input, validated by [`AccountBuilder::build`]
//! * [`Account::from_value`] - from an untrusted JSON document
//! * [`Account::anonymous`] - the canonical placeholder for an absent identity
//!
//! # Example
//!
//! ```rust
//! use accountbox_account::{Account, AccountType};
//!
//! let account = Account::builder()
//!     .account_type("USER")
//!     .account_id("user1234")
//!     .account_name("user1234")
//!     .account_detail(Default::default())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(account.account_type(), AccountType::User);
//! assert!(Account::anonymous().is_anonymous());
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::module_name_repetitions)]

pub mod account_type;
pub mod error;
pub mod value;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use account_type::AccountType;
pub use error::ValidationError;

use crate::value::ToValue as _;

/// Identifier and display name carried by the anonymous account.
pub const UNKNOWN: &str = "UNKNOWN";

pub(crate) const ACCOUNT_TYPE: &str = "accountType";
pub(crate) const ACCOUNT_ID: &str = "accountId";
pub(crate) const ACCOUNT_NAME: &str = "accountName";
pub(crate) const ACCOUNT_DETAIL: &str = "accountDetail";

/// Free-form attributes attached to an account.
pub type AccountDetail = serde_json::Map<String, Value>;

/// An immutable, validated account record.
///
/// Deserialization goes through [`Account::from_value`], so an invalid
/// `Account` can never be observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct Account {
    account_type: AccountType,
    account_id: String,
    account_name: String,
    account_detail: AccountDetail,
}

impl Account {
    /// Creates an account from typed fields, stored exactly as given.
    #[must_use]
    pub fn new(
        account_type: AccountType,
        account_id: impl Into<String>,
        account_name: impl Into<String>,
        account_detail: AccountDetail,
    ) -> Self {
        Self {
            account_type,
            account_id: account_id.into(),
            account_name: account_name.into(),
            account_detail,
        }
    }

    /// Starts an [`AccountBuilder`] with no fields set.
    #[must_use]
    pub const fn builder() -> AccountBuilder {
        AccountBuilder::new()
    }

    /// Returns the canonical anonymous account.
    ///
    /// Every call produces a fresh value; all of them compare equal.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::new(AccountType::Unknown, UNKNOWN, UNKNOWN, AccountDetail::new())
    }

    /// Whether this account equals [`Account::anonymous`].
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.account_type == AccountType::Unknown
            && self.account_id == UNKNOWN
            && self.account_name == UNKNOWN
            && self.account_detail.is_empty()
    }

    /// Validates an account document with camelCase keys.
    ///
    /// Keys other than the four account fields are ignored.
    ///
    /// # Errors
    ///
    /// * [`ValidationError::NotAnObject`] if `value` is not a JSON object
    /// * [`ValidationError::MissingField`] if a field is absent or `null`
    /// * [`ValidationError::InvalidAccountType`] if `accountType` is not a variant name
    /// * [`ValidationError::InvalidType`] if a field has the wrong shape
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let account = Self::read_fields(value);

        match &account {
            Ok(account) => log::trace!("from_value: validated account {}", account.account_id),
            Err(e) => log::debug!("from_value: rejected account document: {e}"),
        }

        account
    }

    fn read_fields(value: &Value) -> Result<Self, ValidationError> {
        Ok(Self {
            account_type: value.to_value(ACCOUNT_TYPE)?,
            account_id: value.to_value(ACCOUNT_ID)?,
            account_name: value.to_value(ACCOUNT_NAME)?,
            account_detail: value.to_value(ACCOUNT_DETAIL)?,
        })
    }

    /// Dumps this account to a JSON document with camelCase keys.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut object = serde_json::Map::new();
        object.insert(ACCOUNT_TYPE.to_string(), self.account_type.as_str().into());
        object.insert(ACCOUNT_ID.to_string(), self.account_id.clone().into());
        object.insert(ACCOUNT_NAME.to_string(), self.account_name.clone().into());
        object.insert(
            ACCOUNT_DETAIL.to_string(),
            Value::Object(self.account_detail.clone()),
        );
        Value::Object(object)
    }

    #[must_use]
    pub const fn account_type(&self) -> AccountType {
        self.account_type
    }

    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    #[must_use]
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    #[must_use]
    pub const fn account_detail(&self) -> &AccountDetail {
        &self.account_detail
    }

    /// Consumes the account, returning `(type, id, name, detail)`.
    #[must_use]
    pub fn into_parts(self) -> (AccountType, String, String, AccountDetail) {
        (
            self.account_type,
            self.account_id,
            self.account_name,
            self.account_detail,
        )
    }

    /// Runs `f` with this account and returns its result.
    ///
    /// Nothing is released afterwards and panics inside `f` propagate.
    pub fn scoped<R>(&self, f: impl FnOnce(&Self) -> R) -> R {
        f(self)
    }
}

impl TryFrom<&Value> for Account {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl TryFrom<Value> for Account {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

impl From<Account> for Value {
    fn from(value: Account) -> Self {
        value.to_value()
    }
}

/// Collects account fields from loosely-typed input and validates them
/// all at once in [`AccountBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct AccountBuilder {
    account_type: Option<String>,
    account_id: Option<String>,
    account_name: Option<String>,
    account_detail: Option<AccountDetail>,
}

impl AccountBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            account_type: None,
            account_id: None,
            account_name: None,
            account_detail: None,
        }
    }

    /// Sets the account type from an [`AccountType`] or its raw name.
    #[must_use]
    pub fn account_type(mut self, account_type: impl AsRef<str>) -> Self {
        self.account_type = Some(account_type.as_ref().to_string());
        self
    }

    #[must_use]
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    #[must_use]
    pub fn account_name(mut self, account_name: impl Into<String>) -> Self {
        self.account_name = Some(account_name.into());
        self
    }

    #[must_use]
    pub fn account_detail(mut self, account_detail: AccountDetail) -> Self {
        self.account_detail = Some(account_detail);
        self
    }

    /// Validates the collected fields in declaration order.
    ///
    /// # Errors
    ///
    /// * [`ValidationError::MissingField`] if a field was never set
    /// * [`ValidationError::InvalidAccountType`] if the account type is not a variant name
    pub fn build(self) -> Result<Account, ValidationError> {
        let account_type = self
            .account_type
            .ok_or(ValidationError::MissingField {
                field: ACCOUNT_TYPE,
            })
            .and_then(|x| AccountType::validate(&x))
            .inspect_err(|e| log::debug!("build: {e}"))?;
        let account_id = self
            .account_id
            .ok_or(ValidationError::MissingField { field: ACCOUNT_ID })
            .inspect_err(|e| log::debug!("build: {e}"))?;
        let account_name = self
            .account_name
            .ok_or(ValidationError::MissingField {
                field: ACCOUNT_NAME,
            })
            .inspect_err(|e| log::debug!("build: {e}"))?;
        let account_detail = self
            .account_detail
            .ok_or(ValidationError::MissingField {
                field: ACCOUNT_DETAIL,
            })
            .inspect_err(|e| log::debug!("build: {e}"))?;

        log::trace!("build: account_id={account_id} account_type={account_type}");

        Ok(Account {
            account_type,
            account_id,
            account_name,
            account_detail,
        })
    }
}
