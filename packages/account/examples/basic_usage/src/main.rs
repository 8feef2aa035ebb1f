#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Basic usage example for `accountbox_account`
//!
//! This example demonstrates:
//! - Building an account from raw input and handling validation errors
//! - Validating an account document from JSON
//! - Working with the anonymous account

use accountbox_account::{Account, AccountDetail, AccountType, ValidationError};
use accountbox_logging::{debug_or_trace, log};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    accountbox_logging::init(None)?;

    let mut detail = AccountDetail::new();
    detail.insert("age".to_string(), json!(20));
    detail.insert("email".to_string(), json!("user1234@email.com"));

    let account = Account::builder()
        .account_type(AccountType::User)
        .account_id("user1234")
        .account_name("user1234")
        .account_detail(detail)
        .build()?;

    account.scoped(|a| {
        println!(
            "Built {} account {:?} (age {})",
            a.account_type(),
            a.account_name(),
            a.account_detail()["age"]
        );
    });

    match Account::builder()
        .account_type("ADMIN")
        .account_id("root")
        .account_name("root")
        .account_detail(AccountDetail::new())
        .build()
    {
        Ok(account) => println!("Unexpectedly built {account:?}"),
        Err(e @ ValidationError::InvalidAccountType { .. }) => {
            println!("Rejected field {:?}: {e}", e.field().unwrap_or_default());
        }
        Err(e) => return Err(e.into()),
    }

    let document = json!({
        "accountType": "SUPERUSER",
        "accountId": "root",
        "accountName": "Root",
        "accountDetail": {},
    });
    let root = Account::try_from(&document)?;
    debug_or_trace!(
        ("Validated {}", root.account_id()),
        ("Validated {root:?} from {document}")
    );
    println!("Round trip: {}", serde_json::to_string(&root)?);

    let anonymous = Account::anonymous();
    log::info!("anonymous={}", anonymous.is_anonymous());
    println!("Anonymous: {}", anonymous.to_value());

    Ok(())
}
