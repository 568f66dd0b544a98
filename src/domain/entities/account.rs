//! Account entity: the recipient of an invite.

use serde::{Deserialize, Serialize};

/// The account an invite is issued for.
///
/// Constant for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub uid: String,
    pub account_type: String,
    pub contact_email: String,
    /// Name substituted into the email greeting.
    pub display_name: String,
}

impl Account {
    /// Creates a new Account instance.
    pub fn new(
        uid: impl Into<String>,
        account_type: impl Into<String>,
        contact_email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            account_type: account_type.into(),
            contact_email: contact_email.into(),
            display_name: display_name.into(),
        }
    }

    /// Returns the identity claims the token is signed over.
    pub fn identity(&self) -> Identity {
        Identity {
            uid: self.uid.clone(),
            account_type: self.account_type.clone(),
        }
    }
}

/// Identity payload embedded in a signed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    #[serde(rename = "type")]
    pub account_type: String,
}
