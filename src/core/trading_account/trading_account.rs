use crate::core::trading_account::status::TradingAccountStatus;
use crate::core::vault::VaultRef;

/// A link between a principal and a brokerage account. Credentials are
/// never carried in this type, only a `VaultRef` pointing at the envelope
/// that holds them; the broker profile is an opaque JSON-shaped blob the
/// core never interprets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingAccount {
    pub id: String,
    pub owner_user_id: String,
    pub broker_tag: String,
    pub broker_account_handle: String,
    pub status: TradingAccountStatus,
    pub vault_ref: VaultRef,
    pub broker_profile: String,
}

impl TradingAccount {
    pub fn new(
        id: impl Into<String>,
        owner_user_id: impl Into<String>,
        broker_tag: impl Into<String>,
        broker_account_handle: impl Into<String>,
        vault_ref: VaultRef,
    ) -> Self {
        Self {
            id: id.into(),
            owner_user_id: owner_user_id.into(),
            broker_tag: broker_tag.into(),
            broker_account_handle: broker_account_handle.into(),
            status: TradingAccountStatus::Active,
            vault_ref,
            broker_profile: String::new(),
        }
    }

    pub fn with_broker_profile(mut self, broker_profile: impl Into<String>) -> Self {
        self.broker_profile = broker_profile.into();
        self
    }

    /// Credentials were rotated in place: the account keeps its identity
    /// but now points at a new vault entry.
    pub fn rotate_credentials(&mut self, new_vault_ref: VaultRef) {
        self.vault_ref = new_vault_ref;
        if self.status == TradingAccountStatus::NeedsReauth {
            self.status = TradingAccountStatus::Active;
        }
    }

    pub fn revoke(&mut self) {
        self.status = TradingAccountStatus::Revoked;
    }

    pub fn mark_needs_reauth(&mut self) {
        if self.status == TradingAccountStatus::Active {
            self.status = TradingAccountStatus::NeedsReauth;
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_user_id == user_id
    }
}
