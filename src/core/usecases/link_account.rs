//! Use case: LinkAccount
//!
//! Links a brokerage account to a principal by encrypting its credentials
//! into the vault and recording the handle. Plaintext credentials never
//! leave this call except into the `Vault` port.

use std::sync::Arc;

use crate::core::audit::AuthEvent;
use crate::core::error::CoreError;
use crate::core::event::DomainEvent;
use crate::core::trading_account::TradingAccount;
use crate::core::usecases::ports::{AuditLog, Clock, EventBus, TradingAccountRepository, Vault};

/// Input contract for LinkAccount use case.
pub struct LinkAccountInput {
    pub user_id: String,
    pub broker_tag: String,
    pub broker_account_handle: String,
    pub credentials: Vec<u8>,
}

pub struct LinkAccountOutput {
    pub account_id: String,
}

pub struct LinkAccount {
    trading_account_repo: Arc<dyn TradingAccountRepository>,
    vault: Arc<dyn Vault>,
    audit_log: Arc<dyn AuditLog>,
    event_bus: Arc<dyn EventBus>,
    clock: Arc<dyn Clock>,
}

impl LinkAccount {
    pub fn new(
        trading_account_repo: Arc<dyn TradingAccountRepository>,
        vault: Arc<dyn Vault>,
        audit_log: Arc<dyn AuditLog>,
        event_bus: Arc<dyn EventBus>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            trading_account_repo,
            vault,
            audit_log,
            event_bus,
            clock,
        }
    }

    pub async fn execute(&self, input: LinkAccountInput) -> Result<LinkAccountOutput, CoreError> {
        let account_id = uuid::Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)).to_string();

        let vault_ref = self
            .vault
            .store(&account_id, &input.broker_tag, &input.credentials)
            .await?;

        let account = TradingAccount::new(
            &account_id,
            &input.user_id,
            &input.broker_tag,
            &input.broker_account_handle,
            vault_ref,
        );
        self.trading_account_repo.create(&account).await?;

        let now = self.clock.now().to_rfc3339();
        let event_id = uuid::Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)).to_string();
        self.audit_log
            .append(AuthEvent::new(event_id.clone(), "account.linked", &now, &input.user_id).with_resource(&account_id))
            .await?;
        self.event_bus
            .publish(
                DomainEvent::new(event_id, "account.linked", &now)
                    .with_subject(&input.user_id)
                    .with_resource(&account_id),
            )
            .await;

        Ok(LinkAccountOutput { account_id })
    }
}
