/// A grant of use-permission on a `TradingAccount` to a user other than
/// its owner. Membership does not transfer ownership or vault access —
/// the holder may act through the account via the orchestrator, never
/// read its credentials directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingAccountMembership {
    pub trading_account_id: String,
    pub grantee_user_id: String,
    pub granted_by_user_id: String,
    pub granted_at: String,
}

impl TradingAccountMembership {
    pub fn new(
        trading_account_id: impl Into<String>,
        grantee_user_id: impl Into<String>,
        granted_by_user_id: impl Into<String>,
        granted_at: impl Into<String>,
    ) -> Self {
        Self {
            trading_account_id: trading_account_id.into(),
            grantee_user_id: grantee_user_id.into(),
            granted_by_user_id: granted_by_user_id.into(),
            granted_at: granted_at.into(),
        }
    }
}
