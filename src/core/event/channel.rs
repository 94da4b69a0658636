/// A topical publish channel. Every event also goes to `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    All,
    User,
    Auth,
    Authz,
    TradingAccount,
    Security,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "events.all",
            Self::User => "events.user",
            Self::Auth => "events.auth",
            Self::Authz => "events.authz",
            Self::TradingAccount => "events.trading_account",
            Self::Security => "events.security",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
