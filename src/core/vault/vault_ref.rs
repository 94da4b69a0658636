/// Opaque handle to a secret stored via envelope encryption.
///
/// Callers never see plaintext or key material through this type; it is
/// purely an identifier to hand back to the vault for `fetch`/`rotate`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VaultRef {
    id: String,
}

impl VaultRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for VaultRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vault:{}", self.id)
    }
}
