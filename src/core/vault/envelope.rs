/// Metadata describing one envelope-encrypted secret.
///
/// `ciphertext` and `wrapped_data_key` are the only byte payloads; the
/// plaintext data key never appears in this type — it exists transiently in
/// the adapter during encrypt/decrypt and is zeroed immediately after use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretEnvelope {
    pub owner: String,
    pub label: String,
    pub kms_key_id: String,
    pub nonce: Vec<u8>,
    pub wrapped_data_key: Vec<u8>,
    pub ciphertext: Vec<u8>,
    pub tombstoned: bool,
}

impl SecretEnvelope {
    pub fn new(
        owner: impl Into<String>,
        label: impl Into<String>,
        kms_key_id: impl Into<String>,
        nonce: Vec<u8>,
        wrapped_data_key: Vec<u8>,
        ciphertext: Vec<u8>,
    ) -> Self {
        Self {
            owner: owner.into(),
            label: label.into(),
            kms_key_id: kms_key_id.into(),
            nonce,
            wrapped_data_key,
            ciphertext,
            tombstoned: false,
        }
    }

    pub fn tombstone(&self) -> Self {
        Self {
            tombstoned: true,
            ..self.clone()
        }
    }
}
