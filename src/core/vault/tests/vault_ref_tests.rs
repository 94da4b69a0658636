use crate::core::vault::VaultRef;

#[test]
fn display_is_prefixed() {
    let r = VaultRef::new("abc123");
    assert_eq!(r.to_string(), "vault:abc123");
    assert_eq!(r.id(), "abc123");
}

#[test]
fn equality_is_by_id() {
    assert_eq!(VaultRef::new("x"), VaultRef::new("x"));
    assert_ne!(VaultRef::new("x"), VaultRef::new("y"));
}
