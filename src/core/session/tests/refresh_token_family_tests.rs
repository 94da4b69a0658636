use crate::core::session::{RefreshTokenRecord, RotationOutcome};

#[test]
fn open_family_has_no_parent() {
    let rec = RefreshTokenRecord::open_family("jti-1", "fam-1", "user-1", "sid-1");
    assert!(rec.parent_jti.is_none());
    assert!(!rec.consumed);
    assert!(rec.rotated_to.is_none());
}

#[test]
fn descend_inherits_family_and_points_to_parent() {
    let parent = RefreshTokenRecord::open_family("jti-1", "fam-1", "user-1", "sid-1");
    let child = RefreshTokenRecord::descend(&parent, "jti-2");

    assert_eq!(child.family_id, parent.family_id);
    assert_eq!(child.user_id, parent.user_id);
    assert_eq!(child.parent_jti, Some("jti-1".to_string()));
    assert_eq!(child.jti, "jti-2");
}

#[test]
fn reuse_detected_outcome_is_flagged() {
    let outcome = RotationOutcome::ReuseDetected {
        family_id: "fam-1".to_string(),
    };
    assert!(outcome.is_reuse_detected());
    assert!(!RotationOutcome::UnknownToken.is_reuse_detected());
    assert!(!RotationOutcome::Rotated { new_jti: "jti-2".to_string() }.is_reuse_detected());
}
