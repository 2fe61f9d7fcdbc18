use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VmError::parse(3, "x")
            .to_string()
            .contains("parse failure at line 3:")
    );
    assert!(
        VmError::allocation("x")
            .to_string()
            .contains("allocation failure:")
    );
    assert!(
        VmError::attach(7, "x")
            .to_string()
            .contains("attach failure at line 7:")
    );
    assert!(VmError::emit("x").to_string().contains("emit failure:"));
    assert!(
        VmError::config("x")
            .to_string()
            .contains("configuration error:")
    );
}

#[test]
fn line_is_reported_only_for_line_scoped_errors() {
    assert_eq!(VmError::parse(2, "x").line(), Some(2));
    assert_eq!(VmError::attach(9, "x").line(), Some(9));
    assert_eq!(VmError::emit("x").line(), None);
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VmError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
