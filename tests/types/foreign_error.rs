use cause_rail::ForeignError;
use std::io;

#[test]
fn captures_display_string_only() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "config.toml missing");
    let foreign = ForeignError::new(&io_err);

    assert_eq!(foreign.display(), "config.toml missing");
    assert_eq!(foreign.to_string(), "config.toml missing");
    assert_eq!(foreign.clone().into_display(), "config.toml missing");
}

#[test]
fn from_display_and_new_agree() {
    assert_eq!(ForeignError::new("x"), ForeignError::from_display("x"));
    assert_eq!(ForeignError::new(&42), ForeignError::from_display("42"));
}

#[test]
fn foreign_error_has_no_source() {
    use core::error::Error;

    assert!(ForeignError::new("leaf").source().is_none());
}
