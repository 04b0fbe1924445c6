use cause_rail::traits::IntoCause;
use cause_rail::{Cause, ChainedError, ForeignError};
use std::borrow::Cow;

#[test]
fn strings_become_foreign_leaves() {
    assert_eq!("a".into_cause(), Cause::Foreign(ForeignError::new("a")));
    assert_eq!(String::from("b").into_cause(), Cause::Foreign(ForeignError::new("b")));
    assert_eq!(
        Cow::<'static, str>::Borrowed("c").into_cause(),
        Cause::Foreign(ForeignError::new("c")),
    );
}

#[test]
fn chained_errors_stay_chained() {
    let err = ChainedError::new("root");

    let by_ref = (&err).into_cause();
    assert!(by_ref.as_chained().is_some_and(|c| c.ptr_eq(&err)));
    assert!(matches!(err.into_cause(), Cause::Chained(_)));
}

#[test]
fn boxed_std_errors_keep_their_display() {
    let boxed: Box<dyn std::error::Error + Send + Sync> = "parse failure".into();
    let cause = boxed.into_cause();

    assert_eq!(cause.as_foreign().map(ForeignError::display), Some("parse failure"));
    assert_eq!(cause.to_string(), "parse failure");
}

#[test]
fn fmt_error_is_foreign() {
    let cause = core::fmt::Error.into_cause();
    assert_eq!(cause.to_string(), "an error occurred when formatting an argument");
}

#[cfg(feature = "std")]
#[test]
fn io_errors_are_foreign() {
    let io_err = std::io::Error::other("broken pipe");
    let cause = io_err.into_cause();

    assert_eq!(cause.as_foreign().map(ForeignError::display), Some("broken pipe"));
}

#[test]
fn custom_types_can_opt_in() {
    struct Timeout(u64);

    impl IntoCause for Timeout {
        fn into_cause(self) -> Cause {
            ChainedError::new(format!("timed out after {}ms", self.0)).into_cause()
        }
    }

    let err = ChainedError::caused_by("calling upstream", Timeout(250));
    assert_eq!(err.to_string(), "timed out after 250ms -> calling upstream");
    assert_eq!(err.root_message(), "timed out after 250ms");
}
