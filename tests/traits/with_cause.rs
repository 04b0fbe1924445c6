use cause_rail::traits::WithCause;
use cause_rail::{ChainedError, Outcome};
use std::cell::Cell;

#[test]
fn ok_passes_through() {
    let result: Result<u8, &str> = Ok(3);
    assert_eq!(result.with_cause("unused"), Ok(3));
}

#[test]
fn chained_error_gets_a_new_top() {
    let root = ChainedError::new("root");
    let result: Result<(), ChainedError> = Err(root.clone());

    let err = result.with_cause("top").unwrap_err();
    assert_eq!(err.to_string(), "root -> top");
    assert!(err.root().as_chained().is_some_and(|r| r.ptr_eq(&root)));
}

#[test]
fn foreign_error_becomes_two_levels() {
    let err = Err::<(), _>("boom").with_cause("top").unwrap_err();

    assert_eq!(err.depth(), 2);
    assert_eq!(err.root_message(), "boom");
    assert_eq!(err.trace(), "\ttop\n\tcaused by: boom");
}

#[test]
fn lazy_message_only_runs_on_error() {
    let calls = Cell::new(0);
    let message = || {
        calls.set(calls.get() + 1);
        String::from("lazy")
    };

    let ok: Outcome<u8> = Ok::<u8, &str>(1).with_cause_with(message);
    assert_eq!(ok, Ok(1));
    assert_eq!(calls.get(), 0);

    let err = Err::<u8, &str>("x").with_cause_with(message).unwrap_err();
    assert_eq!(err.message(), "lazy");
    assert_eq!(calls.get(), 1);
}
