use cause_rail::{decorate, with_cause, ChainedError, ForeignError};

#[test]
fn decorate_without_error_is_a_no_op() {
    let (value, err) = decorate(vec![1, 2], None::<ChainedError>, "never used");

    assert_eq!(value, [1, 2]);
    assert!(err.is_none());
}

#[test]
fn decorate_chained_error_keeps_root() {
    let first = ChainedError::new("first");
    let mut current = first.clone();
    for step in ["parse", "validate", "store"] {
        let (_, err) = decorate((), Some(current), step);
        current = err.unwrap_or_else(|| ChainedError::new("unexpected"));
    }

    assert_eq!(current.to_string(), "first -> parse -> validate -> store");
    assert!(current.root().as_chained().is_some_and(|r| r.ptr_eq(&first)));
}

#[test]
fn decorate_foreign_error_builds_two_levels() {
    let (value, err) = decorate(0, Some(ForeignError::new("some error occurred")), "oopsies");
    let err = err.unwrap_or_else(|| ChainedError::new("unexpected"));

    assert_eq!(value, 0);
    assert_eq!(err.depth(), 2);
    assert_eq!(
        err.report(),
        "error:\n\toopsies\n\nRoot cause:\n\tsome error occurred\n\nFull error trace:\n\toopsies\n\tcaused by: some error occurred",
    );
    let inner = err.cause().and_then(|c| c.as_chained()).cloned();
    assert!(inner.is_some_and(|inner| inner.is_root()));
}

#[test]
fn decorate_is_pure() {
    let root = ChainedError::new("root");

    let (_, a) = decorate((), Some(&root), "top");
    let (_, b) = decorate((), Some(&root), "top");

    assert_eq!(a, b);
    assert_eq!(root.to_string(), "root");
    assert!(root.is_root());
}

#[test]
fn curried_with_cause_matches_decorate() {
    let (value, err) = with_cause(3, Some("db down"))("loading");

    assert_eq!(value, 3);
    assert_eq!(err.map(|e| e.to_string()).as_deref(), Some("db down -> loading"));
}
