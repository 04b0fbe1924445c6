use cause_rail::{chain, ensure, raise, Boundary, ChainedError, Flow, ForeignError};

#[test]
fn chain_builds_root_nodes() {
    let err = chain!("row {} missing", 7);

    assert!(err.is_root());
    assert_eq!(err.message(), "row 7 missing");
    assert_eq!(chain!("plain").message(), "plain");
}

#[test]
fn chain_wraps_causes() {
    let root = chain!("root");
    let top = chain!(root.clone() => "top {}", 1);
    let foreign = chain!(ForeignError::new("io") => "reading");

    assert_eq!(top.to_string(), "root -> top 1");
    assert!(top.root().as_chained().is_some_and(|r| r.ptr_eq(&root)));
    assert_eq!(foreign.root_message(), "io");
}

fn divide(a: i32, b: i32) -> Flow<i32, i32> {
    ensure!(a >= 0, "negative dividend {}", a);
    if b == 0 {
        raise!(a, chain!("division of {} by zero", a));
    }
    Ok(a / b)
}

fn checked_only(flag: bool) -> Flow<(), ()> {
    if !flag {
        raise!(ChainedError::new("flag not set"));
    }
    Ok(())
}

#[test]
fn raise_with_value_returns_early() {
    let mut value = 0;
    let mut error = None;

    let _ = Boundary::with_slots(&mut value, &mut error).run(|| divide(8, 0));

    assert_eq!(value, 8);
    assert_eq!(error.map(|e| e.to_string()).as_deref(), Some("division of 8 by zero"));
}

#[test]
fn raise_error_only_returns_early() {
    assert!(checked_only(true).is_ok());
    assert!(checked_only(false).is_err_and(|s| s.is_error_only()));
}

#[test]
fn ensure_raises_error_only() {
    assert_eq!(divide(9, 3), Ok(3));

    let signal = divide(-1, 3).unwrap_err();
    assert!(signal.is_error_only());
    assert_eq!(signal.error().message(), "negative dividend -1");
}
