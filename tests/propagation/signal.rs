use cause_rail::{ensure_no_error, raise, raise_err, Boundary, ChainedError, Flow, Outcome, Signal};

#[test]
fn signal_accessors() {
    let with_value: Signal<u8> =
        Signal::WithValue { value: 4, error: ChainedError::new("late") };
    let error_only: Signal<u8> = Signal::ErrorOnly(ChainedError::new("early"));

    assert_eq!(with_value.value(), Some(&4));
    assert_eq!(with_value.error().message(), "late");
    assert!(!with_value.is_error_only());
    assert!(error_only.value().is_none());
    assert!(error_only.is_error_only());

    let (value, error) = with_value.into_parts();
    assert_eq!(value, Some(4));
    assert_eq!(error.message(), "late");
}

#[test]
fn map_value_and_without_value() {
    let signal: Signal<u8> = Signal::WithValue { value: 4, error: ChainedError::new("x") };

    let mapped = signal.clone().map_value(|v| v.to_string());
    assert_eq!(mapped.value().map(String::as_str), Some("4"));

    let stripped: Signal<String> = signal.without_value();
    assert!(stripped.is_error_only());
    assert_eq!(stripped.error().message(), "x");
}

#[test]
fn raise_builds_the_expected_variants() {
    let with_value: Flow<(), i32> = raise(1, ChainedError::new("a"));
    let error_only: Flow<(), i32> = raise_err(ChainedError::new("b"));

    assert_eq!(with_value, Err(Signal::WithValue { value: 1, error: ChainedError::new("a") }));
    assert_eq!(error_only, Err(Signal::ErrorOnly(ChainedError::new("b"))));
}

#[test]
fn ensure_no_error_passes_value_through() {
    let flow = ensure_no_error(5, None::<ChainedError>);
    assert_eq!(flow, Ok(5));
}

#[test]
fn ensure_no_error_raises_with_empty_decoration() {
    let root = ChainedError::new("root");
    let flow = ensure_no_error(5, Some(root.clone()));

    let (value, error) = match flow {
        Err(signal) => signal.into_parts(),
        Ok(v) => panic!("expected a signal, got {v}"),
    };
    assert_eq!(value, Some(5));
    assert_eq!(error.message(), "");
    assert!(error.root().as_chained().is_some_and(|r| r.ptr_eq(&root)));
}

#[test]
fn ensure_no_error_short_circuits_the_caller() {
    fn step(err: Option<&'static str>, ran_after: &mut bool) -> Flow<&'static str, &'static str> {
        let v = ensure_no_error("value", err)?;
        *ran_after = true;
        Ok(v)
    }

    let mut ran_after = false;
    let mut value = "";
    let mut error = None;
    let _ = Boundary::with_slots(&mut value, &mut error).run(|| step(Some("bad"), &mut ran_after));

    assert!(!ran_after);
    assert_eq!(value, "value");
    assert_eq!(error.map(|e| e.root_message().to_owned()).as_deref(), Some("bad"));
}

#[test]
fn question_mark_crosses_between_outcome_and_flow() {
    fn outcome_fails() -> Outcome<u8> {
        Err(ChainedError::new("outcome"))
    }

    fn flow_uses_outcome() -> Flow<u8> {
        let v = outcome_fails()?;
        Ok(v)
    }

    fn outcome_uses_flow() -> Outcome<u8> {
        let v = flow_uses_outcome()?;
        Ok(v)
    }

    assert_eq!(outcome_uses_flow().map_err(|e| e.to_string()), Err("outcome".to_owned()));
}
