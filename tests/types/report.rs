use cause_rail::{ChainedError, ForeignError, FrameKind, ReportConfig};

#[test]
fn full_report_matches_canonical_layout() {
    let e1 = ChainedError::new("some root error");
    let e2 = ChainedError::caused_by("some caused error", e1);

    assert_eq!(
        e2.report(),
        "error:\n\tsome caused error\n\nRoot cause:\n\tsome root error\n\nFull error trace:\n\tsome caused error\n\tcaused by: some root error",
    );
    assert_eq!(format!("{e2:#}"), e2.report());
}

#[test]
fn report_of_root_node() {
    let err = ChainedError::new("alone");

    assert_eq!(
        err.report(),
        "error:\n\talone\n\nRoot cause:\n\talone\n\nFull error trace:\n\talone",
    );
}

#[test]
fn trace_lines_top_level_and_nested() {
    let err = ChainedError::new("c").wrap("b").wrap("a");

    assert_eq!(err.trace(), "\ta\n\tcaused by: b\n\tcaused by: c");
    assert_eq!(err.trace_lines(false), err.trace());
    assert_eq!(err.trace_lines(true), "\tcaused by: a\n\tcaused by: b\n\tcaused by: c");
}

#[test]
fn foreign_leaf_gets_a_single_caused_by_line() {
    let err = ChainedError::caused_by("top", ForeignError::new("boom"));
    let trace = err.trace();

    assert_eq!(trace, "\ttop\n\tcaused by: boom");
    assert_eq!(trace.matches("caused by: boom").count(), 1);
    assert!(!trace.contains("caused by: caused by:"));
    assert_eq!(
        err.report(),
        "error:\n\ttop\n\nRoot cause:\n\tboom\n\nFull error trace:\n\ttop\n\tcaused by: boom",
    );
}

#[test]
fn report_with_custom_config() {
    let err = ChainedError::new("root").wrap("top");

    let compact = err.report_with(|b| b.compact());
    assert!(compact.contains("\n  top\n  caused by: root"));

    let arrows = err.report_with(|b| b.short().with_separator(" <- "));
    assert_eq!(arrows, "root <- top");

    let plain = err.report_with(|b| b.trace(false).with_indent("").with_cause_prefix("> "));
    assert_eq!(plain, "top\n> root");

    let custom = ReportConfig { error_heading: "failure:".into(), ..ReportConfig::default() };
    assert!(err.report_with(|b| b.config(custom)).starts_with("failure:\n\ttop"));
}

#[test]
fn frames_snapshot_every_link() {
    let err = ChainedError::caused_by("mid", ForeignError::new("io")).wrap("top");
    let frames = err.frames();

    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].message, "top");
    assert_eq!(frames[0].kind, FrameKind::Chained);
    assert_eq!(frames[2].message, "io");
    assert_eq!(frames[2].kind, FrameKind::Foreign);
}

#[test]
fn rendering_is_repeatable() {
    let err = ChainedError::new("root").wrap("top");

    assert_eq!(err.report(), err.report());
    assert_eq!(err.to_string(), err.to_string());
}
