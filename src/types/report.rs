//! Rendering of error chains: short form, trace lines and the full report.
//!
//! The default [`ReportConfig`] produces the canonical layout:
//!
//! ```text
//! error:
//! 	some caused error
//!
//! Root cause:
//! 	some root error
//!
//! Full error trace:
//! 	some caused error
//! 	caused by: some root error
//! ```

use crate::types::alloc_type::{String, Vec};
use crate::types::{CauseRef, ChainedError};
use core::fmt::{self, Display, Write};
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for chain rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Joins links in the short form, cause first.
    pub separator: String,
    /// Leading whitespace of every body line in the report.
    pub indent: String,
    /// Marks every trace line below the top one.
    pub cause_prefix: String,
    pub error_heading: String,
    pub root_heading: String,
    pub trace_heading: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            separator: " -> ".into(),
            indent: "\t".into(),
            cause_prefix: "caused by: ".into(),
            error_heading: "error:".into(),
            root_heading: "Root cause:".into(),
            trace_heading: "Full error trace:".into(),
        }
    }
}

impl ReportConfig {
    /// Two-space indentation, otherwise canonical.
    #[inline]
    pub fn compact() -> Self {
        Self { indent: "  ".into(), ..Default::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportStyle {
    Full,
    Short,
    Trace { nested: bool },
}

/// Builder for customizing chain display output.
///
/// Obtained from [`ChainedError::fmt`]; renders through [`Display`].
#[must_use]
pub struct ReportBuilder<'a> {
    error: &'a ChainedError,
    config: ReportConfig,
    style: ReportStyle,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(error: &'a ChainedError) -> Self {
        Self { error, config: ReportConfig::default(), style: ReportStyle::Full }
    }

    pub fn config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.config.indent = indent.into();
        self
    }

    pub fn with_cause_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.cause_prefix = prefix.into();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ReportConfig::compact();
        self
    }

    /// Renders the full report (the default).
    pub fn full(mut self) -> Self {
        self.style = ReportStyle::Full;
        self
    }

    /// Renders the one-line short form.
    pub fn short(mut self) -> Self {
        self.style = ReportStyle::Short;
        self
    }

    /// Renders only the trace lines.
    pub fn trace(mut self, nested: bool) -> Self {
        self.style = ReportStyle::Trace { nested };
        self
    }

    fn write_short<W: Write>(&self, w: &mut W) -> fmt::Result {
        let links: SmallVec<[&str; 8]> = self.error.iter().map(|link| link.message()).collect();
        for (i, message) in links.iter().rev().enumerate() {
            if i > 0 {
                w.write_str(&self.config.separator)?;
            }
            w.write_str(message)?;
        }
        Ok(())
    }

    fn write_trace<W: Write>(&self, w: &mut W, nested: bool) -> fmt::Result {
        for (i, link) in self.error.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            w.write_str(&self.config.indent)?;
            if i > 0 || nested {
                w.write_str(&self.config.cause_prefix)?;
            }
            w.write_str(link.message())?;
        }
        Ok(())
    }

    fn write_full<W: Write>(&self, w: &mut W) -> fmt::Result {
        let indent = &self.config.indent;
        write!(w, "{}\n{}{}\n\n", self.config.error_heading, indent, self.error.message())?;
        write!(w, "{}\n{}{}\n\n", self.config.root_heading, indent, self.error.root_message())?;
        writeln!(w, "{}", self.config.trace_heading)?;
        self.write_trace(w, false)
    }
}

impl Display for ReportBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            ReportStyle::Full => self.write_full(f),
            ReportStyle::Short => self.write_short(f),
            ReportStyle::Trace { nested } => self.write_trace(f, nested),
        }
    }
}

/// Kind of a rendered link.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Chained,
    Foreign,
}

/// Owned snapshot of one link of a chain.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    pub message: String,
    pub kind: FrameKind,
}

impl From<CauseRef<'_>> for Frame {
    fn from(link: CauseRef<'_>) -> Self {
        let kind = if link.is_foreign() { FrameKind::Foreign } else { FrameKind::Chained };
        Self { message: link.message().into(), kind }
    }
}

impl ChainedError {
    /// Returns a builder for customizing the rendering.
    #[inline]
    pub fn fmt(&self) -> ReportBuilder<'_> {
        ReportBuilder::new(self)
    }

    /// `"{cause short form} -> {message}"`, or just the message for a root.
    #[must_use]
    pub fn short_form(&self) -> String {
        self.fmt().short().to_string()
    }

    /// The full report with heading, root cause and trace.
    ///
    /// # Examples
    ///
    /// ```
    /// use cause_rail::ChainedError;
    ///
    /// let err = ChainedError::new("some root error").wrap("some caused error");
    /// assert_eq!(
    ///     err.report(),
    ///     "error:\n\tsome caused error\n\nRoot cause:\n\tsome root error\n\n\
    ///      Full error trace:\n\tsome caused error\n\tcaused by: some root error",
    /// );
    /// ```
    #[must_use]
    pub fn report(&self) -> String {
        self.fmt().to_string()
    }

    /// Formats the report using a closure to configure the builder.
    #[must_use]
    pub fn report_with<F>(&self, f: F) -> String
    where
        F: FnOnce(ReportBuilder<'_>) -> ReportBuilder<'_>,
    {
        f(self.fmt()).to_string()
    }

    /// The trace section of the report.
    #[must_use]
    pub fn trace(&self) -> String {
        self.trace_lines(false)
    }

    /// Trace lines with this node rendered as a nested cause when `nested`.
    #[must_use]
    pub fn trace_lines(&self, nested: bool) -> String {
        self.fmt().trace(nested).to_string()
    }

    /// Owned snapshot of every link, outermost first.
    #[must_use]
    pub fn frames(&self) -> Vec<Frame> {
        self.iter().map(Frame::from).collect()
    }
}
