use super::{Cause, ChainedError};
use crate::types::ForeignError;
use core::fmt::{self, Debug, Display};

impl Display for ChainedError {
    /// `{}` renders the short form, `{:#}` the full report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.fmt().short(), f);
        }
        Display::fmt(&self.fmt(), f)
    }
}

impl Debug for ChainedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedError")
            .field("message", &self.message())
            .field("root", &self.root_message())
            .field("links", &Links(self))
            .finish()
    }
}

// Lists every link's message without recursing into nested causes.
struct Links<'a>(&'a ChainedError);

impl Debug for Links<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().map(|link| link.message())).finish()
    }
}

impl core::error::Error for ChainedError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self.cause()? {
            Cause::Chained(chained) => Some(chained),
            Cause::Foreign(foreign) => Some(foreign),
        }
    }
}

impl From<ForeignError> for ChainedError {
    /// Lifts a foreign leaf into a root node carrying its display text.
    #[inline]
    fn from(foreign: ForeignError) -> Self {
        Cause::Foreign(foreign).into_chain()
    }
}

impl From<ChainedError> for Cause {
    #[inline]
    fn from(chained: ChainedError) -> Self {
        Cause::Chained(chained)
    }
}

impl From<ForeignError> for Cause {
    #[inline]
    fn from(foreign: ForeignError) -> Self {
        Cause::Foreign(foreign)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ChainedError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ChainedError", 3)?;
        state.serialize_field("message", self.message())?;
        state.serialize_field("root_cause", self.root_message())?;
        state.serialize_field("trace", &self.frames())?;
        state.end()
    }
}
