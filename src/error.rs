use core::fmt;

/// The ways building a [`DateRange`](crate::DateRange) can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RangeErrorKind {
    /// The start comes after the end.
    InvalidRange,
    /// A negative number of days was requested.
    NegativeCount,
    /// The calendar could not compute an endpoint.
    Indeterminate,
}

/// The error returned when a [`DateRange`](crate::DateRange) cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeError {
    kind: RangeErrorKind,
}

impl RangeError {
    #[inline]
    pub(crate) const fn new(kind: RangeErrorKind) -> Self {
        Self { kind }
    }

    /// What went wrong.
    #[inline]
    pub const fn kind(&self) -> RangeErrorKind {
        self.kind
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RangeErrorKind::InvalidRange => write!(f, "range starts after it ends"),
            RangeErrorKind::NegativeCount => write!(f, "negative number of days"),
            RangeErrorKind::Indeterminate => write!(f, "range endpoint could not be computed"),
        }
    }
}

impl From<RangeErrorKind> for RangeError {
    #[inline]
    fn from(kind: RangeErrorKind) -> Self {
        Self::new(kind)
    }
}

impl std::error::Error for RangeError {}
