use crate::compat::{String, Vec};

/// Errors that can occur while parsing an announce query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `%` not followed by two hexadecimal digits
    InvalidEscape {
        /// Byte offset of the `%` within the full input
        position: usize,
        /// The raw (still encoded) key or value token containing the escape
        token: String,
    },
    /// A name appeared more than once under [`DuplicateKeys::Reject`]
    ///
    /// [`DuplicateKeys::Reject`]: crate::DuplicateKeys::Reject
    DuplicateKey {
        /// The decoded name
        key: Vec<u8>,
    },
    /// The input exceeded the configured maximum length
    InputTooLong {
        /// Length of the rejected input in bytes
        len: usize,
        /// The configured `max_input_len`
        max: usize,
    },
}

/// Fieldless discriminant of a [`ParseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed percent escape
    InvalidEscape,
    /// Repeated name under the rejecting duplicate policy
    DuplicateKey,
    /// Input longer than the configured limit
    InputTooLong,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEscape { .. } => ErrorKind::InvalidEscape,
            Self::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            Self::InputTooLong { .. } => ErrorKind::InputTooLong,
        }
    }

    /// Byte offset into the input where parsing failed, when one applies.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidEscape { position, .. } => Some(*position),
            Self::DuplicateKey { .. } | Self::InputTooLong { .. } => None,
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidEscape => "Invalid percent escape",
            Self::DuplicateKey => "Duplicate key",
            Self::InputTooLong => "Input too long",
        };
        f.write_str(msg)
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidEscape { position, token } => {
                write!(f, "{} at byte {position} in {token:?}", self.kind())
            }
            Self::DuplicateKey { key } => {
                write!(f, "{} {:?}", self.kind(), String::from_utf8_lossy(key))
            }
            Self::InputTooLong { len, max } => {
                write!(f, "{}: {len} bytes exceeds limit of {max}", self.kind())
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for announce query parsing
pub type Result<T> = core::result::Result<T, ParseError>;
