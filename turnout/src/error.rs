/*!
The error types of the crate: registration failures and parse failures.
Write-back outcomes live with the [`target`][crate::target] module, since
targets produce them.
*/

use thiserror::Error;

/// Registration failed; the registry is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// A name or alias is already spoken for, case-insensitively. Both
    /// switches involved are named.
    #[error("switch token '{token}' is used ambiguously (by '{first}' and by '{second}')")]
    Ambiguous {
        /// The colliding name or alias, as the incoming switch spelled it.
        token: String,
        first: String,
        second: String,
    },

    /// No match pattern can be synthesized for the declared kind. With the
    /// kinds being a closed set, the one way to get here is an enumeration
    /// with no labels.
    #[error("switch '{name}' has an unsupported value kind")]
    UnsupportedKind { name: String },
}

/// A parse aborted. The pipeline stops at the failing step and returns no
/// partial result; retrying is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required switch had no occurrence in the command line. The first
    /// one encountered, in registration order, aborts the parse.
    #[error("required switch '-{name}' was not supplied ({description})")]
    MissingRequiredSwitch { name: String, description: String },

    /// Text matched a switch's pattern but could not be coerced. The one
    /// reachable case is a digit run that overflows an `i64`; anything
    /// else indicates the pattern and the coercer disagree.
    #[error("switch '-{name}': matched value '{value}' cannot be coerced")]
    MalformedValue { name: String, value: String },

    /// The write-back target's own validation refused the value.
    #[error("switch '-{name}': {reason}")]
    ValueRejected { name: String, reason: String },

    /// The write-back mechanism itself failed. Distinct from
    /// [`ValueRejected`][ParseError::ValueRejected]: this one is not the
    /// target passing judgment on the value.
    #[error("switch '-{name}': write-back failed: {detail}")]
    WriteBack { name: String, detail: String },
}
