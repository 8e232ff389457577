/*!
Write-back targets: objects that declare their own switches and receive the
coerced values.

This is the seam for callers who would rather annotate a settings struct
than register switches by hand. A target enumerates its
[`Declaration`]s once, at registration; during parsing it may be asked for
the [`current`][SwitchTarget::current] value of a boolean switch (the
toggle rule negates it), and it receives one
[`apply`][SwitchTarget::apply] call per matched switch, in registration
order, after coercion succeeds.
*/

use thiserror::Error;

use crate::{Value, ValueKind};

/// One switch as declared by a target.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub name: String,
    pub aliases: Vec<String>,
    pub kind: ValueKind,
    pub required: bool,
    pub description: String,
}

/// Returned by [`SwitchTarget::apply`] when a value cannot be stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// The target's own validation refused the value. Surfaced to the
    /// caller as [`ParseError::ValueRejected`][crate::ParseError::ValueRejected],
    /// reason intact.
    #[error("{0}")]
    Rejected(String),

    /// The write itself could not be performed. Surfaced as the distinct
    /// [`ParseError::WriteBack`][crate::ParseError::WriteBack] kind.
    #[error("{0}")]
    Failed(String),
}

/**
A caller-owned object that declares switches and accepts their values.

Registering a target via
[`CommandLineParser::register_target`][crate::CommandLineParser::register_target]
runs every declaration through the same validation as direct registration;
the parser then borrows the target mutably for its own lifetime and writes
each coerced value through it during parsing.
*/
pub trait SwitchTarget {
    /// The switches this target declares.
    fn declarations(&self) -> Vec<Declaration>;

    /// The current value of a declared switch, if one is readable. An
    /// unmarked boolean occurrence negates this; targets with nothing
    /// useful to say can rely on the default.
    fn current(&self, name: &str) -> Option<Value> {
        let _ = name;
        None
    }

    /// Store a coerced value.
    fn apply(&mut self, name: &str, value: Value) -> Result<(), WriteError>;
}
