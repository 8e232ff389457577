/*!
A declarative parser for raw command-line strings; turnout routes a whole
command line onto the switches you registered for it.

Unlike an argv-based parser, turnout takes the command line as a single
piece of text. Callers register named switches (boolean toggles, quoted or
bare strings, signed integers, enumerated labels) either one at a time
through [`CommandLineParser`], or wholesale by handing over a
[`SwitchTarget`] that declares its own and receives the coerced values
back. [`CommandLineParser::parse`] then decomposes the text into an
application name, typed switch values, positional parameters, and any
switch-shaped tokens nobody claimed.

Switches are introduced by `-`, `--`, or `/`, take their value after a `:`
or whitespace, and may carry aliases; names and aliases are matched ASCII
case-insensitively and must be unique across the whole registry.

Until there are more complete docs, the `turnout-demo` crate is the best
tour of the surface.
*/

pub mod error;
mod matcher;
pub mod parser;
mod pattern;
pub mod registry;
pub mod switch;
pub mod target;
mod usage;

pub use error::{ParseError, RegisterError};
pub use parser::{CommandLineParser, ParseResult};
pub use registry::SwitchRegistry;
pub use switch::SwitchDefinition;
pub use target::{Declaration, SwitchTarget, WriteError};

/// The value domain of a switch, fixed at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    /// Bare presence toggles; a trailing `+` or `-` sets the state
    /// explicitly.
    Boolean,

    /// A double-quoted run (quotes stripped) or a bare token.
    Text,

    /// An optionally signed run of digits.
    Integer,

    /// Exactly one of a fixed set of labels, matched as authored.
    Enumeration(Vec<String>),
}

/// A coerced switch value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Text(String),
    Integer(i64),

    /// The canonical registered label of an enumeration switch.
    Label(String),
}

impl Value {
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Value::Integer(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Value::Label(value) => Some(value),
            _ => None,
        }
    }
}
