/*!
Switch definitions: the immutable identity of a switch plus the matcher
derived from it.
*/

use crate::pattern::Pattern;
use crate::{RegisterError, ValueKind};

/**
A single registered switch.

The identity (name, aliases, required flag, description, value kind) is
fixed apart from alias additions, and the match pattern is rebuilt on every
alias addition, so a stale pattern is never observable. Name and alias
comparisons are ASCII case-insensitive throughout.
*/
#[derive(Debug, Clone)]
pub struct SwitchDefinition {
    name: String,
    aliases: Vec<String>,
    required: bool,
    description: String,
    kind: ValueKind,
    pattern: Pattern,
}

impl SwitchDefinition {
    /// A boolean switch, the common case.
    pub fn new(
        name: impl Into<String>,
        required: bool,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let pattern = Pattern::build(&name, &[], &ValueKind::Boolean);

        Self {
            name,
            aliases: Vec::new(),
            required,
            description: description.into(),
            kind: ValueKind::Boolean,
            pattern,
        }
    }

    /// A switch of any kind. Fails immediately when no pattern can be
    /// synthesized for `kind`, which is to say an enumeration with no
    /// labels.
    pub fn with_kind(
        name: impl Into<String>,
        required: bool,
        description: impl Into<String>,
        kind: ValueKind,
    ) -> Result<Self, RegisterError> {
        let name = name.into();

        if let ValueKind::Enumeration(labels) = &kind {
            if labels.is_empty() {
                return Err(RegisterError::UnsupportedKind { name });
            }
        }

        let pattern = Pattern::build(&name, &[], &kind);

        Ok(Self {
            name,
            aliases: Vec::new(),
            required,
            description: description.into(),
            kind,
            pattern,
        })
    }

    /// Add an alternate name. The match pattern is rebuilt before this
    /// returns.
    pub fn add_alias(&mut self, alias: impl Into<String>) {
        self.aliases.push(alias.into());
        self.pattern = Pattern::build(&self.name, &self.aliases, &self.kind);
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    #[inline]
    #[must_use]
    pub fn required(&self) -> bool {
        self.required
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    /// The name followed by the aliases, in authored order.
    pub fn names(&self) -> impl Iterator<Item = &str> + Clone {
        core::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Whether `token` is this switch's name or one of its aliases.
    #[must_use]
    pub fn answers_to(&self, token: &str) -> bool {
        self.names().any(|name| name.eq_ignore_ascii_case(token))
    }

    pub(crate) fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_enumerations_are_rejected() {
        let error = SwitchDefinition::with_kind(
            "mode",
            false,
            "pick one",
            ValueKind::Enumeration(Vec::new()),
        )
        .unwrap_err();

        assert_eq!(
            error,
            RegisterError::UnsupportedKind {
                name: "mode".to_owned()
            }
        );
    }

    #[test]
    fn aliases_extend_the_pattern() {
        let mut verbose = SwitchDefinition::new("verbose", false, "say more");
        assert!(verbose.pattern().find_all(" -v").is_empty());

        verbose.add_alias("v");
        assert_eq!(verbose.pattern().find_all(" -v").len(), 1);
    }

    #[test]
    fn answers_to_is_case_insensitive() {
        let mut verbose = SwitchDefinition::new("verbose", false, "say more");
        verbose.add_alias("v");

        assert!(verbose.answers_to("VERBOSE"));
        assert!(verbose.answers_to("V"));
        assert!(!verbose.answers_to("quiet"));
    }
}
