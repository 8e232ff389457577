/*!
The switch registry: an insertion-ordered collection with ambiguity
checking.

Every name and alias must be unique, ASCII case-insensitively, across the
whole registry: a switch's alias may not shadow another switch's name and
vice versa. Validation runs to completion before anything is inserted, so
a failed registration leaves the registry untouched.
*/

use crate::{RegisterError, SwitchDefinition};

#[derive(Debug, Clone, Default)]
pub struct SwitchRegistry {
    switches: Vec<SwitchDefinition>,
}

impl SwitchRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one switch, or report the ambiguity that prevents it.
    pub fn register(&mut self, switch: SwitchDefinition) -> Result<(), RegisterError> {
        check_against(&switch, self.switches.iter())?;

        tracing::trace!(switch = switch.name(), "registered switch");
        self.switches.push(switch);
        Ok(())
    }

    /// Register a batch atomically: every definition is validated against
    /// the existing registry *and* against the rest of the batch before
    /// any of them is inserted.
    pub fn register_all(&mut self, batch: Vec<SwitchDefinition>) -> Result<(), RegisterError> {
        for (position, switch) in batch.iter().enumerate() {
            check_against(switch, self.switches.iter().chain(&batch[..position]))?;
        }

        for switch in batch {
            tracing::trace!(switch = switch.name(), "registered switch");
            self.switches.push(switch);
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.switches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }

    /// The registered switches, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SwitchDefinition> {
        self.switches.iter()
    }

    /// Look a switch up by its canonical name, ASCII case-insensitively.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&SwitchDefinition> {
        self.switches
            .iter()
            .find(|switch| switch.name().eq_ignore_ascii_case(name))
    }
}

/// Check an incoming switch's name and aliases against every token of
/// every existing switch.
fn check_against<'r>(
    incoming: &SwitchDefinition,
    existing: impl Iterator<Item = &'r SwitchDefinition>,
) -> Result<(), RegisterError> {
    for other in existing {
        for token in incoming.names() {
            if other.answers_to(token) {
                return Err(RegisterError::Ambiguous {
                    token: token.to_owned(),
                    first: other.name().to_owned(),
                    second: incoming.name().to_owned(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boolean(name: &str) -> SwitchDefinition {
        SwitchDefinition::new(name, false, "")
    }

    #[test]
    fn duplicate_names_collide_in_any_case() {
        let mut registry = SwitchRegistry::new();
        registry.register(boolean("verbose")).unwrap();

        let error = registry.register(boolean("VERBOSE")).unwrap_err();
        assert_eq!(
            error,
            RegisterError::Ambiguous {
                token: "VERBOSE".to_owned(),
                first: "verbose".to_owned(),
                second: "VERBOSE".to_owned(),
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn aliases_collide_with_names_and_aliases() {
        let mut registry = SwitchRegistry::new();
        let mut verbose = boolean("verbose");
        verbose.add_alias("v");
        registry.register(verbose).unwrap();

        // alias vs existing alias
        let mut chatty = boolean("chatty");
        chatty.add_alias("V");
        assert!(registry.register(chatty).is_err());

        // name vs existing alias
        assert!(registry.register(boolean("v")).is_err());

        // alias vs existing name
        let mut loud = boolean("loud");
        loud.add_alias("Verbose");
        assert!(registry.register(loud).is_err());

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn batches_are_all_or_nothing() {
        let mut registry = SwitchRegistry::new();
        registry.register(boolean("verbose")).unwrap();

        let error = registry
            .register_all(vec![boolean("fresh"), boolean("verbose")])
            .unwrap_err();
        assert!(matches!(error, RegisterError::Ambiguous { .. }));
        assert_eq!(registry.len(), 1);

        // a batch must also agree with itself
        assert!(
            registry
                .register_all(vec![boolean("left"), boolean("LEFT")])
                .is_err()
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn order_is_preserved() {
        let mut registry = SwitchRegistry::new();
        for name in ["one", "two", "three"] {
            registry.register(boolean(name)).unwrap();
        }

        let names: Vec<&str> = registry.iter().map(SwitchDefinition::name).collect();
        assert_eq!(names, ["one", "two", "three"]);
    }
}
