/*!
Parse orchestration: application name, switch stripping, positional
splitting, and the structured result.
*/

use turnout_scan as scan;

use crate::{
    matcher, usage, ParseError, RegisterError, SwitchDefinition, SwitchRegistry, SwitchTarget,
    Value,
};

/**
The front door of the crate: one registry of switches, applied to raw
command lines.

A parser is built once (switches registered directly, write-back targets
handed over) and then used for parsing; the registry is read-only from
the first [`parse`][CommandLineParser::parse] on. Targets are borrowed
mutably for the parser's lifetime (`'t`), so the parser must be dropped
before a registered target can be inspected again.

Parsing is synchronous and single-threaded; for concurrent parses, build
one parser per thread.
*/
#[derive(Default)]
pub struct CommandLineParser<'t> {
    registry: SwitchRegistry,
    bindings: Vec<Option<usize>>,
    targets: Vec<&'t mut dyn SwitchTarget>,
}

impl<'t> CommandLineParser<'t> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a boolean switch.
    pub fn add_switch(
        &mut self,
        name: &str,
        required: bool,
        description: &str,
    ) -> Result<(), RegisterError> {
        self.register(SwitchDefinition::new(name, required, description))
    }

    /// Register a boolean switch under several names. The first name is
    /// canonical; the rest are aliases.
    pub fn add_switch_with_aliases(
        &mut self,
        name: &str,
        aliases: &[&str],
        required: bool,
        description: &str,
    ) -> Result<(), RegisterError> {
        let mut switch = SwitchDefinition::new(name, required, description);
        for alias in aliases {
            switch.add_alias(*alias);
        }
        self.register(switch)
    }

    /// Register a fully built definition of any kind.
    pub fn register(&mut self, switch: SwitchDefinition) -> Result<(), RegisterError> {
        self.registry.register(switch)?;
        self.bindings.push(None);
        Ok(())
    }

    /**
    Register everything a target declares, and bind the target for
    write-back.

    The whole declaration set is validated, against the registry and
    against itself, before any of it is inserted, under the same rules
    as direct registration.
    */
    pub fn register_target(
        &mut self,
        target: &'t mut dyn SwitchTarget,
    ) -> Result<(), RegisterError> {
        let declarations = target.declarations();

        let mut batch = Vec::with_capacity(declarations.len());
        for declaration in declarations {
            let mut switch = SwitchDefinition::with_kind(
                declaration.name,
                declaration.required,
                declaration.description,
                declaration.kind,
            )?;
            for alias in declaration.aliases {
                switch.add_alias(alias);
            }
            batch.push(switch);
        }

        let added = batch.len();
        self.registry.register_all(batch)?;

        let slot = self.targets.len();
        self.targets.push(target);
        self.bindings
            .extend(std::iter::repeat(Some(slot)).take(added));
        Ok(())
    }

    /// The registered switches, in registration order.
    pub fn switches(&self) -> impl Iterator<Item = &SwitchDefinition> {
        self.registry.iter()
    }

    /// A usage listing of every registered switch, in registration order.
    #[must_use]
    pub fn usage_text(&self) -> String {
        usage::render(&self.registry)
    }

    /**
    Run the whole pipeline over one command line.

    The first token, quoted or bare, is the application name; switches
    are then matched and stripped out of the remainder, in registration
    order; whatever survives is split into positional parameters. The
    first missing required switch aborts the parse before positional
    splitting, with no partial result.
    */
    pub fn parse(&mut self, command_line: &str) -> Result<ParseResult, ParseError> {
        let (application_name, remainder) = leading_application_name(command_line);
        let mut working = remainder.to_owned();

        let values = matcher::strip_switches(
            &self.registry,
            &self.bindings,
            &mut self.targets,
            &mut working,
        )?;

        let positional = split_parameters(&working);

        tracing::debug!(
            application = application_name,
            switches = values.len(),
            positional = positional.len(),
            "parsed command line"
        );

        Ok(ParseResult {
            application_name: application_name.to_owned(),
            values,
            positional,
            working,
        })
    }
}

/// The first quoted or whitespace-delimited token (quotes stripped) and
/// the remainder that becomes the initial working text.
fn leading_application_name(command_line: &str) -> (&str, &str) {
    match scan::tokens(command_line).next() {
        Some(token) => (token.content, &command_line[token.span.end..]),
        None => ("", ""),
    }
}

/// Quote-aware split of the post-stripping working text.
fn split_parameters(working: &str) -> Vec<String> {
    scan::tokens(working)
        .map(|token| token.content.to_owned())
        .collect()
}

/**
The structured decomposition of one command line.

Two parses of the same input against the same registry compare equal, as
long as no write-back target feeds a toggled boolean back in between.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    application_name: String,
    values: Vec<(String, Value)>,
    positional: Vec<String>,
    working: String,
}

impl ParseResult {
    #[must_use]
    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// The resolved value of a switch, by canonical name, ASCII
    /// case-insensitively. Absent means the switch had no occurrence.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(canonical, _)| canonical.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Every resolved value, in registration order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// The tokens that survived switch stripping, in order, quotes
    /// stripped.
    #[must_use]
    pub fn positional_parameters(&self) -> &[String] {
        &self.positional
    }

    /**
    Every surviving unquoted token that is shaped like a switch:
    introduced by `-`, `--`, or `/` with something after the introducer.

    Computed on demand from the retained working text; the tokens are
    never removed from it, so they show up among the positional
    parameters as well.
    */
    #[must_use]
    pub fn unhandled_tokens(&self) -> Vec<&str> {
        scan::tokens(&self.working)
            .filter(|token| {
                !token.quoted
                    && scan::introducer(token.content, 0)
                        .is_some_and(|name_start| name_start < token.content.len())
            })
            .map(|token| token.content)
            .collect()
    }
}
