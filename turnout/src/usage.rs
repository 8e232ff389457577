/*!
Usage rendering: one aligned line per registered switch.
*/

use joinery::JoinableIterator;
use lazy_format::lazy_format;

use crate::SwitchRegistry;

// Every description starts five columns past the widest name rendering.
const GUTTER: usize = 5;

/**
Render the registry as a usage listing:

```text
Arguments:
-verbose, -v:    Print each step
-out:            Output file (REQUIRED)
```

One line per switch, registration order, name and aliases joined with
`, `, descriptions column-aligned, required switches marked.
*/
pub(crate) fn render(registry: &SwitchRegistry) -> String {
    let labels: Vec<String> = registry
        .iter()
        .map(|switch| {
            switch
                .names()
                .map(|name| lazy_format!("-{name}"))
                .join_with(", ")
                .to_string()
        })
        .collect();

    let width = labels.iter().map(String::len).max().unwrap_or(0) + GUTTER;

    let mut out = String::from("Arguments:\n");
    for (switch, label) in registry.iter().zip(&labels) {
        let mut line = format!("{label}:");
        while line.len() < width {
            line.push(' ');
        }

        line.push_str(switch.description());
        if switch.required() {
            line.push_str(" (REQUIRED)");
        }

        out.push_str(&line);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SwitchDefinition, ValueKind};

    #[test]
    fn listing_is_aligned_and_ordered() {
        let mut registry = SwitchRegistry::new();

        let mut verbose = SwitchDefinition::new("verbose", false, "Print each step");
        verbose.add_alias("v");
        registry.register(verbose).unwrap();

        registry
            .register(
                SwitchDefinition::with_kind("out", true, "Output file", ValueKind::Text).unwrap(),
            )
            .unwrap();

        assert_eq!(
            render(&registry),
            "Arguments:\n\
             -verbose, -v:    Print each step\n\
             -out:            Output file (REQUIRED)\n"
        );
    }

    #[test]
    fn empty_registry_renders_only_the_header() {
        assert_eq!(render(&SwitchRegistry::new()), "Arguments:\n");
    }
}
