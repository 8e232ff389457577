/*!
The matching and coercion pass: walks the registry in order, finds every
occurrence of each switch in the working text, resolves one typed value per
switch, writes it through the bound target if there is one, and splices the
matched spans out of the text.
*/

use crate::pattern::{Capture, Occurrence};
use crate::{ParseError, SwitchRegistry, SwitchTarget, Value, ValueKind, WriteError};

/**
Strip every registered switch out of `working`, returning the resolved
values keyed by canonical name, in registry order.

When several occurrences of one switch are present, the last one wins, for
every kind. The first required switch with no occurrence aborts the whole
pass. Each matched span is replaced by a single space so the surviving
text keeps its token boundaries.
*/
pub(crate) fn strip_switches(
    registry: &SwitchRegistry,
    bindings: &[Option<usize>],
    targets: &mut [&mut dyn SwitchTarget],
    working: &mut String,
) -> Result<Vec<(String, Value)>, ParseError> {
    let mut values = Vec::new();

    for (switch, binding) in registry.iter().zip(bindings) {
        let occurrences = switch.pattern().find_all(working);

        let Some(last) = occurrences.last() else {
            if switch.required() {
                return Err(ParseError::MissingRequiredSwitch {
                    name: switch.name().to_owned(),
                    description: switch.description().to_owned(),
                });
            }
            continue;
        };

        tracing::trace!(
            switch = switch.name(),
            occurrences = occurrences.len(),
            "matched switch"
        );

        let value = match (switch.kind(), &last.capture) {
            (ValueKind::Boolean, Capture::Marker(_)) => {
                // the bound value is read once; resolution is pure in
                // (markers, prior value)
                let current = binding
                    .and_then(|slot| targets[slot].current(switch.name()))
                    .and_then(|value| value.as_bool());
                Value::Bool(resolve_toggle(&occurrences, current))
            }

            (ValueKind::Text, Capture::Text { span, quoted }) => {
                let raw = span.slice(working);
                let text = if *quoted { raw } else { strip_quotes(raw) };
                Value::Text(text.to_owned())
            }

            (ValueKind::Integer, Capture::Number(span)) => {
                let raw = span.slice(working);
                match raw.parse::<i64>() {
                    Ok(number) => Value::Integer(number),
                    Err(_) => {
                        return Err(ParseError::MalformedValue {
                            name: switch.name().to_owned(),
                            value: raw.to_owned(),
                        });
                    }
                }
            }

            (ValueKind::Enumeration(labels), Capture::Label(index)) => {
                match labels.get(*index) {
                    Some(label) => Value::Label(label.clone()),
                    None => {
                        return Err(ParseError::MalformedValue {
                            name: switch.name().to_owned(),
                            value: last.span.slice(working).to_owned(),
                        });
                    }
                }
            }

            // a capture that disagrees with its kind means the pattern and
            // the coercer have diverged
            _ => {
                return Err(ParseError::MalformedValue {
                    name: switch.name().to_owned(),
                    value: last.span.slice(working).to_owned(),
                });
            }
        };

        if let Some(slot) = *binding {
            if let Err(error) = targets[slot].apply(switch.name(), value.clone()) {
                return Err(match error {
                    WriteError::Rejected(reason) => ParseError::ValueRejected {
                        name: switch.name().to_owned(),
                        reason,
                    },
                    WriteError::Failed(detail) => ParseError::WriteBack {
                        name: switch.name().to_owned(),
                        detail,
                    },
                });
            }
        }

        *working = splice_out(working, &occurrences);
        values.push((switch.name().to_owned(), value));
    }

    Ok(values)
}

/// Resolve a boolean from its occurrences, left to right, each overwriting
/// the one before. An unmarked occurrence negates the externally readable
/// value when there is one and defaults to true otherwise.
fn resolve_toggle(occurrences: &[Occurrence], current: Option<bool>) -> bool {
    let mut state = true;

    for occurrence in occurrences {
        if let Capture::Marker(marker) = occurrence.capture {
            state = match marker {
                Some(explicit) => explicit,
                None => current.map_or(true, |value| !value),
            };
        }
    }

    state
}

/// Remove each occurrence's span, substituting a single space to keep the
/// surrounding tokens apart.
fn splice_out(text: &str, occurrences: &[Occurrence]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    for span in occurrences.iter().map(|occurrence| occurrence.span) {
        out.push_str(&text[pos..span.start]);
        out.push(' ');
        pos = span.end;
    }

    out.push_str(&text[pos..]);
    out
}

/// One layer of surrounding double quotes, when the token both starts and
/// ends with one.
fn strip_quotes(token: &str) -> &str {
    token
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(token)
}
