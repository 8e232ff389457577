use std::env;
use std::process;

use turnout::{
    CommandLineParser, Declaration, SwitchTarget, Value, ValueKind, WriteError,
};

/// Settings for a fictional publishing tool, declaring its own switches.
/// The destination setter validates, so `-dest:""` style mistakes come
/// back as rejections rather than landing in the struct.
#[derive(Debug, Default)]
struct Settings {
    verbose: bool,
    destination: Option<String>,
    retries: i64,
    level: Option<String>,
}

impl SwitchTarget for Settings {
    fn declarations(&self) -> Vec<Declaration> {
        vec![
            Declaration {
                name: "verbose".to_owned(),
                aliases: vec!["v".to_owned()],
                kind: ValueKind::Boolean,
                required: false,
                description: "Print each step".to_owned(),
            },
            Declaration {
                name: "dest".to_owned(),
                aliases: vec!["d".to_owned()],
                kind: ValueKind::Text,
                required: true,
                description: "Destination directory".to_owned(),
            },
            Declaration {
                name: "retries".to_owned(),
                aliases: Vec::new(),
                kind: ValueKind::Integer,
                required: false,
                description: "Upload retry budget".to_owned(),
            },
            Declaration {
                name: "level".to_owned(),
                aliases: Vec::new(),
                kind: ValueKind::Enumeration(vec![
                    "Quiet".to_owned(),
                    "Normal".to_owned(),
                    "Loud".to_owned(),
                ]),
                required: false,
                description: "How much to report".to_owned(),
            },
        ]
    }

    fn current(&self, name: &str) -> Option<Value> {
        name.eq_ignore_ascii_case("verbose")
            .then(|| Value::Bool(self.verbose))
    }

    fn apply(&mut self, name: &str, value: Value) -> Result<(), WriteError> {
        match (name, value) {
            ("verbose", Value::Bool(state)) => self.verbose = state,
            ("dest", Value::Text(destination)) => {
                if destination.is_empty() {
                    return Err(WriteError::Rejected(
                        "the destination must not be empty".to_owned(),
                    ));
                }
                self.destination = Some(destination);
            }
            ("retries", Value::Integer(count)) => self.retries = count,
            ("level", Value::Label(label)) => self.level = Some(label),
            (other, value) => {
                return Err(WriteError::Failed(format!(
                    "no slot for switch '{other}' (got {value:?})"
                )));
            }
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // turnout works on a whole command line rather than argv
    let command_line = env::args().collect::<Vec<_>>().join(" ");

    let mut settings = Settings::default();
    let mut parser = CommandLineParser::new();
    parser.register_target(&mut settings)?;
    parser.add_switch("dry-run", false, "Stage everything, publish nothing")?;

    let result = match parser.parse(&command_line) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("{error}\n\n{}", parser.usage_text());
            process::exit(2);
        }
    };

    let dry_run = result
        .value("dry-run")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    // the parser borrows `settings` until here
    drop(parser);

    println!("application: {}", result.application_name());
    println!("dry run:     {dry_run}");
    println!("settings:    {settings:#?}");
    println!("positional:  {:?}", result.positional_parameters());

    let unhandled = result.unhandled_tokens();
    if !unhandled.is_empty() {
        println!("unhandled:   {unhandled:?}");
    }

    Ok(())
}
