//! Walkthrough of the list operations used by the `int-list-demo` binary.

use std::io::Write;

use tracing::info;

use crate::error::{Error, Result};
use crate::list::List;

const DEFAULT_PROBE: i32 = 3;
const DEFAULT_INDEX: i32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub probe: i32,
    pub index: i32,
    /// Replaces the built-in insertion sequence when set.
    pub initial: Option<List>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            probe: DEFAULT_PROBE,
            index: DEFAULT_INDEX,
            initial: None,
        }
    }
}

impl Config {
    /// Parses the arguments that follow the program name.
    pub fn build(args: &[String]) -> Result<Config> {
        let mut config = Config::default();
        let mut positional = Vec::new();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--probe" => config.probe = flag_value(&mut iter, "--probe")?,
                "--index" => config.index = flag_value(&mut iter, "--index")?,
                flag if flag.starts_with("--") => {
                    return Err(Error::Config(format!("unknown flag {}", flag)));
                }
                value => positional.push(value),
            }
        }

        if !positional.is_empty() {
            config.initial = Some(positional.join(" ").parse()?);
        }
        Ok(config)
    }
}

fn flag_value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<i32> {
    let raw = iter
        .next()
        .ok_or_else(|| Error::Config(format!("missing value for {}", flag)))?;
    raw.parse()
        .map_err(|_| Error::Config(format!("{} expects an integer, got {:?}", flag, raw)))
}

/// Runs every list operation in turn and writes the intermediate states.
pub fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let mut list = match &config.initial {
        Some(initial) => initial.clone(),
        None => {
            let mut list = List::new();
            list.insert_at_beginning(1);
            list.insert_at_beginning(2);
            list.insert_at_end(3);
            list.insert_at_end(4);
            list.insert_at_index(5, 2);
            list
        }
    };
    info!(len = list.len(), "list built");

    report(out, "List after inserts", &list)?;
    line(
        out,
        format_args!(
            "First occurrence of {}: {}",
            config.probe,
            list.find_first_occurrence(config.probe)
        ),
    )?;

    report(out, "List before sort", &list)?;
    list.sort_list();
    report(out, "List after sort", &list)?;

    list.delete_at_beginning();
    list.delete_at_end();
    report(out, "List after deleting head and tail", &list)?;

    let removed = list.interior().delete_at_index(config.index);
    info!(index = config.index, ?removed, "interior delete");
    report(
        out,
        &format!("List after deleting index {}", config.index),
        &list,
    )?;

    list.delete_list();
    report(out, "List after teardown", &list)?;
    Ok(())
}

fn report(out: &mut impl Write, label: &str, list: &List) -> Result<()> {
    line(out, format_args!("{}: {}", label, list))
}

fn line(out: &mut impl Write, args: std::fmt::Arguments<'_>) -> Result<()> {
    writeln!(out, "{}", args)?;
    Ok(())
}
