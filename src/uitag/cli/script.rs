//! Event script parsing.
//!
//! One event per line: a verb, then its argument as the rest of the line.
//! Blank lines and `//` comments are skipped. Line numbers are 1-based and
//! count every line of the source, so errors point at the right place.

use uitag::error::{Result, TagError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Set { key: String, value: String },
    Unset { key: String },
    Id(String),
    Type(String),
    Name(String),
    Describe(String),
    Confirm,
    Cancel,
    Remove(String),
    Show,
    Attrs,
    Snapshot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub event: Event,
}

pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>> {
    let mut lines = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let text = raw.trim();
        if text.is_empty() || text.starts_with("//") {
            continue;
        }
        let line = index + 1;
        let event = parse_event(text).map_err(|reason| TagError::Script { line, reason })?;
        lines.push(ScriptLine { line, event });
    }
    Ok(lines)
}

pub fn parse_event(text: &str) -> std::result::Result<Event, String> {
    let (verb, rest) = match text.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (text, ""),
    };

    let event = match verb {
        "set" => {
            let (key, value) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "set needs a key and a value".to_string())?;
            Event::Set {
                key: key.to_string(),
                value: value.trim().to_string(),
            }
        }
        "unset" => Event::Unset {
            key: required(verb, rest)?,
        },
        "id" => Event::Id(rest.to_string()),
        "type" => Event::Type(rest.to_string()),
        "name" => Event::Name(rest.to_string()),
        "describe" => Event::Describe(rest.to_string()),
        "remove" => Event::Remove(required(verb, rest)?),
        "confirm" => no_argument(verb, rest, Event::Confirm)?,
        "cancel" => no_argument(verb, rest, Event::Cancel)?,
        "show" => no_argument(verb, rest, Event::Show)?,
        "attrs" => no_argument(verb, rest, Event::Attrs)?,
        "snapshot" => no_argument(verb, rest, Event::Snapshot)?,
        other => return Err(format!("unknown event '{}'", other)),
    };
    Ok(event)
}

fn required(verb: &str, rest: &str) -> std::result::Result<String, String> {
    if rest.is_empty() {
        return Err(format!("{} needs an argument", verb));
    }
    Ok(rest.to_string())
}

fn no_argument(verb: &str, rest: &str, event: Event) -> std::result::Result<Event, String> {
    if !rest.is_empty() {
        return Err(format!("{} takes no argument", verb));
    }
    Ok(event)
}
