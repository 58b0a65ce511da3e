//! Parser for the textual action format.
//!
//! Planner output carries its tool call on an `ACTION:` line:
//!
//! ```text
//! THOUGHT: I need the current status of the flight
//! ACTION: get_flight_status {"flight_number": "AA123"}
//! ```
//!
//! The label is matched case-insensitively and may be preceded by markdown
//! bullets or emphasis. The tool name may be wrapped in `[...]` or backticks.
//! Arguments may be a JSON object, a relaxed object (`{key: value}` or
//! `{key = value}` with bare or quoted keys), a call form
//! (`(key=value, ...)`), or absent. `ACTION: TERMINATE` requests the end of
//! the conversation.

use serde_json::{Map, Number, Value};
use thiserror::Error;
use voyage_tools::FunctionCall;

/// Label of the line carrying the tool call.
pub const ACTION_LABEL: &str = "ACTION";

/// Label of the planner's reasoning line.
pub const THOUGHT_LABEL: &str = "THOUGHT";

/// Label of the executor's result line.
pub const OBSERVATION_LABEL: &str = "OBSERVATION";

/// A successfully parsed action.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedAction {
    /// Invoke a tool.
    Call(FunctionCall),
    /// End the conversation.
    Terminate,
}

/// Errors produced while parsing an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionParseError {
    /// No line carries the `ACTION:` label.
    #[error("no ACTION line found")]
    MissingAction,
    /// The `ACTION:` label is not followed by a tool name.
    #[error("ACTION line does not name a tool")]
    MissingToolName,
    /// The tool name contains characters outside `[A-Za-z0-9_.-]` or does
    /// not start with a letter or underscore.
    #[error("invalid tool name '{0}'")]
    InvalidToolName(String),
    /// The argument block could not be read.
    #[error("malformed arguments: {reason}")]
    MalformedArguments {
        /// What went wrong.
        reason: String,
    },
    /// Text follows the tool name or argument block on the ACTION line.
    #[error("unexpected input after the action: '{0}'")]
    TrailingInput(String),
}

fn malformed(reason: impl Into<String>) -> ActionParseError {
    ActionParseError::MalformedArguments {
        reason: reason.into(),
    }
}

/// Parses the first `ACTION:` line of `text`.
///
/// An argument block opened on the ACTION line may continue over the
/// following lines.
///
/// # Errors
///
/// Returns an [`ActionParseError`] describing the first problem found.
pub fn parse_action(text: &str) -> Result<ParsedAction, ActionParseError> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if let Some(after) = strip_label(line, ACTION_LABEL) {
            let start = offset + (line.len() - after.len());
            return parse_after_label(&text[start..]);
        }
        offset += line.len();
    }
    Err(ActionParseError::MissingAction)
}

/// Returns the remainder of `line` after `label:`, or `None` if the line
/// does not carry that label.
///
/// Leading whitespace, bullets (`-`, `*`, `>`, `#`) and emphasis around the
/// label are ignored. The label itself is matched case-insensitively.
#[must_use]
pub fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let trimmed =
        line.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '*' | '>' | '#'));
    let head = trimmed.get(..label.len())?;
    if !head.eq_ignore_ascii_case(label) {
        return None;
    }
    let rest = trimmed[label.len()..].trim_start_matches([' ', '\t', '*']);
    let rest = rest.strip_prefix(':')?;
    Some(rest.trim_start_matches('*'))
}

fn parse_after_label(rest: &str) -> Result<ParsedAction, ActionParseError> {
    let mut cursor = Cursor::new(rest);
    cursor.skip_inline_whitespace();

    let closer = if cursor.eat('[') {
        Some(']')
    } else if cursor.eat('`') {
        Some('`')
    } else {
        None
    };
    cursor.skip_inline_whitespace();

    let name = take_tool_name(&mut cursor)?;
    if name.eq_ignore_ascii_case(crate::termination::TERMINATION_MARKER) {
        return Ok(ParsedAction::Terminate);
    }

    if let Some(closer) = closer {
        cursor.skip_inline_whitespace();
        if !cursor.eat(closer) {
            return Err(ActionParseError::InvalidToolName(format!(
                "{name}{}",
                cursor.rest_of_line()
            )));
        }
    }

    cursor.skip_inline_whitespace();
    let parameters = match cursor.peek() {
        None | Some('\n' | '\r') => Map::new(),
        Some('{') => parse_object_block(take_balanced(&mut cursor)?)?,
        Some('(') => {
            let block = take_balanced(&mut cursor)?;
            parse_relaxed_pairs(&block[1..block.len() - 1])?
        }
        Some(_) => {
            let rest = cursor.rest_of_line().trim();
            if !rest.trim_matches(['.', '`']).is_empty() {
                return Err(ActionParseError::TrailingInput(rest.to_string()));
            }
            Map::new()
        }
    };

    let tail = cursor.rest_of_line().trim();
    if !tail.trim_matches(['.', '`']).is_empty() {
        return Err(ActionParseError::TrailingInput(tail.to_string()));
    }

    Ok(ParsedAction::Call(FunctionCall::new(name, parameters)))
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

fn take_tool_name<'a>(cursor: &mut Cursor<'a>) -> Result<&'a str, ActionParseError> {
    match cursor.peek() {
        None | Some('\n' | '\r' | ']' | '`' | '{' | '(') => Err(ActionParseError::MissingToolName),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            let name = cursor.take_while(is_name_char);
            Ok(name.trim_end_matches('.'))
        }
        Some(_) => {
            let word = cursor
                .rest_of_line()
                .split_whitespace()
                .next()
                .unwrap_or_default();
            Err(ActionParseError::InvalidToolName(word.to_string()))
        }
    }
}

fn parse_object_block(block: &str) -> Result<Map<String, Value>, ActionParseError> {
    match serde_json::from_str::<Value>(block) {
        Ok(Value::Object(map)) => Ok(map),
        _ => parse_relaxed_pairs(&block[1..block.len() - 1]),
    }
}

/// Parses `key: value, key = value, ...` pairs.
fn parse_relaxed_pairs(inner: &str) -> Result<Map<String, Value>, ActionParseError> {
    let mut cursor = Cursor::new(inner);
    let mut map = Map::new();

    loop {
        cursor.skip_whitespace();
        if cursor.is_done() {
            break;
        }

        let key = parse_key(&mut cursor)?;
        cursor.skip_whitespace();
        if !(cursor.eat(':') || cursor.eat('=')) {
            return Err(malformed(format!("expected ':' or '=' after '{key}'")));
        }
        cursor.skip_whitespace();
        let value = parse_value(&mut cursor)?;

        cursor.skip_whitespace();
        match cursor.peek() {
            None => {}
            Some(',' | ';') => {
                cursor.bump();
            }
            Some(c) => return Err(malformed(format!("unexpected '{c}' after value of '{key}'"))),
        }
        map.insert(key, value);
    }

    Ok(map)
}

fn parse_key(cursor: &mut Cursor<'_>) -> Result<String, ActionParseError> {
    match cursor.peek() {
        Some(quote @ ('"' | '\'')) => parse_quoted(cursor, quote),
        _ => {
            let key = cursor.take_while(is_name_char);
            if key.is_empty() {
                Err(malformed("expected a parameter name"))
            } else {
                Ok(key.to_string())
            }
        }
    }
}

fn parse_value(cursor: &mut Cursor<'_>) -> Result<Value, ActionParseError> {
    match cursor.peek() {
        Some(quote @ ('"' | '\'')) => parse_quoted(cursor, quote).map(Value::String),
        Some(open @ ('{' | '[')) => {
            let block = take_balanced(cursor)?;
            match serde_json::from_str::<Value>(block) {
                Ok(value) => Ok(value),
                Err(_) if open == '{' => parse_object_block(block).map(Value::Object),
                Err(err) => Err(malformed(format!("invalid list '{block}': {err}"))),
            }
        }
        _ => {
            let raw = cursor.take_while(|c| !matches!(c, ',' | ';')).trim();
            if raw.is_empty() {
                Err(malformed("missing value"))
            } else {
                Ok(scalar(raw))
            }
        }
    }
}

/// Interprets a bare word as a JSON scalar.
fn scalar(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            if let Ok(int) = raw.parse::<i64>() {
                return Value::Number(int.into());
            }
            raw.parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map_or_else(|| Value::String(raw.to_string()), Value::Number)
        }
    }
}

fn parse_quoted(cursor: &mut Cursor<'_>, quote: char) -> Result<String, ActionParseError> {
    cursor.bump();
    let mut out = String::new();
    while let Some(c) = cursor.bump() {
        match c {
            '\\' => match cursor.bump() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some(escaped @ ('"' | '\'' | '\\')) => out.push(escaped),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => break,
            },
            c if c == quote => return Ok(out),
            c => out.push(c),
        }
    }
    Err(malformed("unterminated string"))
}

/// Consumes a bracketed block, including nested brackets and quoted strings,
/// and returns it with its delimiters.
///
/// A single quote only opens a string at the start of a value, so bare words
/// such as `O'Hare` pass through.
fn take_balanced<'a>(cursor: &mut Cursor<'a>) -> Result<&'a str, ActionParseError> {
    let start = cursor.pos;
    let mut expected = Vec::new();
    let mut previous = ' ';

    while let Some(c) = cursor.bump() {
        match c {
            '{' => expected.push('}'),
            '[' => expected.push(']'),
            '(' => expected.push(')'),
            '}' | ']' | ')' => {
                if expected.pop() != Some(c) {
                    return Err(malformed(format!("unbalanced '{c}'")));
                }
                if expected.is_empty() {
                    return Ok(&cursor.src[start..cursor.pos]);
                }
            }
            '"' => skip_quoted(cursor, c)?,
            '\'' if matches!(previous, '{' | '(' | '[' | ',' | ':' | '=') => {
                skip_quoted(cursor, c)?;
            }
            _ => {}
        }
        if !c.is_whitespace() {
            previous = c;
        }
    }

    let opener = cursor.src[start..].chars().next().unwrap_or('{');
    Err(malformed(format!("unclosed '{opener}'")))
}

fn skip_quoted(cursor: &mut Cursor<'_>, quote: char) -> Result<(), ActionParseError> {
    while let Some(c) = cursor.bump() {
        if c == '\\' {
            cursor.bump();
        } else if c == quote {
            return Ok(());
        }
    }
    Err(malformed("unterminated string"))
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn rest_of_line(&self) -> &'a str {
        self.rest().lines().next().unwrap_or_default()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn is_done(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn take_while(&mut self, mut keep: impl FnMut(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !keep(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.src[start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    fn skip_inline_whitespace(&mut self) {
        self.take_while(|c| c == ' ' || c == '\t');
    }
}
