//! Relaxed JSON loader.
//!
//! Accepts the JSON5 dialect people paste from JS sources and dev tools:
//! comments, unquoted identifier keys, single-quoted strings, trailing
//! commas, hexadecimal numbers, `Infinity`/`NaN`. Exactly one value per
//! document.
mod number;
mod string;
mod trivia;

use indexmap::IndexMap;
use winnow::{
    ModalResult, Parser,
    combinator::{alt, cut_err, delimited, fail, opt},
    error::{StrContext, StrContextValue},
    token::{one_of, take_while},
};

use crate::error::{InferError, InferResult};
use crate::value::Value;
use trivia::trivia;

/// Deepest accepted nesting of objects and arrays, as in serde_json.
pub const MAX_DEPTH: usize = 128;

/// Parse a whole document.
pub fn parse(src: &str) -> InferResult<Value> {
    let body = src.strip_prefix('\u{feff}').unwrap_or(src);
    delimited(trivia, |input: &mut &str| json_value(input, 0), trivia)
        .parse(body)
        .map_err(|err| {
            let (line, column) = line_column(body, err.offset());
            let message = err.inner().to_string();
            let message = if message.is_empty() {
                String::from("unexpected input")
            } else {
                message.replace('\n', "; ")
            };
            InferError::MalformedInput { line, column, message }
        })
}

/// 1-based line and column (in characters) of a byte offset.
fn line_column(src: &str, offset: usize) -> (usize, usize) {
    let before = &src[..offset.min(src.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

// ------------------------------- Grammar ---------------------------------- //

/// `depth` counts the containers already open around this value.
fn json_value(input: &mut &str, depth: usize) -> ModalResult<Value> {
    if input.starts_with('{') {
        return object(input, depth + 1).map(Value::Object);
    }
    if input.starts_with('[') {
        return array(input, depth + 1).map(Value::Array);
    }
    alt((
        string::quoted.map(Value::String),
        keyword,
        number::number.map(Value::Number),
    ))
    .context(StrContext::Label("value"))
    .parse_next(input)
}

fn keyword(input: &mut &str) -> ModalResult<Value> {
    alt((
        "true".value(Value::Bool(true)),
        "false".value(Value::Bool(false)),
        "null".value(Value::Null),
    ))
    .parse_next(input)
}

fn check_depth(input: &mut &str, depth: usize) -> ModalResult<()> {
    if depth > MAX_DEPTH {
        return cut_err(fail)
            .context(StrContext::Label("nesting depth"))
            .parse_next(input);
    }
    Ok(())
}

fn object(input: &mut &str, depth: usize) -> ModalResult<IndexMap<String, Value>> {
    check_depth(input, depth)?;
    '{'.parse_next(input)?;
    let mut map = IndexMap::new();
    loop {
        trivia.parse_next(input)?;
        if opt('}').parse_next(input)?.is_some() {
            return Ok(map);
        }
        let key = cut_err(property_key)
            .context(StrContext::Label("property name"))
            .parse_next(input)?;
        trivia.parse_next(input)?;
        cut_err(':')
            .context(StrContext::Expected(StrContextValue::CharLiteral(':')))
            .parse_next(input)?;
        trivia.parse_next(input)?;
        let value = cut_err(|input: &mut &str| json_value(input, depth)).parse_next(input)?;
        // later duplicates win but keep the first position
        map.insert(key, value);
        trivia.parse_next(input)?;
        if opt(',').parse_next(input)?.is_none() {
            cut_err('}')
                .context(StrContext::Expected(StrContextValue::CharLiteral('}')))
                .context(StrContext::Expected(StrContextValue::CharLiteral(',')))
                .parse_next(input)?;
            return Ok(map);
        }
    }
}

fn array(input: &mut &str, depth: usize) -> ModalResult<Vec<Value>> {
    check_depth(input, depth)?;
    '['.parse_next(input)?;
    let mut items = Vec::new();
    loop {
        trivia.parse_next(input)?;
        if opt(']').parse_next(input)?.is_some() {
            return Ok(items);
        }
        items.push(cut_err(|input: &mut &str| json_value(input, depth)).parse_next(input)?);
        trivia.parse_next(input)?;
        if opt(',').parse_next(input)?.is_none() {
            cut_err(']')
                .context(StrContext::Expected(StrContextValue::CharLiteral(']')))
                .context(StrContext::Expected(StrContextValue::CharLiteral(',')))
                .parse_next(input)?;
            return Ok(items);
        }
    }
}

fn property_key(input: &mut &str) -> ModalResult<String> {
    alt((string::quoted, identifier)).parse_next(input)
}

/// Unquoted key: `[A-Za-z_$][A-Za-z0-9_$]*`, Unicode letters included.
fn identifier(input: &mut &str) -> ModalResult<String> {
    (
        one_of(|c: char| c.is_alphabetic() || c == '_' || c == '$'),
        take_while(0.., |c: char| c.is_alphanumeric() || c == '_' || c == '$'),
    )
        .take()
        .map(str::to_owned)
        .parse_next(input)
}
