//! Media type grammar parser.
//!
//! `type "/" [prefix "."] subtype ["+" suffix] *(";" key "=" value)`
//!
//! Separators are matched leftmost: the first `/`, then the first `.` and the
//! first `+` after it. Later separators stay inside the subtype or suffix.
//! Token characters are not checked.

use crate::error::ParseError;
use crate::media_type::MediaType;
use crate::names::STANDARD;
use std::collections::HashMap;
use tracing::trace;

/// Parses a media type string.
///
/// Either a complete [`MediaType`] or an error is returned, never a partly
/// filled value. Repeated parameter keys accumulate their values.
///
/// # Examples
///
/// ```
/// use mime_tree::{parse, ParseError};
///
/// let mt = parse("text/plain;charset=utf-8;charset=ascii").unwrap();
/// assert_eq!(mt.params("charset"), ["utf-8", "ascii"]);
///
/// assert_eq!(parse(""), Err(ParseError::EmptyInput));
/// assert_eq!(parse("application"), Err(ParseError::MalformedTree));
/// assert_eq!(parse("text/plain;bad"), Err(ParseError::MalformedParameter));
/// ```
pub fn parse(input: &str) -> Result<MediaType, ParseError> {
    let result = parse_media_type(input);
    if let Err(err) = &result {
        trace!(input, error = %err, "rejected media type");
    }
    result
}

fn parse_media_type(input: &str) -> Result<MediaType, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (tree, params) = input.split_once(';').unwrap_or((input, ""));
    if tree.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut media_type = parse_tree(tree)?;
    parse_params(params, &mut media_type.parameters)?;
    Ok(media_type)
}

fn parse_tree(tree: &str) -> Result<MediaType, ParseError> {
    let (top_level, rest) = tree.split_once('/').ok_or(ParseError::MalformedTree)?;
    let (prefix, rest) = rest.split_once('.').unwrap_or((STANDARD, rest));
    let (subtype, suffix) = rest.split_once('+').unwrap_or((rest, ""));
    Ok(MediaType::new(top_level, prefix, subtype, suffix))
}

fn parse_params(
    segment: &str,
    parameters: &mut HashMap<String, Vec<String>>,
) -> Result<(), ParseError> {
    let segment = segment.trim();
    if segment.is_empty() {
        return Ok(());
    }

    for pair in segment.split(';') {
        // Only leading whitespace is dropped; trailing whitespace is part of the value.
        match pair.trim_start().split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                parameters
                    .entry(key.to_string())
                    .or_default()
                    .push(value.to_string());
            }
            _ => return Err(ParseError::MalformedParameter),
        }
    }

    Ok(())
}
