use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use log::warn;

use crate::layout::Layout;
use crate::maze::SerializedMaze;
use crate::parser::parse;
use crate::validation::validate;

/// Name of the URL query parameter a share token travels in.
pub const QUERY_PARAMETER: &str = "maze";

/// Pack a layout into a token that can sit in a URL query string as is.
///
/// The token is the base64 (URL safe alphabet, no padding) of the maze's JSON wire form.
pub fn encode(layout: &Layout) -> String {
    let maze = layout.to_serialized();
    let json = serde_json::to_vec(&maze).expect("maze serializes to json");
    URL_SAFE_NO_PAD.encode(json)
}

/// Unpack a token from an untrusted source.
///
/// Any failure, whether bad base64, bad JSON or a maze that does not validate, gives None
/// and a logged warning. Tokens in the standard base64 alphabet, padded or not, are accepted too.
pub fn decode(token: &str) -> Option<Layout> {

    let trimmed = token.trim().trim_end_matches('=');
    let bytes = match URL_SAFE_NO_PAD.decode(trimmed).or_else(|_| STANDARD_NO_PAD.decode(trimmed)) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Ignoring shared maze: token is not base64 ({})", e);
            return None;
        }
    };

    let maze: SerializedMaze = match serde_json::from_slice(&bytes) {
        Ok(maze) => maze,
        Err(e) => {
            warn!("Ignoring shared maze: not a maze document ({})", e);
            return None;
        }
    };

    let report = validate(&maze);
    if !report.ok {
        warn!("Ignoring shared maze '{}': {}", maze.name, report.errors.join("; "));
        return None;
    }

    Some(parse(&maze))
}

/// Find the `maze` parameter in a URL query string (with or without the leading `?`) and decode it.
pub fn decode_query(query: &str) -> Option<Layout> {
    query.trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if key == QUERY_PARAMETER => Some(value),
                _ => None,
            }
        })
        .next()
        .and_then(decode)
}
