//! Offset extraction from next-page cursors
//!
//! List responses carry the next page as a full URL, e.g.
//! `https://pokeapi.co/api/v2/type?offset=40&limit=20`. The offset query
//! parameter of that URL is the position of the next list call.

use super::types::NextPage;
use crate::error::{Error, Result};
use url::Url;

/// Query parameter holding the page offset
pub const OFFSET_PARAM: &str = "offset";

/// Parse the page offset out of a cursor URL
///
/// Fails when the URL cannot be parsed, has no `offset` parameter, or the
/// parameter is not a non-negative integer.
pub fn extract_offset(cursor: &str) -> Result<u32> {
    let url =
        Url::parse(cursor).map_err(|e| Error::cursor_parse(cursor, format!("invalid URL: {e}")))?;

    let value = url
        .query_pairs()
        .find(|(key, _)| key == OFFSET_PARAM)
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| Error::cursor_parse(cursor, "missing offset parameter"))?;

    value
        .parse::<u32>()
        .map_err(|e| Error::cursor_parse(cursor, format!("offset '{value}' is not a number: {e}")))
}

/// Decide the next page from the `next` field of a list response
///
/// An absent or empty cursor marks the final page and never reaches the
/// extractor.
pub fn next_page(cursor: Option<&str>) -> Result<NextPage> {
    match cursor.map(str::trim) {
        None | Some("") => Ok(NextPage::Done),
        Some(cursor) => Ok(NextPage::Continue {
            offset: extract_offset(cursor)?,
        }),
    }
}
