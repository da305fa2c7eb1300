//! Pagination module
//!
//! Offset pagination driven by next-page cursor URLs.
//!
//! # Overview
//!
//! List endpoints return the next page as a URL. The offset extractor turns
//! that URL into the offset of the next call, and `PaginationState` tracks
//! the position of one listing.

mod offset;
mod types;

pub use offset::{extract_offset, next_page, OFFSET_PARAM};
pub use types::{NextPage, PaginationState};
