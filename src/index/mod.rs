//! Index module - Build the search index consumed by the query scorer
//!
//! One PageRecord per site page: title from the `<title>` element, url as
//! the root-relative page path, content as flattened body text.

pub mod build;
