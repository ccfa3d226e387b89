//! Anchors module - Jump-link anchors for heading elements
//!
//! Headings (h2-h6) in site pages get a stable identifier, a `jump-target`
//! class, and an appended same-page link labeled `#`:
//! `<h2 id="getting-started" class="jump-target">Getting Started<a class="anchor-hash" href="#getting-started">#</a></h2>`

pub mod annotate;
pub mod slug;
