//! Read-only post previews for the Mucha social post studio.
//!
//! Rendering is a pure function of the draft: no network access, no
//! mutation, no global state. The output is a [`PostPreview`] describing an
//! ordered approximation of how the post will appear on the target
//! platform, which the UI (or the CLI) turns into pixels or text.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod render;

pub use render::{MediaFrame, PostPreview, PreviewHeader, PreviewSection, render_preview};
