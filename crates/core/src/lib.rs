//! Section catalog, README assembly and markdown rendering.
//!
//! The crate has two halves. The section half owns a fixed catalog of
//! README building blocks and merges per-section input into one markdown
//! document. The render half turns markdown into a restricted HTML subset
//! through an ordered sequence of rewrite passes. Both are pure functions
//! over their arguments and safe to call from any thread; the only shared
//! state is the immutable catalog and lazily compiled patterns.

mod assemble;
mod patterns;
mod render;
mod section;

pub use crate::assemble::{AssembleError, SectionValues, assemble, filled_sections};
pub use crate::render::render;
pub use crate::section::{
    SECTIONS, SectionDefinition, SectionKind, default_order, move_section, section_by_id,
};

/// Returns the version string baked in by Cargo.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
