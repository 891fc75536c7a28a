//! Line-oriented rewriting of `&perms::build(...)` calls.
//!
//! This module handles:
//! - The trigger check and call pattern matching
//! - Rendering matched calls in the selected replacement style

pub mod rewriter;
pub mod style;

pub use rewriter::{PATTERN, PermRewriter, Rewritten, TRIGGER};
pub use style::Style;

use crate::config::Settings;
use crate::error::Result;
use crate::source::read_source;

/// Read the input named by `settings` and rewrite it.
///
/// The whole file is read before any line is rewritten, so a read failure
/// produces no output.
pub fn rewrite_file(settings: &Settings) -> Result<Rewritten> {
	let rewriter = PermRewriter::new(settings.style, settings.replace_all)?;
	let content = read_source(&settings.input)?;
	let rewritten = rewriter.rewrite_document(&content);

	tracing::info!(
		input = %settings.input.display(),
		style = %settings.style,
		lines = rewritten.line_count,
		changed = rewritten.changed_lines.len(),
		"rewrite complete"
	);

	Ok(rewritten)
}
