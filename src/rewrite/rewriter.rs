use crate::error::{PermfixError, Result};
use crate::rewrite::style::Style;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Literal text a line must contain before the full pattern is tried.
pub const TRIGGER: &str = "&perms::build(\"";

/// `&perms::build("A", "B")` where A and B are ASCII word characters.
pub const PATTERN: &str = r#"&perms::build\("([0-9A-Za-z_]+)", "([0-9A-Za-z_]+)"\)"#;

/// Result of rewriting a whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
	/// Output lines joined with `\n`, without a trailing newline.
	pub text: String,

	/// Number of lines in the input (and therefore in the output).
	pub line_count: usize,

	/// 1-based numbers of the lines that were changed.
	pub changed_lines: Vec<usize>,
}

/// Line-oriented rewriter for `&perms::build(...)` calls.
#[derive(Debug)]
pub struct PermRewriter {
	pattern: Regex,
	style: Style,
	replace_all: bool,
}

impl PermRewriter {
	/// Compile the call pattern for the given style.
	///
	/// With `replace_all` unset only the first match on each line is rewritten.
	pub fn new(style: Style, replace_all: bool) -> Result<Self> {
		let pattern = Regex::new(PATTERN).map_err(|source| PermfixError::InvalidPattern {
			pattern: PATTERN.to_string(),
			source,
		})?;

		Ok(PermRewriter {
			pattern,
			style,
			replace_all,
		})
	}

	pub fn style(&self) -> Style {
		self.style
	}

	pub fn replace_all(&self) -> bool {
		self.replace_all
	}

	/// Rewrite a single line. Lines without the trigger are returned borrowed.
	pub fn rewrite_line<'a>(&self, line: &'a str) -> Cow<'a, str> {
		if !line.contains(TRIGGER) {
			return Cow::Borrowed(line);
		}

		// 0 means no limit
		let limit = if self.replace_all { 0 } else { 1 };
		let style = self.style;
		self.pattern
			.replacen(line, limit, |caps: &Captures<'_>| {
				style.render(&caps[1], &caps[2])
			})
	}

	/// Rewrite every line of `content`, splitting and joining on `\n`.
	pub fn rewrite_document(&self, content: &str) -> Rewritten {
		let mut lines = Vec::new();
		let mut changed_lines = Vec::new();

		for (idx, line) in content.split('\n').enumerate() {
			let rewritten = self.rewrite_line(line);
			if rewritten != line {
				tracing::debug!(line = idx + 1, before = line, after = %rewritten, "rewrote line");
				changed_lines.push(idx + 1);
			}
			lines.push(rewritten);
		}

		Rewritten {
			line_count: lines.len(),
			text: lines.join("\n"),
			changed_lines,
		}
	}
}
