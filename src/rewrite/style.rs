use serde::Deserialize;
use std::fmt;

/// How a matched `&perms::build("A", "B")` call is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
	/// `"A".B.into()`: first argument keeps its quotes, second is bare.
	#[default]
	Dotted,

	/// `"A.B".into()`: both arguments joined into one permission literal.
	Joined,

	/// `&"A"."B".into()`: ampersand and both quoted arguments kept as written.
	Verbatim,
}

impl Style {
	/// Render the replacement for the two unquoted call arguments.
	pub fn render(self, namespace: &str, permission: &str) -> String {
		match self {
			Style::Dotted => format!("\"{namespace}\".{permission}.into()"),
			Style::Joined => format!("\"{namespace}.{permission}\".into()"),
			Style::Verbatim => format!("&\"{namespace}\".\"{permission}\".into()"),
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Style::Dotted => "dotted",
			Style::Joined => "joined",
			Style::Verbatim => "verbatim",
		}
	}
}

impl fmt::Display for Style {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_is_dotted() {
		assert_eq!(Style::default(), Style::Dotted);
	}

	#[test]
	fn test_render_dotted() {
		assert_eq!(Style::Dotted.render("role", "admin"), r#""role".admin.into()"#);
	}

	#[test]
	fn test_render_joined() {
		assert_eq!(Style::Joined.render("role", "admin"), r#""role.admin".into()"#);
	}

	#[test]
	fn test_render_verbatim() {
		assert_eq!(
			Style::Verbatim.render("role", "admin"),
			r#"&"role"."admin".into()"#
		);
	}

	#[test]
	fn test_display_matches_config_names() {
		#[derive(Deserialize)]
		struct Wrapper {
			style: Style,
		}

		for style in [Style::Dotted, Style::Joined, Style::Verbatim] {
			let parsed: Wrapper = toml::from_str(&format!("style = \"{style}\"")).unwrap();
			assert_eq!(parsed.style, style);
		}
	}

	#[test]
	fn test_unknown_style_rejected() {
		#[derive(Debug, Deserialize)]
		#[allow(dead_code)]
		struct Wrapper {
			style: Style,
		}

		let result: Result<Wrapper, _> = toml::from_str("style = \"quoted\"");
		assert!(result.is_err());
	}
}
