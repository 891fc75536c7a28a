//! Permfix - CLI tool for rewriting `&perms::build("ns", "perm")` calls.
//!
//! This library provides the core functionality for permfix, including:
//! - Line-oriented pattern rewriting with selectable replacement styles
//! - Input loading with a single input-unavailable error kind
//! - Configuration file parsing and cascade discovery
//!
//! # Example
//!
//! ```
//! use permfix_cli::rewrite::{PermRewriter, Style};
//!
//! let rewriter = PermRewriter::new(Style::Dotted, false).unwrap();
//! let out = rewriter.rewrite_document("let x = &perms::build(\"role\", \"admin\");");
//! assert_eq!(out.text, "let x = \"role\".admin.into();");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod rewrite;
pub mod source;

pub use error::{PermfixError, Result};
