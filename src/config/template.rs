/// Generate the commented `.permfix.toml` written by `permfix --init`.
pub fn generate_init_template() -> String {
	r#"# permfix configuration
# See: permfix --help

# Stop looking for .permfix.toml in parent directories
root = true

# File to rewrite, relative to this file's directory
input = "server.rs"

# How &perms::build("ns", "perm") is rewritten:
#   dotted   -> "ns".perm.into()
#   joined   -> "ns.perm".into()
#   verbatim -> &"ns"."perm".into()
style = "dotted"

# Rewrite every call on a line instead of only the first
replace-all = false

# Skip ~/.permfix.toml when this environment variable is truthy
# user-config-disable-env-var = "CI"
"#
	.to_string()
}
