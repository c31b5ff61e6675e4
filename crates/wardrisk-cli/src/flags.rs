//! Loose string flags accepted on the command line.
//!
//! Workflow scripts pass switches as `yes`/`Yes`/`no`. Only the CLI reads
//! these; the scoring core takes plain booleans.

use std::convert::Infallible;

/// Interpret a yes/no switch. `yes` in any case is true, anything else false.
///
/// # Examples
///
/// ```
/// use wardrisk_cli::flags::parse_yes_flag;
///
/// assert_eq!(parse_yes_flag("Yes"), Ok(true));
/// assert_eq!(parse_yes_flag("no"), Ok(false));
/// assert_eq!(parse_yes_flag("y"), Ok(false));
/// ```
pub fn parse_yes_flag(value: &str) -> Result<bool, Infallible> {
    Ok(value.trim().eq_ignore_ascii_case("yes"))
}
