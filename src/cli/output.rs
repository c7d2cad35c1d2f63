//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red bold "Error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{} {}", "Error:".red().bold(), msg.to_string().red());
}

/// Section header, cyan bold when `color` is set
pub fn header(msg: &str, color: bool) -> String {
    if color {
        msg.cyan().bold().to_string()
    } else {
        msg.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_without_color_is_plain() {
        assert_eq!(header("Tree structure:", false), "Tree structure:");
    }
}
