/// CLI utilities for consistent output formatting
use std::io::IsTerminal;

/// Get a colored prefix
///
/// Returns bright cyan if stderr is a TTY, plain text otherwise.
pub fn rehook_prefix() -> &'static str {
    if std::io::stderr().is_terminal() {
        "\x1b[96m[rehook]\x1b[0m"
    } else {
        "[rehook]"
    }
}

/// Write diagnostic lines to stderr, one prefixed line each
pub fn report(lines: &[String]) {
    let prefix = rehook_prefix();
    for line in lines {
        eprintln!("{} {}", prefix, line);
    }
}
