//! Console input helpers.
//!
//! Every prompt reads one full line; parse failures are reported to the
//! caller as `None` so the menu loop can complain and continue.

use std::io::{self, Write};
use std::str::FromStr;

/// Print a prompt and read one trimmed line. EOF yields an empty string,
/// which the menus treat as "back".
pub fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut buffer = String::new();
    match io::stdin().read_line(&mut buffer) {
        Ok(_) => buffer.trim().to_string(),
        Err(_) => String::new(),
    }
}

/// Prompt for a value parseable as `T`. `None` means invalid input.
pub fn read_number<T: FromStr>(prompt: &str) -> Option<T> {
    read_line(prompt).parse().ok()
}
