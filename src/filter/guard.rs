use std::fs;
use std::path::Path;

use log::debug;
use thiserror::Error;

pub const PRAGMA_ONCE: &str = "#pragma once";

const IFNDEF: &str = "#ifndef";
const GUARD_PREFIX: &str = "__";

#[derive(Debug, Error)]
pub enum GuardError {
    #[error("missing guard identifier after #ifndef at line {line}")]
    MissingIdentifier { line: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Filter for replacing the first `#ifndef`/`#define` include guard of a
/// C/C++ header with `#pragma once`.
///
/// The matching `#define` line keeps its position as a blank line. The
/// closing `#endif` reference, any other line mentioning the guard token and
/// redundant repeats of the opener are dropped. A source without a guard
/// passes through unchanged.
pub fn replace_guard(source: &str) -> Result<String, GuardError> {
    let mut guard: Option<&str> = None;
    let mut output = String::with_capacity(source.len());
    for (index, line) in source.split_inclusive('\n').enumerate() {
        let mut words = line.split_whitespace();
        if words.next() == Some(IFNDEF) {
            let ident = words.next().ok_or(GuardError::MissingIdentifier {
                line: index + 1,
            })?;
            if ident.starts_with(GUARD_PREFIX) {
                if guard.is_none() {
                    guard = Some(ident);
                    output.push_str(PRAGMA_ONCE);
                    output.push_str(line_terminator(line));
                }
                // Redundant opener for an already replaced guard.
                continue;
            }
        }
        match guard {
            // Unanchored containment check, matching the exact define line
            // apart. Lines that merely mention the token are guard-related
            // too (usually the closing `#endif // <token>`).
            Some(token) if line.contains(token) => {
                if is_guard_define(line, token) {
                    output.push_str(line_terminator(line));
                }
            }
            _ => output.push_str(line),
        }
    }
    Ok(output)
}

/// Rewrites the include guard of the header at `path` in place.
///
/// The output is computed fully in memory before the file is reopened for
/// writing, so a failed scan leaves the original untouched.
pub fn rewrite_file(path: &Path) -> Result<(), GuardError> {
    let source = fs::read_to_string(path)?;
    let output = replace_guard(&source)?;
    if output == source {
        debug!("{}: no include guard found", path.display());
    } else {
        debug!("{}: include guard replaced with {}", path.display(), PRAGMA_ONCE);
    }
    fs::write(path, output)?;
    Ok(())
}

fn is_guard_define(line: &str, token: &str) -> bool {
    line.strip_prefix("#define ")
        .map_or(false, |rest| rest.starts_with(token))
}

fn line_terminator(line: &str) -> &str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}
