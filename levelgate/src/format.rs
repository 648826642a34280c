//! Runtime message templates.
//!
//! Templates are plain strings known only at runtime, so `format!` cannot be
//! used. [`PrintfFormatter`] understands a small printf-style language:
//!
//! | Directive        | Output                                        |
//! |------------------|-----------------------------------------------|
//! | `%s`             | next positional argument                      |
//! | `%d`             | next positional argument, must be an integer  |
//! | `%2$s`, `%2$d`   | argument 2 (1-based), cursor does not move    |
//! | `%n`             | newline                                       |
//! | `%%`             | literal `%`                                   |
//!
//! Arguments are rendered with their `Display` impl. `%d` additionally
//! requires the rendered text to be a decimal integer. Surplus arguments are
//! ignored.

use std::fmt::Display;

use thiserror::Error;

/// Failure to apply arguments to a template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// A directive referred to an argument that was not supplied.
    #[error("Format specifier refers to argument {index} but only {supplied} supplied")]
    MissingArgument {
        /// 1-based argument position requested.
        index: usize,
        /// Number of arguments actually supplied.
        supplied: usize,
    },

    /// Unsupported conversion character.
    #[error("Unknown format conversion '%{conversion}' at byte {offset}")]
    UnknownConversion {
        /// The conversion character found after `%`.
        conversion: char,
        /// Byte offset of the `%` in the template.
        offset: usize,
    },

    /// `%d` applied to an argument that does not render as an integer.
    #[error("Format specifier at byte {offset} expects an integer for argument {index}, got '{value}'")]
    NotAnInteger {
        /// 1-based argument position.
        index: usize,
        /// The argument's rendered text.
        value: String,
        /// Byte offset of the `%` in the template.
        offset: usize,
    },

    /// Explicit argument index of zero or unparseable digits.
    #[error("Invalid argument index in format specifier at byte {offset}")]
    BadIndex {
        /// Byte offset of the `%` in the template.
        offset: usize,
    },

    /// Template ended right after `%`.
    #[error("Template ends with an incomplete format specifier at byte {offset}")]
    DanglingPercent {
        /// Byte offset of the `%` in the template.
        offset: usize,
    },
}

/// Renders a template with positional arguments.
///
/// Implementations must be pure: equal inputs give equal output.
pub trait MessageFormatter: Send + Sync {
    /// Apply `args` to `template`.
    fn format(&self, template: &str, args: &[&dyn Display]) -> Result<String, FormatError>;
}

/// Printf-style formatter, the default [`MessageFormatter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintfFormatter;

impl PrintfFormatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self
    }
}

impl MessageFormatter for PrintfFormatter {
    fn format(&self, template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
        let mut out = String::with_capacity(template.len() + 16 * args.len());
        let mut cursor = 0;
        let mut chars = template.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }

            // Optional explicit index: digits followed by '$'
            let mut digits = String::new();
            while let Some(&(_, d)) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                digits.push(d);
                chars.next();
            }
            let explicit = if digits.is_empty() {
                None
            } else {
                match chars.next() {
                    Some((_, '$')) => {}
                    Some(_) | None => return Err(FormatError::BadIndex { offset }),
                }
                match digits.parse::<usize>() {
                    Ok(n) if n > 0 => Some(n),
                    _ => return Err(FormatError::BadIndex { offset }),
                }
            };

            let Some((_, conversion)) = chars.next() else {
                return Err(FormatError::DanglingPercent { offset });
            };

            match conversion {
                's' | 'd' => {
                    let index = match explicit {
                        Some(n) => n,
                        None => {
                            cursor += 1;
                            cursor
                        }
                    };
                    let arg = args.get(index - 1).ok_or(FormatError::MissingArgument {
                        index,
                        supplied: args.len(),
                    })?;
                    let value = arg.to_string();
                    if conversion == 'd' && !is_integer(&value) {
                        return Err(FormatError::NotAnInteger {
                            index,
                            value,
                            offset,
                        });
                    }
                    out.push_str(&value);
                }
                'n' if explicit.is_none() => out.push('\n'),
                '%' if explicit.is_none() => out.push('%'),
                other => {
                    return Err(FormatError::UnknownConversion {
                        conversion: other,
                        offset,
                    })
                }
            }
        }

        Ok(out)
    }
}

fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
