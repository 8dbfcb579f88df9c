//! `{name}` placeholder substitution.
//!
//! Used for the user prompt and for the publisher command line.
//!
//! - `{name}` is replaced by the value bound to `name` (surrounding spaces
//!   inside the braces are ignored)
//! - `{{` and `}}` render as literal braces
//! - a lone `}` is kept as-is
//!
//! Referencing an unbound name is an error rather than an empty substitution.

use std::collections::HashMap;
use thiserror::Error;

/// Placeholder values keyed by name.
pub type Vars = HashMap<String, String>;

/// Why a template could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("undefined placeholder '{name}' at byte {position}")]
    Undefined { name: String, position: usize },

    #[error("unclosed '{{' at byte {position}")]
    Unclosed { position: usize },

    #[error("empty placeholder '{{}}' at byte {position}")]
    Empty { position: usize },
}

/// Substitute every placeholder in `template` from `vars`.
pub fn render(template: &str, vars: &Vars) -> Result<String, RenderError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    return Err(RenderError::Unclosed { position });
                }

                let name = name.trim();
                if name.is_empty() {
                    return Err(RenderError::Empty { position });
                }
                let value = vars.get(name).ok_or_else(|| RenderError::Undefined {
                    name: name.to_string(),
                    position,
                })?;
                out.push_str(value);
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}

/// Build a [`Vars`] map from key/value pairs.
pub fn vars<I, K, V>(pairs: I) -> Vars
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
