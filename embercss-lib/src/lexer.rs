//! This module splits raw CSS-like text into a flat token stream.
//!
//! The lexer is deliberately permissive and knows nothing about rules or
//! declarations. It only recognizes braces, semicolon-terminated lines and
//! free text fragments; everything structural is left to the rule builder
//! in `crate::parser::rule_builder`.

/// Tokenizes the full raw text in a single left-to-right scan.
///
/// # Arguments
///
/// * `raw` - The complete raw text, already read into memory by the caller.
///
/// # Returns
///
/// An ordered list of tokens, each one of: a bare `"{"`, a bare `"}"`, a
/// complete declaration-like line ending in `;`, or a free-form header
/// fragment.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut buffer = String::new();

    for ch in raw.chars() {
        match ch {
            '{' => {
                flush(&mut buffer, &mut tokens);
                tokens.push("{".to_string());
            }
            '}' => {
                flush(&mut buffer, &mut tokens);
                tokens.push("}".to_string());
            }
            ';' => {
                buffer.push(';');
                let line = buffer.trim().to_string();
                buffer.clear();
                // Base64 payloads contain ';' freely, so a fragment that
                // starts with the literal "base64" prefix is glued back
                // onto the token it was split off from. This is a narrow
                // string-prefix check, not a data-URI detector.
                if line.starts_with("base64") {
                    match tokens.last_mut() {
                        Some(previous) => previous.push_str(&line),
                        None => tokens.push(line),
                    }
                } else {
                    tokens.push(line);
                }
            }
            // Legacy quirk: carriage returns, newlines and underscores are
            // dropped outright. They are neither separators nor content.
            '\r' | '\n' | '_' => {}
            _ => buffer.push(ch),
        }
    }

    tokens
}

/// Flushes the accumulator as one token if it is non-blank after trimming.
fn flush(buffer: &mut String, tokens: &mut Vec<String>) {
    let text = buffer.trim();
    if !text.is_empty() {
        tokens.push(text.to_string());
    }
    buffer.clear();
}
