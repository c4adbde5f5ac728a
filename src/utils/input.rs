//! Input sanitization for the single-line composer.

/// Sanitize pasted or typed text for a one-line input buffer.
///
/// This function:
/// - Converts tabs to 4 spaces
/// - Collapses line breaks (LF, CR, or a CRLF pair) to a single space
/// - Filters out other control characters
///
/// Keeping the result free of newlines means the composer never has to
/// reason about multi-line content.
pub fn sanitize_line_input(text: &str) -> String {
    let mut sanitized = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\t' => sanitized.push_str("    "),
            '\r' => {
                // A CRLF pair counts as one break.
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                sanitized.push(' ');
            }
            '\n' => sanitized.push(' '),
            _ if !c.is_control() => sanitized.push(c),
            _ => {}
        }
    }

    sanitized
}
