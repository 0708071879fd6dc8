const LINE_SEPARATOR: char = '\u{2028}';
const PARAGRAPH_SEPARATOR: char = '\u{2029}';

/// removes every line ending, so base64 payloads wrapped over multiple lines
/// become a single token again
pub fn remove_line_endings(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(*c, '\r' | '\n' | LINE_SEPARATOR | PARAGRAPH_SEPARATOR))
        .collect()
}
