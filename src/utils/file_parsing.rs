/// Drops everything from the first `%` onward.
#[inline]
pub fn strip_comment(line: &str) -> &str {
    match line.find('%') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

#[inline]
fn is_quote(ch: char) -> bool {
    ch == '\'' || ch == '"'
}

#[inline]
fn is_delimiter(ch: char) -> bool {
    matches!(ch, ' ' | ',' | '{' | '}')
}

/// Splits an ARFF line into tokens.
///
/// Space, comma and braces terminate a token and are discarded; empty spans
/// between them yield nothing. A quote (`'` or `"`) opens a span that ends at
/// the next quote of either kind, and its content is always one token, even
/// when empty. Text after the last delimiter is the final token.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    for (i, ch) in line.char_indices() {
        if in_quotes {
            if is_quote(ch) {
                in_quotes = false;
                out.push(line[start..i].to_string());
                start = i + ch.len_utf8();
            }
        } else if is_quote(ch) || is_delimiter(ch) {
            if i > start {
                out.push(line[start..i].to_string());
            }
            in_quotes = is_quote(ch);
            start = i + ch.len_utf8();
        }
    }
    if start < line.len() {
        out.push(line[start..].to_string());
    }
    out
}

/// Splits text into logical lines, accepting `\n`, `\r\n` and lone `\r`
/// terminators. A trailing terminator does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                out.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                out.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

/// Wraps a value in single quotes when it would not survive [`tokenize`]
/// as a single token.
pub fn quote_if_needed(value: &str) -> String {
    if value.is_empty() || value.contains(is_delimiter) {
        format!("'{value}'")
    } else {
        value.to_string()
    }
}
