/// Parse one line of dotenv text into a `(key, value)` pair.
///
/// Returns `None` for lines that carry no declaration: blank lines, comment
/// lines (first non-whitespace character is `#`), and lines without a `=`.
///
/// The line is trimmed of surrounding whitespace (tabs included, trailing
/// `\r\n` or `\n` included), an `export ` prefix is stripped, and the value is
/// split off at the first `=` so that values may themselves contain `=`. A
/// value wrapped in one matching pair of `"…"` or `'…'` loses exactly that
/// outer pair; interior characters are never unescaped.
///
/// Keys are not validated against an identifier grammar: anything left of
/// the first `=`, including the empty string, is returned verbatim. Callers
/// that want to reject empty keys do so themselves.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let mut working = line.trim();
    if working.is_empty() || working.starts_with('#') {
        return None;
    }

    if let Some(rest) = working.strip_prefix("export")
        && rest
            .chars()
            .next()
            .map(|ch| ch.is_whitespace())
            .unwrap_or(false)
    {
        working = rest.trim_start();
    }

    let (key, value) = working.split_once('=')?;
    Some((key.trim().to_owned(), unquote(value.trim()).to_owned()))
}

/// Strip a single outer pair of matching `"` or `'` quotes, if present.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        return &value[1..value.len() - 1];
    }
    value
}
