//! Java `.properties` message bundles.
//!
//! Supports the subset of `java.util.Properties` syntax that bundles use:
//! `#`/`!` comments, `=`/`:`/whitespace separators, backslash line
//! continuation and `\t \n \r \f \uXXXX` escapes (surrogate pairs included).

use std::borrow::Cow;

/// Decode bundle bytes. Modern bundles are UTF-8; older ones are ISO-8859-1.
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

/// Parse bundle text into `(key, value)` pairs in file order.
///
/// Duplicate keys are kept; the last occurrence wins once loaded into an index.
pub fn parse_properties(text: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    let mut lines = text.lines();

    while let Some(line) = lines.next() {
        let line = line.trim_start_matches(is_blank);
        if line.is_empty() || line.starts_with(['#', '!']) {
            continue;
        }

        let mut logical = line.to_string();
        while continues(&logical) {
            logical.pop();
            match lines.next() {
                Some(next) => logical.push_str(next.trim_start_matches(is_blank)),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        entries.push((unescape(key), unescape(value)));
    }

    entries
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

/// An odd number of trailing backslashes joins the next line.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let rest = line[key_end..].trim_start_matches(is_blank);
    let rest = rest
        .strip_prefix(['=', ':'])
        .unwrap_or(rest)
        .trim_start_matches(is_blank);
    (key, rest)
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let Some(unit) = parse_unit(&hex) else {
                    out.push_str("\\u");
                    out.push_str(&hex);
                    continue;
                };

                if (0xD800..0xDC00).contains(&unit) {
                    // high surrogate: combine with a following \uXXXX low half
                    let mut lookahead = chars.clone();
                    if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
                        let low_hex: String = lookahead.by_ref().take(4).collect();
                        if let Some(low) =
                            parse_unit(&low_hex).filter(|u| (0xDC00..0xE000).contains(u))
                        {
                            let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                            out.extend(char::from_u32(combined));
                            chars = lookahead;
                            continue;
                        }
                    }
                    out.push(char::REPLACEMENT_CHARACTER);
                } else {
                    out.push(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}

fn parse_unit(hex: &str) -> Option<u32> {
    if hex.len() != 4 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<(String, String)> {
        parse_properties(text)
    }

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn separators() {
        let entries = parse("a=1\nb: 2\nc 3\n  d  =  4\ne\n");
        assert_eq!(
            entries,
            vec![
                pair("a", "1"),
                pair("b", "2"),
                pair("c", "3"),
                pair("d", "4"),
                pair("e", ""),
            ]
        );
    }

    #[test]
    fn comments_and_blank_lines() {
        let entries = parse("# comment\n   ! also a comment\n\n\t\nkey=value # not a comment\n");
        assert_eq!(entries, vec![pair("key", "value # not a comment")]);
    }

    #[test]
    fn continuation_lines() {
        let text = "group.names.probable.bugs=Probable \\\n    bugs\nnext=\\\\\n";
        let entries = parse(text);
        assert_eq!(
            entries,
            vec![pair("group.names.probable.bugs", "Probable bugs"), pair("next", "\\")]
        );
    }

    #[test]
    fn comment_does_not_continue() {
        let entries = parse("# trailing \\\nkey=value\n");
        assert_eq!(entries, vec![pair("key", "value")]);
    }

    #[test]
    fn escapes() {
        let entries = parse(
            "tab=a\\tb\nnl=line\\nbreak\nuni=caf\\u00e9\nkey\\ with\\=space=v\\:x\nsmile=\\uD83D\\uDE00\n",
        );
        assert_eq!(
            entries,
            vec![
                pair("tab", "a\tb"),
                pair("nl", "line\nbreak"),
                pair("uni", "café"),
                pair("key with=space", "v:x"),
                pair("smile", "😀"),
            ]
        );
    }

    #[test]
    fn bundle_quotes_survive_parsing() {
        let entries = parse("docker.add=Use ''COPY'' instead of ''ADD''\n");
        assert_eq!(entries[0].1, "Use ''COPY'' instead of ''ADD''");
    }

    #[test]
    fn crlf_line_endings() {
        let entries = parse("a=1\r\nb=2\r\n");
        assert_eq!(entries, vec![pair("a", "1"), pair("b", "2")]);
    }

    #[test]
    fn decode_falls_back_to_latin1() {
        assert_eq!(decode("caf\u{e9}".as_bytes()), "café");
        assert_eq!(decode(b"caf\xe9"), "café");
        assert_eq!(decode(b"\xEF\xBB\xBFkey=v"), "key=v");
    }
}
