//! Low-level HTML text helpers for the server-rendered sources.
//!
//! Deliberately naive: the adapters target known page structures, so a full
//! HTML parser buys nothing. Tag stripping, entity decoding, whitespace
//! collapsing, and marker-based block splitting cover what the sites need.

/// Remove all `<...>` tags, then collapse whitespace.
pub fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for ch in raw.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    collapse_ws(&out)
}

/// Collapse whitespace runs into a single space and trim.
pub fn collapse_ws(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_space = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Decode HTML entities: numeric (`&#231;`, `&#xE7;`) plus the named set the
/// scraped sites actually emit (ASCII basics and the Latin-1 letters in
/// Azerbaijani business names).
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail.find(';') {
            // Entities are short; anything longer is literal text.
            Some(end) if end <= 10 => {
                let entity = &tail[1..end];
                match decode_entity(entity) {
                    Some(ch) => out.push(ch),
                    None => out.push_str(&tail[..end + 1]),
                }
                rest = &tail[end + 1..];
            }
            _ => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    if let Some(num) = entity.strip_prefix('#') {
        let code = if let Some(hex) = num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            num.parse::<u32>().ok()?
        };
        return char::from_u32(code);
    }
    let ch = match entity {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ccedil" => 'ç',
        "Ccedil" => 'Ç',
        "ouml" => 'ö',
        "Ouml" => 'Ö',
        "uuml" => 'ü',
        "Uuml" => 'Ü',
        "Imath" | "imath" => 'ı',
        _ => return None,
    };
    Some(ch)
}

/// Strip tags, decode entities, and normalize non-breaking spaces: the full
/// cell-text cleanup for table-ish markup.
pub fn text_content(raw: &str) -> String {
    collapse_ws(&unescape(&strip_tags(raw)).replace('\u{a0}', " "))
}

/// Split `html` into blocks, each starting at an occurrence of `marker`.
/// Text before the first occurrence is discarded.
pub fn split_blocks<'a>(html: &'a str, marker: &str) -> Vec<&'a str> {
    let starts: Vec<usize> = html.match_indices(marker).map(|(i, _)| i).collect();
    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| match starts.get(n + 1) {
            Some(&next) => &html[start..next],
            None => &html[start..],
        })
        .collect()
}
