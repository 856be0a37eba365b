//! Name folding and text-window helpers
//!
//! All offsets are byte offsets into UTF-8 text; window sizes count chars so
//! Devanagari and CJK source text never splits inside a code point.

/// Case-folded lookup key for herb and substance names
pub fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Push `item` unless an identical string is already present
pub fn push_unique(list: &mut Vec<String>, item: &str) -> bool {
    if list.iter().any(|existing| existing == item) {
        return false;
    }
    list.push(item.to_string());
    true
}

/// Union `other` into `list`, keeping first-seen order
pub fn extend_unique<'a, I>(list: &mut Vec<String>, other: I)
where
    I: IntoIterator<Item = &'a String>,
{
    for item in other {
        push_unique(list, item);
    }
}

/// First `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Truncate to at most `max_chars`, backing off to the last space
///
/// Falls back to a hard cut when the prefix contains no space.
pub fn truncate_at_word_boundary(text: &str, max_chars: usize) -> &str {
    let truncated = truncate_chars(text, max_chars);
    if truncated.len() == text.len() {
        return text;
    }
    match truncated.rfind(' ') {
        Some(idx) if idx > 0 => &truncated[..idx],
        _ => truncated,
    }
}

/// Byte offset `chars` characters before `from` (clamped to 0)
fn offset_back(text: &str, from: usize, chars: usize) -> usize {
    if chars == 0 {
        return from;
    }
    text[..from]
        .char_indices()
        .rev()
        .nth(chars - 1)
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Byte offset `chars` characters after `from` (clamped to text end)
fn offset_forward(text: &str, from: usize, chars: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(chars)
        .map(|(idx, _)| from + idx)
        .unwrap_or(text.len())
}

/// Join the text surrounding each `(start, end)` span, `window` chars each side
///
/// Spans must lie on char boundaries (regex match offsets do).
pub fn context_windows<I>(text: &str, spans: I, window: usize) -> String
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let contexts: Vec<&str> = spans
        .into_iter()
        .map(|(start, end)| {
            let lo = offset_back(text, start, window);
            let hi = offset_forward(text, end, window);
            &text[lo..hi]
        })
        .collect();

    contexts.join(" ... ")
}
