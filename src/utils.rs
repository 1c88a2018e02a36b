/// Extract clean text content from HTML
pub fn strip_html_tags(html: &str) -> String {
    html.chars()
        .fold((String::new(), false), |(mut text, in_tag), c| match c {
            '<' => (text, true),
            '>' => (text, false),
            _ if !in_tag => {
                text.push(c);
                (text, in_tag)
            }
            _ => (text, in_tag),
        })
        .0
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate text to at most `max_chars` characters, on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
