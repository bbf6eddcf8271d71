//! Splitting YAML front matter from a markdown document.

/// Splits `---\n<yaml>\n---\n<body>` into `(yaml, body)`.
///
/// Documents without a leading `---` fence, or with an unterminated one, have
/// no front matter and are returned whole as the body.
pub fn split_front_matter(content: &str) -> (&str, &str) {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();
    let Some(after) = trimmed.strip_prefix("---") else {
        return ("", content);
    };

    match after.find("\n---") {
        Some(end) => {
            let yaml = after[..end].trim();
            let rest = &after[end + 4..];
            let body = rest.split_once('\n').map_or("", |(_, body)| body);
            (yaml, body)
        }
        None => ("", content),
    }
}
