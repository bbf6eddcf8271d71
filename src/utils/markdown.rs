//! Markdown rendering for blog posts.
//!
//! Bodies are rendered with GitHub-flavoured extensions. Every heading gets an
//! `id` derived from its text and its content is wrapped in a self-link, so
//! the table of contents and shared links can point straight at a section.

use std::sync::LazyLock;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html::push_html};
use regex::Regex;
use serde::Serialize;

use super::text::slugify;

static HEADING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(##+)[ \t]+(.*)$").expect("valid regex"));

/// A table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub id: String,
    pub title: String,
    pub level: u8,
}

/// Renders a markdown body to HTML.
pub fn render_markdown(content: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;

    let parser = Parser::new_ext(content, options);
    let events = link_headings(parser);

    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, events.into_iter());
    html
}

/// Collects `##` and `###` headings from the raw markdown source.
pub fn extract_headings(source: &str) -> Vec<Heading> {
    HEADING_LINE
        .captures_iter(source)
        .filter_map(|caps| {
            let level = caps[1].len().min(6) as u8;
            if !(2..=3).contains(&level) {
                return None;
            }
            let title = caps[2].trim().to_string();
            Some(Heading {
                id: slugify(&title),
                title,
                level,
            })
        })
        .collect()
}

fn level_number(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Rewrites heading events into `<hN id="slug"><a href="#slug">…</a></hN>`.
fn link_headings<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events: Vec<Event<'a>> = Vec::new();
    let mut in_heading: Option<HeadingLevel> = None;
    let mut heading_text = String::new();
    let mut heading_events: Vec<Event<'a>> = Vec::new();

    for event in parser {
        match &event {
            Event::Start(Tag::Heading { level, .. }) => {
                in_heading = Some(*level);
                heading_text.clear();
                heading_events.clear();
                heading_events.push(event);
            }
            Event::End(TagEnd::Heading(level)) if in_heading == Some(*level) => {
                let slug = slugify(&heading_text);
                let n = level_number(*level);

                if slug.is_empty() {
                    events.append(&mut heading_events);
                    events.push(event);
                } else {
                    events.push(Event::Html(
                        format!(r##"<h{n} id="{slug}"><a class="no-underline" href="#{slug}">"##)
                            .into(),
                    ));
                    events.extend(heading_events.drain(..).skip(1));
                    events.push(Event::Html(format!("</a></h{n}>\n").into()));
                }
                in_heading = None;
            }
            Event::Text(text) | Event::Code(text) if in_heading.is_some() => {
                heading_text.push_str(text);
                heading_events.push(event);
            }
            _ if in_heading.is_some() => heading_events.push(event),
            _ => events.push(event),
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_is_self_linked() {
        let html = render_markdown("## Why Speed Matters\n\nBody text.\n");
        assert!(
            html.contains(r##"<h2 id="why-speed-matters"><a class="no-underline" href="#why-speed-matters">Why Speed Matters</a></h2>"##),
            "got: {html}"
        );
        assert!(html.contains("<p>Body text.</p>"));
    }

    #[test]
    fn test_inline_code_in_heading() {
        let html = render_markdown("### Using `cargo`\n");
        assert!(html.contains(r#"<h3 id="using-cargo">"#), "got: {html}");
        assert!(html.contains("<code>cargo</code>"));
    }

    #[test]
    fn test_gfm_extensions() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~\n\n- [x] done\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("checkbox"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let html = render_markdown("<div class=\"callout\">Note</div>\n");
        assert!(html.contains("<div class=\"callout\">Note</div>"));
    }

    #[test]
    fn test_extract_headings_levels() {
        let source = "# Title\n\n## First Part\n\n### Detail\n\n#### Too deep\n\n## Second Part\n";
        let headings = extract_headings(source);
        assert_eq!(
            headings,
            vec![
                Heading { id: "first-part".into(), title: "First Part".into(), level: 2 },
                Heading { id: "detail".into(), title: "Detail".into(), level: 3 },
                Heading { id: "second-part".into(), title: "Second Part".into(), level: 2 },
            ]
        );
    }

    #[test]
    fn test_extract_headings_ignores_inline_hashes() {
        assert!(extract_headings("Use ## inside a sentence.\n").is_empty());
    }
}
