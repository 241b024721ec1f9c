//! Markdown to HTML for bot replies.
//!
//! Answers come from a language model, so raw HTML is not trusted: a fragment
//! survives only when every tag in it is a bare, attribute-free tag from
//! [`ALLOWED_TAGS`]. Link and image destinations keep only relative URLs and
//! the [`ALLOWED_SCHEMES`]. Tables get class hooks so the stylesheet can
//! target them.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const ALLOWED_TAGS: &[&str] = &[
    "b", "br", "code", "em", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "i", "li", "ol", "p", "pre", "strong", "sub",
    "sup", "table", "tbody", "td", "th", "thead", "tr", "u", "ul",
];

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Render `markdown` to an HTML string suitable for `inner_html`.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(raw) => allowed_fragment(&raw).then_some(Event::Html(raw)),
        Event::InlineHtml(raw) => allowed_fragment(&raw).then_some(Event::InlineHtml(raw)),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url, "#"),
            title,
            id,
        })),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url, ""),
            title,
            id,
        })),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    add_table_classes(&out)
}

fn safe_url<'a>(dest: CowStr<'a>, fallback: &'static str) -> CowStr<'a> {
    if allowed_url(&dest) { dest } else { CowStr::Borrowed(fallback) }
}

/// Relative URLs pass; absolute ones need an allowlisted scheme.
fn allowed_url(url: &str) -> bool {
    let url = url.trim();
    match url.find([':', '/', '?', '#']) {
        Some(at) if url[at..].starts_with(':') => {
            let scheme: String = url[..at]
                .chars()
                .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
                .collect();
            ALLOWED_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str())
        }
        _ => true,
    }
}

fn allowed_fragment(fragment: &str) -> bool {
    let mut rest = fragment;
    let mut saw_tag = false;
    while let Some(start) = rest.find('<') {
        let Some(len) = rest[start..].find('>') else {
            return false;
        };
        if !allowed_tag(&rest[start + 1..start + len]) {
            return false;
        }
        saw_tag = true;
        rest = &rest[start + len + 1..];
    }
    saw_tag || !fragment.contains('>')
}

fn allowed_tag(inner: &str) -> bool {
    let name = inner.trim().trim_start_matches('/').trim_end_matches('/').trim();
    !name.is_empty()
        && !name.contains(char::is_whitespace)
        && ALLOWED_TAGS.contains(&name.to_ascii_lowercase().as_str())
}

fn add_table_classes(html: &str) -> String {
    html.replace("<table>", r#"<table class="markdown-table">"#)
        .replace("<th>", r#"<th class="markdown-th">"#)
        .replace("<th style=", r#"<th class="markdown-th" style="#)
        .replace("<td>", r#"<td class="markdown-td">"#)
        .replace("<td style=", r#"<td class="markdown-td" style="#)
}
