//! Head markup rendering and injection.
//!
//! `render_head` turns a [`ResolvedHead`] into a `<title>` plus `<meta>`
//! fragment. `HeadInjector` writes that fragment into an existing document:
//!
//! - sets `lang` on `<html>` if not present
//! - inserts the fragment right after the `<head>` opening tag
//! - creates `<head>` after `<html>` when the document has none
//!
//! Existing head content is kept as-is.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::seo::ResolvedHead;
use crate::utils::html::{escape, escape_attr};

// ASCII-only case folding: regex is built without Unicode case tables.
// Quoted attribute values may contain `>`.
static HTML_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u:<html)(?:[ \t\r\n](?:[^>"']|"[^"]*"|'[^']*')*)?>"#).unwrap()
});
static HEAD_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u:<head)(?:[ \t\r\n](?:[^>"']|"[^"]*"|'[^']*')*)?>"#).unwrap()
});
/// One attribute: name, then an optional quoted or bare value.
static ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"[ \t\r\n/]([^ \t\r\n"'>/=]+)(?:[ \t\r\n]*=[ \t\r\n]*(?:"[^"]*"|'[^']*'|[^ \t\r\n"'>]+))?"#,
    )
    .unwrap()
});

/// Render `<title>` and every `<meta>` tag, one per line.
pub fn render_head(head: &ResolvedHead) -> String {
    let mut out = String::with_capacity(64 * (head.tags.len() + 1));
    let _ = writeln!(out, "<title>{}</title>", escape(&head.title));
    for tag in &head.tags {
        let _ = writeln!(
            out,
            r#"<meta {}="{}" content="{}">"#,
            tag.key.attr(),
            escape_attr(tag.key.value()),
            escape_attr(&tag.content)
        );
    }
    out
}

/// Injects a resolved head into an HTML document.
pub struct HeadInjector<'a> {
    head: &'a ResolvedHead,
}

impl<'a> HeadInjector<'a> {
    pub fn new(head: &'a ResolvedHead) -> Self {
        Self { head }
    }

    pub fn inject(&self, html: &str) -> String {
        let html = self.with_lang(html);
        let fragment = render_head(self.head);

        if let Some(head) = HEAD_OPEN.find(&html) {
            return splice(&html, head.end(), &format!("\n{fragment}"));
        }

        match HTML_OPEN.find(&html) {
            Some(root) => splice(&html, root.end(), &format!("\n<head>\n{fragment}</head>")),
            None => format!("{fragment}{html}"),
        }
    }

    /// Add `lang` to the `<html>` root unless it already has one.
    fn with_lang(&self, html: &str) -> String {
        match HTML_OPEN.find(html) {
            Some(root) if !has_attr(root.as_str(), "lang") => {
                // Insert before the closing `>`
                let at = root.end() - 1;
                splice(html, at, &format!(r#" lang="{}""#, self.head.lang))
            }
            _ => html.to_string(),
        }
    }
}

/// Whether an opening tag carries attribute `name`, with or without a value.
fn has_attr(tag: &str, name: &str) -> bool {
    ATTR.captures_iter(tag)
        .any(|caps| caps[1].eq_ignore_ascii_case(name))
}

fn splice(html: &str, at: usize, insert: &str) -> String {
    let mut out = String::with_capacity(html.len() + insert.len());
    out.push_str(&html[..at]);
    out.push_str(insert);
    out.push_str(&html[at..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteMetadata;
    use crate::seo::{PageInput, resolve};

    fn make_head() -> ResolvedHead {
        let site = SiteMetadata::new("https://example.com", "Example", "Default desc");
        resolve(&site, &PageInput::at("/blog/post").with_title("Tips & Tricks")).unwrap()
    }

    #[test]
    fn test_render_head() {
        let out = render_head(&make_head());
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "<title>Tips &amp; Tricks | Example</title>");
        assert_eq!(lines[1], r#"<meta name="description" content="Default desc">"#);
        assert_eq!(
            lines[3],
            r#"<meta property="og:url" content="https://example.com/blog/post">"#
        );
        assert_eq!(lines[8], r#"<meta name="twitter:card" content="summary">"#);
    }

    #[test]
    fn test_render_escapes_attributes() {
        let site = SiteMetadata::new("https://example.com", "Example", r#"say "hi""#);
        let head = resolve(&site, &PageInput::at("/")).unwrap();
        let out = render_head(&head);
        assert!(out.contains(r#"content="say &quot;hi&quot;""#));
    }

    #[test]
    fn test_inject_into_head() {
        let html = "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body></body>\n</html>";
        let out = HeadInjector::new(&make_head()).inject(html);

        assert!(out.contains(r#"<html lang="en">"#));
        let head_at = out.find("<head>").unwrap();
        let title_at = out.find("<title>").unwrap();
        let charset_at = out.find("<meta charset").unwrap();
        assert!(head_at < title_at && title_at < charset_at);
        assert!(out.ends_with("<body></body>\n</html>"));
    }

    #[test]
    fn test_inject_keeps_existing_lang() {
        let html = r#"<html LANG="da"><head></head></html>"#;
        let out = HeadInjector::new(&make_head()).inject(html);
        assert!(out.starts_with(r#"<html LANG="da"><head>"#));
        assert!(!out.contains(r#"lang="en""#));
    }

    #[test]
    fn test_inject_keeps_bare_lang() {
        let html = "<html lang><head></head></html>";
        let out = HeadInjector::new(&make_head()).inject(html);
        assert!(out.starts_with("<html lang><head>\n<title>"));
    }

    #[test]
    fn test_inject_lang_after_quoted_gt() {
        let html = r#"<html data-x="a>b" class='c>d'><head></head></html>"#;
        let out = HeadInjector::new(&make_head()).inject(html);
        assert!(out.starts_with(r#"<html data-x="a>b" class='c>d' lang="en"><head>"#));
    }

    #[test]
    fn test_lang_inside_value_is_not_an_attribute() {
        assert!(!has_attr(r#"<html data-x=" lang=da">"#, "lang"));
        assert!(has_attr(r#"<html data-x="y" Lang = 'da'>"#, "lang"));
        assert!(!has_attr("<html language=\"da\">", "lang"));
    }

    #[test]
    fn test_inject_ignores_header_element() {
        let html = "<html><body><header>nav</header></body></html>";
        let out = HeadInjector::new(&make_head()).inject(html);
        assert!(out.starts_with("<html lang=\"en\">\n<head>\n<title>"));
        assert!(out.contains("</head><body><header>nav</header>"));
    }

    #[test]
    fn test_inject_fragment_without_root() {
        let out = HeadInjector::new(&make_head()).inject("<p>hello</p>");
        assert!(out.starts_with("<title>"));
        assert!(out.ends_with("\n<p>hello</p>"));
    }

    #[test]
    fn test_inject_head_with_attributes() {
        let html = "<html lang=\"en\"><head prefix=\"og: https://ogp.me/ns#\"></head></html>";
        let out = HeadInjector::new(&make_head()).inject(html);
        assert!(out.contains("<head prefix=\"og: https://ogp.me/ns#\">\n<title>"));

        let html = "<html><head data-x=\"a>b\"></head></html>";
        let out = HeadInjector::new(&make_head()).inject(html);
        assert!(out.contains("<head data-x=\"a>b\">\n<title>"));
    }
}
