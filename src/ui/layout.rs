//! Page chrome shared by every view
//!
//! HTML document shell, navbar, and the small building blocks (error banner,
//! skeleton grid) that several pages reuse.

use std::fmt::Write;

use crate::ui::Theme;

/// Number of placeholder cards shown while a list is loading
pub const SKELETON_CARDS: usize = 8;

/// Escape text for use in HTML content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the document shell with navbar
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | CineMax</title>
<style>{css}</style>
</head>
<body>
{nav}
{body}
</body>
</html>
"#,
        title = escape(title),
        css = Theme::stylesheet(),
        nav = navbar(),
        body = body,
    )
}

/// Top navigation: brand plus Home and Search links
pub fn navbar() -> String {
    let mut links = String::new();
    for (label, href) in [("Home", "/"), ("Search", "/search")] {
        let _ = write!(links, r#"<a href="{}">{}</a>"#, href, label);
    }
    format!(
        r#"<nav class="navbar"><div class="container"><a class="brand" href="/">🎬 CineMax</a><div class="nav-links">{}</div></div></nav>"#,
        links
    )
}

/// Inline error message box
pub fn error_banner(message: &str) -> String {
    format!(
        r#"<div class="error-banner"><p>{}</p></div>"#,
        escape(message)
    )
}

/// Grid of pulsing placeholder cards
pub fn skeleton_grid() -> String {
    let mut html = String::from(r#"<div class="grid" aria-busy="true">"#);
    for _ in 0..SKELETON_CARDS {
        html.push_str(
            r#"<div class="skeleton"><div class="block"></div><div class="line" style="width:75%"></div><div class="line" style="width:50%"></div></div>"#,
        );
    }
    html.push_str("</div>");
    html
}

/// Section heading with the accent bar underneath
pub fn section_heading(title: &str) -> String {
    format!(
        r#"<h2>{}</h2><div class="bar"></div>"#,
        escape(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape("Amélie"), "Amélie");
    }

    #[test]
    fn test_page_shell() {
        let html = page("Home", "<main>hi</main>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Home | CineMax</title>"));
        assert!(html.contains("<main>hi</main>"));
        assert!(html.contains(r#"<a href="/search">Search</a>"#));
    }

    #[test]
    fn test_skeleton_grid_count() {
        let html = skeleton_grid();
        assert_eq!(html.matches(r#"class="skeleton""#).count(), SKELETON_CARDS);
    }

    #[test]
    fn test_error_banner_escapes() {
        assert!(error_banner("<b>").contains("&lt;b&gt;"));
    }
}
