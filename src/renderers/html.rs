//! HTML markup for rich-text hosts
//!
//! Turns highlight segments into escaped markup. Plain text is emitted as-is
//! (escaped); chord tokens are wrapped in a `<span>` carrying the configured
//! classes. Newlines are left alone: the host renders with `white-space: pre-wrap`.

use crate::models::config::EditorConfig;
use crate::renderers::highlight::Segment;

/// Render segments as HTML
pub fn render_html(segments: &[Segment], config: &EditorConfig) -> String {
    let mut out = String::new();

    for segment in segments {
        if !segment.is_chord {
            out.push_str(&html_escape(&segment.text));
            continue;
        }

        out.push_str("<span class=\"");
        out.push_str(&config.chord_class);
        if segment.is_active {
            out.push(' ');
            out.push_str(&config.active_class);
        }
        out.push_str("\">");
        out.push_str(&html_escape(&segment.text));
        out.push_str("</span>");
    }

    out
}

/// Escape special HTML characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::scan;
    use crate::renderers::highlight::render;

    #[test]
    fn test_render_html_wraps_chords() {
        let doc = "la (C) la";
        let html = render_html(&render(doc, &scan(doc), None), &EditorConfig::default());
        assert_eq!(html, "la <span class=\"chord\">(C)</span> la");
    }

    #[test]
    fn test_render_html_marks_active_chord() {
        let doc = "(G)x";
        let html = render_html(&render(doc, &scan(doc), Some(3)), &EditorConfig::default());
        assert_eq!(html, "<span class=\"chord chord-active\">(G)</span>x");
    }

    #[test]
    fn test_render_html_escapes_lyrics() {
        let doc = "<b>rock & roll</b> (E)";
        let html = render_html(&render(doc, &scan(doc), None), &EditorConfig::default());
        assert!(html.starts_with("&lt;b&gt;rock &amp; roll&lt;/b&gt; "));
    }

    #[test]
    fn test_render_html_custom_classes() {
        let config = EditorConfig {
            chord_class: "c".to_string(),
            active_class: "on".to_string(),
            ..Default::default()
        };
        let doc = "(D)";
        let html = render_html(&render(doc, &scan(doc), Some(1)), &config);
        assert_eq!(html, "<span class=\"c on\">(D)</span>");
    }
}
