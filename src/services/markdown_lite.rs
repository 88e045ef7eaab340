//! Inline markdown subset used by the code-of-conduct text.
//!
//! Supports `**bold**`, `*italic*` and line breaks, nothing else. The input is
//! HTML-escaped first, so the result can be embedded without further escaping.
//! Run it once per render: feeding its own output back in is not supported.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BOLD: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\*(.*?)\*").unwrap();
}

pub fn render(text: &str) -> String {
    let escaped = html_escape(text);
    // Bold first, otherwise the italic pattern eats half of every `**`.
    let bold = BOLD.replace_all(&escaped, "<strong>$1</strong>");
    let italic = ITALIC.replace_all(&bold, "<em>$1</em>");
    italic.replace('\n', "<br>")
}

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

    #[test]
    fn bold_then_italic_in_order() {
        let html = render("**bold** and *italic*");
        assert_eq!(html, "<strong>bold</strong> and <em>italic</em>");
        assert!(!html.contains('*'));
        assert!(html.find("<strong>").unwrap() < html.find("<em>").unwrap());
    }

    #[test]
    fn line_breaks_become_br() {
        assert_eq!(render("a\n\nb"), "a<br><br>b");
    }

    #[test]
    fn matching_is_non_greedy() {
        assert_eq!(
            render("**one** x **two**"),
            "<strong>one</strong> x <strong>two</strong>"
        );
        assert_eq!(render("*a* *b*"), "<em>a</em> <em>b</em>");
    }

    #[test]
    fn emphasis_does_not_cross_lines() {
        assert_eq!(render("*open\nclose*"), "*open<br>close*");
    }

    #[test]
    fn unmatched_asterisk_is_left_alone() {
        assert_eq!(render("5 * 3"), "5 * 3");
    }

    #[test]
    fn escapes_html_in_input() {
        assert_eq!(
            render("<script>**x**</script>"),
            "&lt;script&gt;<strong>x</strong>&lt;/script&gt;"
        );
        assert_eq!(render("it's"), "it&#39;s");
    }

    #[test]
    fn bullet_list_text() {
        let html = render("include:\n\n• **Being open**: yes");
        assert_eq!(html, "include:<br><br>• <strong>Being open</strong>: yes");
    }
}
