//! Tests for SVG text escaping.

use super::*;

mod html_escape_tests {
    use super::*;

    #[test]
    fn escapes_ampersand() {
        assert_eq!(html_escape("C & C++"), "C &amp; C++");
    }

    #[test]
    fn escapes_angle_brackets() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("'single'"), "&#39;single&#39;");
    }

    #[test]
    fn escapes_multiple() {
        assert_eq!(
            html_escape("<a href=\"x\">&</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(html_escape("Jupyter Notebook"), "Jupyter Notebook");
    }
}
