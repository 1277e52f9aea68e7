//! Plain-text and HTML display conversions.

/// Replace every line break with `<br>`.
///
/// `\r\n`, `\r` and `\n` each count as one break; every other character is
/// kept as is.
///
/// # Examples
/// ```
/// use client::formatting::nl2br;
///
/// assert_eq!(nl2br("a\nb\r\nc"), "a<br>b<br>c");
/// ```
#[must_use]
pub fn nl2br(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                output.push_str("<br>");
            }
            '\n' => output.push_str("<br>"),
            other => output.push(other),
        }
    }
    output
}

/// Collapse paragraphs into one block separated by `<br />`.
///
/// Adjacent paragraph boundaries (`</p><p>`) become `<br />`; any other
/// `<p>` or `</p>` tag is removed.
#[must_use]
pub fn flatten_html_paragraphs(html: &str) -> String {
    html.replace("</p><p>", "<br />")
        .replace("<p>", "")
        .replace("</p>", "")
}

/// Text content of an HTML fragment.
///
/// Tags are dropped and the five predefined XML entities are decoded.
/// `<br>` tags and paragraph ends become newlines.
#[must_use]
pub fn html_to_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        text.push_str(&rest[..start]);
        let Some(end) = rest[start..].find('>') else {
            // Unterminated tag: keep the remainder as text.
            text.push_str(&rest[start..]);
            rest = "";
            break;
        };
        let tag = &rest[start + 1..start + end];
        if is_line_break(tag) && !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        rest = &rest[start + end + 1..];
    }
    text.push_str(rest);
    decode_entities(text.trim_end_matches('\n'))
}

fn is_line_break(tag: &str) -> bool {
    let name = tag
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or_default();
    name.eq_ignore_ascii_case("br") || (tag.starts_with('/') && name.eq_ignore_ascii_case("p"))
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unix("a\nb", "a<br>b")]
    #[case::windows("a\r\nb", "a<br>b")]
    #[case::classic_mac("a\rb", "a<br>b")]
    #[case::mixed("a\nb\r\nc", "a<br>b<br>c")]
    #[case::consecutive("a\n\nb", "a<br><br>b")]
    #[case::reversed_pair("a\n\rb", "a<br><br>b")]
    #[case::none("plain <b>text</b>", "plain <b>text</b>")]
    #[case::empty("", "")]
    fn converts_each_break_once(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(nl2br(input), expected);
    }

    #[test]
    fn nl2br_preserves_other_characters() {
        let input = "é\t☃\n>";
        let output = nl2br(input);
        assert_eq!(output.replace("<br>", "\n"), input);
    }

    #[rstest]
    #[case::two_paragraphs("<p>one</p><p>two</p>", "one<br />two")]
    #[case::three_paragraphs("<p>a</p><p>b</p><p>c</p>", "a<br />b<br />c")]
    #[case::single("<p>only</p>", "only")]
    #[case::no_paragraphs("text", "text")]
    fn flattens_paragraphs(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(flatten_html_paragraphs(input), expected);
    }

    #[rstest]
    #[case::tags("<p>Hello <b>world</b></p>", "Hello world")]
    #[case::entities("Tom &amp; Jerry &lt;3", "Tom & Jerry <3")]
    #[case::double_escaped("&amp;lt;", "&lt;")]
    #[case::breaks("one<br>two<br/>three", "one\ntwo\nthree")]
    #[case::paragraphs("<p>one</p><p>two</p>", "one\ntwo")]
    #[case::unterminated("a < b", "a < b")]
    fn extracts_text(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(html_to_text(input), expected);
    }
}
