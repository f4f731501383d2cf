//! Tag stripping and allow-list filtering for submitted markup.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::URL_SCHEME_RE;

/// Any tag-like run: `<name…>`, `</name…>`, `<!…>`, `<?…>`. An unterminated
/// tag runs to the end of the input.
static STRIP_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?(?:-->|\z)|<[!?][^>]*(?:>|\z)|<(/?)([a-zA-Z][a-zA-Z0-9\-]*)[^<>]*(?:>|\z)")
        .unwrap()
});

/// A complete opening or closing tag with no nested angle brackets.
static MARKUP_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)([^<>]*)>").unwrap());

/// One attribute inside a tag body: bare, double-quoted, single-quoted or
/// unquoted value.
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z_:][a-zA-Z0-9_:.\-]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=]+)))?"#)
        .unwrap()
});

/// Permitted tags and, per tag, permitted attributes.
const ALLOWED_MARKUP: &[(&str, &[&str])] = &[
    ("s", &[]),
    ("br", &[]),
    ("em", &[]),
    ("i", &[]),
    ("strong", &[]),
    ("b", &[]),
    ("a", &["href", "title", "class", "id", "style"]),
    (
        "form",
        &["id", "class", "action", "method", "autocomplete", "style"],
    ),
    (
        "input",
        &[
            "type",
            "name",
            "class",
            "id",
            "value",
            "placeholder",
            "tabindex",
            "style",
        ],
    ),
    (
        "img",
        &["src", "alt", "class", "id", "style", "height", "width"],
    ),
    ("span", &["class", "id", "style"]),
    ("p", &["class", "id", "style"]),
    ("div", &["class", "id", "style"]),
    ("blockquote", &["cite", "class", "id", "style"]),
];

/// Attributes whose value is a URL and must carry a permitted scheme.
const URL_ATTRIBUTES: &[&str] = &["href", "src", "action", "cite"];

/// Schemes permitted inside footer markup links.
const MARKUP_SCHEMES: &[&str] = &["http", "https", "mailto", "ftp", "tel"];

/// Attribute allow-list for `tag` (lowercase), or `None` if the tag is not
/// permitted at all.
pub fn allowed_attributes(tag: &str) -> Option<&'static [&'static str]> {
    ALLOWED_MARKUP
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, attrs)| *attrs)
}

/// Undo backslash escaping: `\x` becomes `x`, `\\` becomes `\`.
pub fn strip_slashes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Remove tags and comments until none are left.
///
/// With `keep_anchors`, complete `<a …>` and `</a>` tags are left in place.
/// Removal repeats so that fragments glued together by a removed tag
/// (`<scr<b>ipt>`) are removed too.
pub fn strip_tags(input: &str, keep_anchors: bool) -> String {
    let mut current = input.to_string();
    loop {
        let next = STRIP_TAG_RE
            .replace_all(&current, |caps: &Captures| {
                let whole = &caps[0];
                let is_anchor = caps
                    .get(2)
                    .is_some_and(|name| name.as_str().eq_ignore_ascii_case("a"));
                if keep_anchors && is_anchor && whole.ends_with('>') {
                    whole.to_string()
                } else {
                    String::new()
                }
            })
            .into_owned();
        if next == current {
            return next;
        }
        current = next;
    }
}

/// Keep only allow-listed tags and attributes; drop everything else.
///
/// Disallowed tags are removed (their text content stays). Allowed tags are
/// rebuilt in a canonical form: lowercase name, permitted attributes only,
/// double-quoted values. Stray `<` and `>` in text become `&lt;` / `&gt;`, so
/// running the filter on its own output changes nothing.
pub fn filter_allowed_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for caps in MARKUP_TAG_RE.captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_text(&mut out, &input[last..whole.start()]);
        last = whole.end();

        let name = caps[2].to_ascii_lowercase();
        let Some(allowed) = allowed_attributes(&name) else {
            continue;
        };

        if caps[1].is_empty() {
            out.push_str(&rebuild_open_tag(&name, &caps[3], allowed));
        } else {
            out.push_str("</");
            out.push_str(&name);
            out.push('>');
        }
    }

    push_text(&mut out, &input[last..]);
    out
}

fn push_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn rebuild_open_tag(name: &str, body: &str, allowed: &[&str]) -> String {
    let mut tag = format!("<{name}");

    for attr in ATTR_RE.captures_iter(body) {
        let attr_name = attr[1].to_ascii_lowercase();
        if !allowed.contains(&attr_name.as_str()) {
            continue;
        }

        let value = attr.get(2).or_else(|| attr.get(3)).or_else(|| attr.get(4));
        match value {
            Some(value) => {
                let value = value.as_str();
                if URL_ATTRIBUTES.contains(&attr_name.as_str()) && !markup_url_allowed(value) {
                    continue;
                }
                tag.push(' ');
                tag.push_str(&attr_name);
                tag.push_str("=\"");
                tag.push_str(&value.replace('"', "&quot;"));
                tag.push('"');
            }
            None => {
                tag.push(' ');
                tag.push_str(&attr_name);
            }
        }
    }

    if body.trim_end().ends_with('/') {
        tag.push_str(" /");
    }
    tag.push('>');
    tag
}

/// Relative URLs pass; absolute ones need a permitted scheme. Entity-encoded
/// colons are refused outright since they only serve to disguise a scheme.
fn markup_url_allowed(value: &str) -> bool {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    if normalized.contains("&#") || normalized.contains("&colon") {
        return false;
    }

    match URL_SCHEME_RE.captures(&normalized) {
        Some(caps) => MARKUP_SCHEMES.contains(&&caps[1]),
        None => true,
    }
}
