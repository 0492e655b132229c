//! Minimal inline markdown to HTML.
//!
//! Rules run in a fixed order over the raw message text: fenced code,
//! inline code, bold, italic, headers, list items, then paragraph and
//! line breaks. Code is swapped out for placeholders before the other
//! rules run, so nothing inside a code block or span is rewritten.
//!
//! The output is not escaped and the transform is not idempotent. Feed it
//! raw text exactly once.

use regex::{Captures, Regex};
use std::sync::OnceLock;

const PRE_OPEN: &str = r#"<pre class="bg-gray-100 p-3 rounded text-sm overflow-x-auto my-3 border"><code class="text-gray-800">"#;
const PRE_CLOSE: &str = "</code></pre>";
const CODE_OPEN: &str =
    r#"<code class="bg-gray-100 px-2 py-1 rounded text-sm text-red-600 font-mono">"#;
const CODE_CLOSE: &str = "</code>";

const STRONG: &str = r#"<strong class="font-bold">${1}</strong>"#;
const EM: &str = r#"<em class="italic">${1}</em>"#;
const H1: &str = r#"<h1 class="text-xl font-bold mt-4 mb-3">${1}</h1>"#;
const H2: &str = r#"<h2 class="text-lg font-semibold mt-4 mb-3">${1}</h2>"#;
const H3: &str = r#"<h3 class="text-m font-semibold mt-4 mb-2">${1}</h3>"#;
const LI: &str = r#"<li class="ml-4 mb-1">${1}</li>"#;
const LI_NUMBERED: &str = r#"<li class="ml-4 mb-1 list-decimal">${1}</li>"#;

const PARAGRAPH_BREAK: &str = r#"</p><p class="mb-3">"#;
const LINE_BREAK: &str = "<br>";

// Private-use code points delimit code placeholders. They are stripped
// from the input so only stashed slots carry them.
const SLOT_OPEN: char = '\u{E000}';
const SLOT_CLOSE: char = '\u{E001}';

struct Rules {
    fenced: Regex,
    inline_code: Regex,
    bold_star: Regex,
    bold_underscore: Regex,
    italic_star: Regex,
    italic_underscore: Regex,
    h3: Regex,
    h2: Regex,
    h1: Regex,
    bullet_star: Regex,
    bullet_dash: Regex,
    numbered: Regex,
    slot: Regex,
}

impl Rules {
    fn new() -> Self {
        let re = |pattern: &str| Regex::new(pattern).expect("markdown pattern is valid");
        Self {
            fenced: re(r"(?s)```(.*?)```"),
            inline_code: re("`([^`\u{E000}\u{E001}]+)`"),
            bold_star: re(r"\*\*(.*?)\*\*"),
            bold_underscore: re(r"__(.*?)__"),
            italic_star: re(r"\*(.*?)\*"),
            italic_underscore: re(r"_(.*?)_"),
            h3: re(r"(?mR)^### (.*)$"),
            h2: re(r"(?mR)^## (.*)$"),
            h1: re(r"(?mR)^# (.*)$"),
            bullet_star: re(r"(?mR)^\* (.*)$"),
            bullet_dash: re(r"(?mR)^- (.*)$"),
            numbered: re(r"(?mR)^\d+\. (.*)$"),
            slot: re("\u{E000}(\\d+)\u{E001}"),
        }
    }
}

fn rules() -> &'static Rules {
    static RULES: OnceLock<Rules> = OnceLock::new();
    RULES.get_or_init(Rules::new)
}

/// Convert a raw message body to HTML markup
pub fn format_text(text: &str) -> String {
    let rules = rules();
    let mut slots: Vec<String> = Vec::new();

    let text = text.replace([SLOT_OPEN, SLOT_CLOSE], "");
    let text = stash(&rules.fenced, &text, &mut slots, PRE_OPEN, PRE_CLOSE);
    let text = stash(&rules.inline_code, &text, &mut slots, CODE_OPEN, CODE_CLOSE);

    let text = rules.bold_star.replace_all(&text, STRONG);
    let text = rules.bold_underscore.replace_all(&text, STRONG);

    let text = rules.italic_star.replace_all(&text, EM);
    let text = rules.italic_underscore.replace_all(&text, EM);

    let text = rules.h3.replace_all(&text, H3);
    let text = rules.h2.replace_all(&text, H2);
    let text = rules.h1.replace_all(&text, H1);

    let text = rules.bullet_star.replace_all(&text, LI);
    let text = rules.bullet_dash.replace_all(&text, LI);

    let text = rules.numbered.replace_all(&text, LI_NUMBERED);

    let text = text
        .replace("\n\n", PARAGRAPH_BREAK)
        .replace('\n', LINE_BREAK);

    restore(&rules.slot, &text, &slots)
}

/// Render a message body as the paragraph block inserted into the list
pub fn render_message_html(text: &str) -> String {
    format!(r#"<p class="mb-2">{}</p>"#, format_text(text))
}

/// Replace every match with a placeholder, keeping the wrapped HTML aside
fn stash(re: &Regex, text: &str, slots: &mut Vec<String>, open: &str, close: &str) -> String {
    re.replace_all(text, |caps: &Captures| {
        let index = slots.len();
        let inner = caps.get(1).map_or("", |m| m.as_str());
        slots.push(format!("{}{}{}", open, inner, close));
        format!("{}{}{}", SLOT_OPEN, index, SLOT_CLOSE)
    })
    .into_owned()
}

fn restore(re: &Regex, text: &str, slots: &[String]) -> String {
    if slots.is_empty() {
        return text.to_string();
    }
    re.replace_all(text, |caps: &Captures| {
        caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|index| slots.get(index))
            .cloned()
            .unwrap_or_else(|| caps[0].to_string())
    })
    .into_owned()
}
