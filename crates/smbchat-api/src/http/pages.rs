//! HTML pages and static assets embedded at compile time.
//!
//! Templates use `{{name}}` placeholders. Values are substituted in a single
//! pass and are never re-scanned, so a visitor typing `{{error}}` into the
//! name field gets it back as literal text.

use smbchat_core::classifier::html::{escape_attr, escape_text};

const INFO_FORM: &str = include_str!("../../assets/info_form.html");
const CHAT_INTERFACE: &str = include_str!("../../assets/chat_interface.html");
pub const SCRIPT_JS: &str = include_str!("../../assets/script.js");
pub const STYLE_CSS: &str = include_str!("../../assets/style.css");

/// Contact-info form, optionally with an error banner and the previous input.
pub fn info_form(bot_label: &str, error: Option<&str>, name: &str, email: &str) -> String {
    let error = error
        .map(|msg| format!("<p class=\"form-error\" role=\"alert\">{}</p>", escape_text(msg)))
        .unwrap_or_default();

    fill(
        INFO_FORM,
        &[
            ("bot_label", &escape_attr(bot_label)),
            ("error", &error),
            ("customer_name", &escape_attr(name)),
            ("user_email", &escape_attr(email)),
        ],
    )
}

/// Chat view for a visitor whose info has been collected.
pub fn chat_interface(bot_label: &str, customer_name: &str) -> String {
    fill(
        CHAT_INTERFACE,
        &[
            ("bot_label", &escape_attr(bot_label)),
            ("customer_name", &escape_attr(customer_name)),
        ],
    )
}

fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}
