//! Canned business responses.
//!
//! Link targets come from configuration and are attribute-escaped; the
//! surrounding markup is fixed.

use smbchat_types::config::LinkConfig;

use super::html::{escape_attr, escape_text, AnswerHtml};

const PARAGRAPH_BREAK: &str = "<br><br>";

fn anchor(href: &str, text: &str) -> String {
    format!(
        "<a href='{}' target='_blank'>{}</a>",
        escape_attr(href),
        escape_text(text)
    )
}

fn mailto(email: &str) -> String {
    format!(
        "<a href='mailto:{}'>{}</a>",
        escape_attr(email),
        escape_text(email)
    )
}

/// The engine had no specific answer.
pub(super) fn no_information(links: &LinkConfig) -> AnswerHtml {
    AnswerHtml::new().trusted(format!(
        "I apologize, but I don't have access to specific information at the moment. \
         You can find more information or get in touch with us by visiting our {} page \
         on our website. Is there anything else I can assist you with?",
        anchor(&links.contact_url, "Contact Us")
    ))
}

/// Pricing questions are always routed to a person.
pub(super) fn pricing_policy(links: &LinkConfig) -> AnswerHtml {
    AnswerHtml::new().trusted(format!(
        "Our pricing is tailored to the scope of each project, so we don't publish fixed rates. \
         For a personalized quote, please reach out through our {} page and our team will \
         get back to you.",
        anchor(&links.contact_url, "Contact Us")
    ))
}

/// Raw answer followed by a pointer to the services page.
pub(super) fn with_services_link(answer: &str, links: &LinkConfig) -> AnswerHtml {
    AnswerHtml::new().raw(answer).trusted(format!(
        "{PARAGRAPH_BREAK}If you'd like to learn more about our offerings, you can visit our {} \
         page on our website.",
        anchor(&links.services_url, "services")
    ))
}

/// Raw answer followed by the email address and social profiles.
pub(super) fn with_social_links(answer: &str, label: &str, links: &LinkConfig) -> AnswerHtml {
    AnswerHtml::new()
        .raw(answer)
        .trusted(PARAGRAPH_BREAK)
        .raw(format!("{label}: "))
        .trusted(format!(
            "You can connect with us by Email at: {} or through our various social media \
             platforms. Find us on {}, {}, and {} for updates and news.",
            mailto(&links.email),
            anchor(&links.facebook_url, "Facebook"),
            anchor(&links.instagram_url, "Instagram"),
            anchor(&links.youtube_url, "Youtube"),
        ))
}

/// Short pointer to the support mailbox.
pub(super) fn email_contact(links: &LinkConfig) -> AnswerHtml {
    AnswerHtml::new().trusted(format!(
        "You can reach out to us via email at: {}.",
        mailto(&links.email)
    ))
}

pub(super) fn farewell() -> AnswerHtml {
    AnswerHtml::new().trusted("Thank you for chatting with us. Goodbye!")
}
