//! Pre-filled share URLs and press contact links.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::article::Article;
use crate::site;

/// Characters `encodeURIComponent` escapes: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URL component.
#[must_use]
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SharePlatform {
    X,
    LinkedIn,
    Email,
}

impl SharePlatform {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::LinkedIn => "LinkedIn",
            Self::Email => "Email",
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::LinkedIn => "linkedin",
            Self::Email => "email",
        }
    }

    /// Accessible name of the share link.
    #[must_use]
    pub fn action_label(self) -> &'static str {
        match self {
            Self::X => "Share on X",
            Self::LinkedIn => "Share on LinkedIn",
            Self::Email => "Share by email",
        }
    }

    /// Email opens the mail client in place; the others open a new tab.
    #[must_use]
    pub fn opens_new_tab(self) -> bool {
        !matches!(self, Self::Email)
    }
}

/// Share targets for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareLinks {
    pub x: String,
    pub linkedin: String,
    pub email: String,
}

impl ShareLinks {
    /// Build share URLs for `title` at `url`.
    #[must_use]
    pub fn new(title: &str, url: &str) -> Self {
        let title = encode_component(title);
        let url = encode_component(url);
        Self {
            x: format!("https://twitter.com/intent/tweet?text={title}&url={url}"),
            linkedin: format!("https://www.linkedin.com/sharing/share-offsite/?url={url}"),
            email: format!("mailto:?subject={title}&body={url}"),
        }
    }

    /// Share URLs pointing at the article's canonical page.
    #[must_use]
    pub fn for_article(article: &Article) -> Self {
        Self::new(article.title, &site::article_url(article.slug))
    }

    /// Targets in display order.
    #[must_use]
    pub fn entries(&self) -> [(SharePlatform, &str); 3] {
        [
            (SharePlatform::X, self.x.as_str()),
            (SharePlatform::LinkedIn, self.linkedin.as_str()),
            (SharePlatform::Email, self.email.as_str()),
        ]
    }
}

/// `mailto:` and `tel:` links for the press contact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactLinks {
    pub email_label: &'static str,
    pub email_href: String,
    pub phone_label: &'static str,
    pub phone_href: String,
}

impl ContactLinks {
    #[must_use]
    pub fn press() -> Self {
        Self::new(site::PRESS_EMAIL, site::PRESS_PHONE)
    }

    #[must_use]
    pub fn new(email: &'static str, phone: &'static str) -> Self {
        Self {
            email_label: email,
            email_href: format!("mailto:{email}"),
            phone_label: phone,
            phone_href: format!("tel:{}", dial_string(phone)),
        }
    }
}

/// Strip a display phone number down to what a dialer accepts.
fn dial_string(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect()
}
