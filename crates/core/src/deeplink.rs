//! WhatsApp contact deep links.
//!
//! The contact form hands off to WhatsApp with a prefilled message built
//! from the form fields. The phone number is the site owner's, in
//! international format without the leading `+`.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum DeepLinkError {
    #[error("phone number {0:?} must be digits only, in international format")]
    InvalidPhone(String),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

/// Build a `wa.me` URL opening a chat with `phone`, prefilled with a
/// greeting from `name` and their `message`.
pub fn whatsapp(phone: &str, name: &str, message: &str) -> Result<Url, DeepLinkError> {
    if phone.is_empty() || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DeepLinkError::InvalidPhone(phone.to_owned()));
    }
    let text = format!("היי, אני {name}. {message}");
    let url = Url::parse_with_params(&format!("https://wa.me/{phone}"), [("text", text.as_str())])?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_wa_me_link() {
        let url = whatsapp("972501234567", "דנה", "אשמח להצעת מחיר")
            .unwrap_or_else(|e| panic!("valid phone rejected: {e}"));
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/972501234567");
        let text = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap_or_default();
        assert!(text.contains("דנה"));
        assert!(text.contains("אשמח להצעת מחיר"));
    }

    #[test]
    fn message_text_is_percent_encoded() {
        let url = whatsapp("972501234567", "Dana", "hello there")
            .unwrap_or_else(|e| panic!("valid phone rejected: {e}"));
        assert!(url.as_str().starts_with("https://wa.me/972501234567?text="));
        assert!(!url.query().unwrap_or_default().contains(' '));
    }

    #[test]
    fn rejects_formatted_numbers() {
        assert!(matches!(
            whatsapp("+972-50-1234567", "Dana", "hi"),
            Err(DeepLinkError::InvalidPhone(_))
        ));
        assert!(matches!(
            whatsapp("", "Dana", "hi"),
            Err(DeepLinkError::InvalidPhone(_))
        ));
    }
}
