use crate::config;
use crate::error::BrowserError;

use super::form::FormRecord;
use super::message::compose;

const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Percent-encodes `value` the way `encodeURIComponent` does.
pub fn encode_uri_component(value: &str) -> String {
    // urlencoding escapes these marks too; every '%' it emits starts a
    // three-character escape, so the swaps cannot hit a literal "%25..".
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

pub fn whatsapp_url(destination: &str, message: &str) -> String {
    format!(
        "{}{}?text={}",
        WHATSAPP_BASE_URL,
        destination,
        encode_uri_component(message)
    )
}

/// Link that opens a chat with the sales number, pre-filled with `record`.
pub fn access_request_url(record: &FormRecord) -> String {
    whatsapp_url(config::get_whatsapp_number(), &compose(record))
}

pub fn open_in_new_tab(url: &str) -> Result<(), BrowserError> {
    let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
    match window.open_with_url_and_target(url, "_blank")? {
        Some(_) => Ok(()),
        None => Err(BrowserError::PopupBlocked),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_encode_uri_component() {
        assert_eq!(encode_uri_component("Interested!"), "Interested!");
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("it's (very) *good*~"), "it's%20(very)%20*good*~");
        assert_eq!(encode_uri_component("@janes\n"), "%40janes%0A");
        assert_eq!(encode_uri_component("🔔"), "%F0%9F%94%94");
        assert_eq!(encode_uri_component("%21"), "%2521");
    }

    #[test]
    fn composed_message_round_trips() {
        let record = FormRecord {
            full_name: "Zoë O'Brien".to_string(),
            email: "zoe+salon@x.com".to_string(),
            business_industry: "Spa & Wellness".to_string(),
            company_website: "https://zoe.example/?a=1&b=(2)".to_string(),
            instagram_handle: "@zoë".to_string(),
            message: "100% in!\nCall me *today*".to_string(),
            ..FormRecord::default()
        };
        let message = compose(&record);
        let encoded = encode_uri_component(&message);
        assert!(!encoded.contains(|c: char| matches!(c, '\n' | ' ' | '&' | '?' | '#' | '=')));
        assert_eq!(urlencoding::decode(&encoded).unwrap(), message);
    }

    #[test]
    fn builds_wa_me_link() {
        assert_eq!(
            whatsapp_url("972509444706", "Hi there"),
            "https://wa.me/972509444706?text=Hi%20there"
        );
    }

    #[test]
    fn access_request_url_targets_configured_number() {
        let url = access_request_url(&FormRecord::default());
        let prefix = format!("https://wa.me/{}?text=", config::get_whatsapp_number());
        assert!(url.starts_with(&prefix));
        let text = urlencoding::decode(&url[prefix.len()..]).unwrap();
        assert_eq!(text, compose(&FormRecord::default()));
    }
}
