use log::Level;

pub const BRAND_NAME: &str = "DoJourney";

const DEFAULT_WHATSAPP_NUMBER: &str = "972509444706";

pub const DEMO_VIDEO_URL: &str = "https://www.youtube.com/embed/qlX4OXxc79A";

/// WhatsApp number that receives access requests, country code first and no `+`.
/// Set `DOJOURNEY_WHATSAPP_NUMBER` at build time to point the form somewhere else.
pub fn get_whatsapp_number() -> &'static str {
    match option_env!("DOJOURNEY_WHATSAPP_NUMBER") {
        Some(number) if is_valid_destination(number) => number,
        Some(number) => {
            log::warn!(
                "Ignoring DOJOURNEY_WHATSAPP_NUMBER={:?}, expected digits only",
                number
            );
            DEFAULT_WHATSAPP_NUMBER
        }
        None => DEFAULT_WHATSAPP_NUMBER,
    }
}

pub fn is_valid_destination(number: &str) -> bool {
    !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_number_is_digits_only() {
        assert!(is_valid_destination(DEFAULT_WHATSAPP_NUMBER));
        assert!(is_valid_destination(get_whatsapp_number()));
    }

    #[test]
    fn rejects_plus_prefix_and_blank() {
        assert!(!is_valid_destination("+972509444706"));
        assert!(!is_valid_destination(""));
        assert!(!is_valid_destination("972 509 444"));
    }
}
