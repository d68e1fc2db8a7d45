use super::form::{Field, FormRecord};

const HEADER: &str = "🔔 New DoJourney Access Request:";
const INDENT: &str = "    ";

/// Label for each line of the message, in send order. Whoever reads the chat
/// on the other end relies on this order and wording.
const LINES: [(Field, &str); 6] = [
    (Field::FullName, "👤 Full Name: "),
    (Field::Email, "📧 Email: "),
    (Field::BusinessIndustry, "🏢 Industry: "),
    (Field::CompanyWebsite, "🌐 Website: "),
    (Field::InstagramHandle, "📸 Instagram: "),
    (Field::Message, "📝 Message: "),
];

pub fn compose(record: &FormRecord) -> String {
    let mut message = String::from(HEADER);
    for (field, label) in LINES {
        message.push('\n');
        message.push_str(INDENT);
        message.push_str(label);
        message.push_str(record.get(field));
    }
    message.trim_matches(is_js_whitespace).to_string()
}

// Matches what `String.prototype.trim` strips: U+FEFF counts, U+0085 does not.
fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> FormRecord {
        FormRecord {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            business_industry: "Hair Salon".to_string(),
            company_website: String::new(),
            instagram_handle: "@janes".to_string(),
            message: "Interested!".to_string(),
            ..FormRecord::default()
        }
    }

    #[test]
    fn composes_jane_doe_request() {
        let expected = "🔔 New DoJourney Access Request:\n    👤 Full Name: Jane Doe\n    📧 Email: jane@x.com\n    🏢 Industry: Hair Salon\n    🌐 Website: \n    📸 Instagram: @janes\n    📝 Message: Interested!";
        assert_eq!(compose(&jane()), expected);
    }

    #[test]
    fn keeps_six_labeled_lines_in_order() {
        let composed = compose(&jane());
        let lines: Vec<&str> = composed.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], HEADER);
        for (line, (_, label)) in lines[1..].iter().zip(LINES) {
            assert!(line.trim_start().starts_with(label.trim_end()), "{line}");
        }
        assert_eq!(lines[4], "    🌐 Website: ");
    }

    #[test]
    fn empty_record_still_lists_every_label() {
        let composed = compose(&FormRecord::default());
        assert_eq!(composed.lines().count(), 7);
        // Only the very end is trimmed.
        assert!(composed.ends_with("📝 Message:"));
        assert!(composed.contains("\n    👤 Full Name: \n"));
    }

    #[test]
    fn trims_only_the_outer_whitespace() {
        let record = FormRecord {
            full_name: "  Jane  ".to_string(),
            message: "line one\nline two\n\n  ".to_string(),
            ..FormRecord::default()
        };
        let composed = compose(&record);
        assert!(composed.contains("👤 Full Name:   Jane  \n"));
        assert!(composed.ends_with("📝 Message: line one\nline two"));
    }

    #[test]
    fn trims_like_javascript() {
        let record = FormRecord {
            message: "hi\u{FEFF}".to_string(),
            ..FormRecord::default()
        };
        assert!(compose(&record).ends_with("📝 Message: hi"));

        let record = FormRecord {
            message: "hi\u{85}".to_string(),
            ..FormRecord::default()
        };
        assert!(compose(&record).ends_with("📝 Message: hi\u{85}"));
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(compose(&jane()), compose(&jane()));
    }
}
