//! Escaping for workflow command messages and properties.
//!
//! Both tables are applied in a single left-to-right pass, so a `%` introduced
//! by an escape sequence is never escaped a second time.

/// Escape a command message: `%`, CR and LF.
pub fn escape_message(text: &str) -> String {
    escape_with(text, false)
}

/// Escape a command property value (`title`, `file`, ...): the message table
/// plus `:` and `,`, which delimit properties on the wire.
pub fn escape_property(text: &str) -> String {
    escape_with(text, true)
}

fn escape_with(text: &str, property: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '%' => out.push_str("%25"),
            '\r' => out.push_str("%0D"),
            '\n' => out.push_str("%0A"),
            ':' if property => out.push_str("%3A"),
            ',' if property => out.push_str("%2C"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{escape_message, escape_property};

    fn unescape(text: &str) -> String {
        text.replace("%0D", "\r")
            .replace("%0A", "\n")
            .replace("%3A", ":")
            .replace("%2C", ",")
            .replace("%25", "%")
    }

    #[test]
    fn message_escapes_percent_and_newlines() {
        assert_eq!(
            escape_message("percent % percent % cr \r cr \r lf \n lf \n"),
            "percent %25 percent %25 cr %0D cr %0D lf %0A lf %0A"
        );
    }

    #[test]
    fn message_leaves_property_delimiters_alone() {
        assert_eq!(escape_message("a: b, c"), "a: b, c");
    }

    #[test]
    fn property_escapes_colon_and_comma() {
        assert_eq!(
            escape_property("Percent % crlf \r\n colon : comma ,"),
            "Percent %25 crlf %0D%0A colon %3A comma %2C"
        );
    }

    #[test]
    fn percent_is_not_double_escaped() {
        assert_eq!(escape_message("%0A"), "%250A");
        assert_eq!(escape_property("%3A"), "%253A");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn message_has_no_raw_specials(text in "(?s).{0,64}") {
                let escaped = escape_message(&text);
                prop_assert!(!escaped.contains('\r'));
                prop_assert!(!escaped.contains('\n'));
                prop_assert!(escaped.matches('%').count() == escaped.matches("%25").count()
                    + escaped.matches("%0D").count()
                    + escaped.matches("%0A").count());
            }

            #[test]
            fn property_round_trips(text in "[a-z%:,\r\n ]{0,32}") {
                let escaped = escape_property(&text);
                prop_assert!(!escaped.contains(':'));
                prop_assert!(!escaped.contains(','));
                prop_assert_eq!(unescape(&escaped), text);
            }

            #[test]
            fn message_round_trips(text in "[a-z%\r\n ]{0,32}") {
                prop_assert_eq!(unescape(&escape_message(&text)), text);
            }
        }
    }
}
