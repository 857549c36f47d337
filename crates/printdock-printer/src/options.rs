//! Parser for `lpoptions -p <printer>` output.
//!
//! The output is a single line of space-separated `key=value` pairs where a
//! value containing spaces is single-quoted, e.g.:
//!
//! ```text
//! copies=1 printer-info='HP LaserJet 4000' printer-location='Office 2' printer-state=3
//! ```

/// Parse `key=value` pairs, honoring single-quoted values.
pub fn parse_options(input: &str) -> Vec<(String, String)> {
    let chars: Vec<char> = input.trim().chars().collect();
    let mut pairs = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        if i >= chars.len() {
            break;
        }

        let key_start = i;
        while i < chars.len() && chars[i] != '=' && !chars[i].is_whitespace() {
            i += 1;
        }
        let key: String = chars[key_start..i].iter().collect();

        let mut value = String::new();
        if i < chars.len() && chars[i] == '=' {
            i += 1;
            if i < chars.len() && chars[i] == '\'' {
                i += 1;
                while i < chars.len() && chars[i] != '\'' {
                    value.push(chars[i]);
                    i += 1;
                }
                // closing quote
                if i < chars.len() {
                    i += 1;
                }
            } else {
                while i < chars.len() && !chars[i].is_whitespace() {
                    value.push(chars[i]);
                    i += 1;
                }
            }
        }

        if !key.is_empty() {
            pairs.push((key, value));
        }
    }

    pairs
}

/// Look up a key in parsed option pairs.
pub fn option_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "copies=1 device-uri=socket://192.168.1.50:9100 finishings=3 \
                          printer-info='HP LaserJet 4000' printer-location='Office 2' \
                          printer-is-accepting-jobs=true printer-state=3 \
                          printer-state-reasons=none";

    #[test]
    fn test_parse_plain_values() {
        let pairs = parse_options(SAMPLE);
        assert_eq!(option_value(&pairs, "copies"), Some("1"));
        assert_eq!(option_value(&pairs, "printer-state"), Some("3"));
        assert_eq!(
            option_value(&pairs, "device-uri"),
            Some("socket://192.168.1.50:9100")
        );
    }

    #[test]
    fn test_parse_quoted_values() {
        let pairs = parse_options(SAMPLE);
        assert_eq!(
            option_value(&pairs, "printer-info"),
            Some("HP LaserJet 4000")
        );
        assert_eq!(option_value(&pairs, "printer-location"), Some("Office 2"));
    }

    #[test]
    fn test_missing_key() {
        let pairs = parse_options(SAMPLE);
        assert_eq!(option_value(&pairs, "printer-type"), None);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(parse_options("").is_empty());
        assert!(parse_options("   \n").is_empty());
    }

    #[test]
    fn test_unterminated_quote_consumes_rest() {
        let pairs = parse_options("printer-info='HP LaserJet printer-state=3");
        assert_eq!(
            option_value(&pairs, "printer-info"),
            Some("HP LaserJet printer-state=3")
        );
    }

    #[test]
    fn test_bare_key_without_value() {
        let pairs = parse_options("auth-info-required printer-state=5");
        assert_eq!(option_value(&pairs, "auth-info-required"), Some(""));
        assert_eq!(option_value(&pairs, "printer-state"), Some("5"));
    }
}
