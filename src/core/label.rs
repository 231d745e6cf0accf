// Label/unit splitting for raw channel labels

/// Splits a raw channel label into a display label and a physical unit.
///
/// Only a parenthesized suffix at the very end counts as a unit:
/// `"Voltage (V)"` becomes `("Voltage", "V")` while `"Time"` keeps an
/// empty unit. When the text before the parenthesis trims down to
/// nothing, the whole trimmed label is kept so the label is never empty.
pub fn split_label_and_unit(raw_label: &str) -> (String, String) {
    let trimmed = raw_label.trim();

    if let Some(stripped) = trimmed.strip_suffix(')') {
        if let Some(open) = stripped.rfind('(') {
            let inner = &stripped[open + 1..];
            if !inner.is_empty() && !inner.contains(')') {
                let label = trimmed[..open].trim();
                let label = if label.is_empty() { trimmed } else { label };
                return (label.to_string(), inner.trim().to_string());
            }
        }
    }

    (trimmed.to_string(), String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trailing_unit() {
        assert_eq!(
            split_label_and_unit("Voltage (V)"),
            ("Voltage".to_string(), "V".to_string())
        );
    }

    #[test]
    fn test_split_no_unit() {
        assert_eq!(split_label_and_unit("Time"), ("Time".to_string(), String::new()));
    }

    #[test]
    fn test_split_trims_whitespace() {
        assert_eq!(
            split_label_and_unit("  Freq(Hz) "),
            ("Freq".to_string(), "Hz".to_string())
        );
    }

    #[test]
    fn test_split_empty_label_falls_back_to_full_text() {
        assert_eq!(
            split_label_and_unit(" (Hz)"),
            ("(Hz)".to_string(), "Hz".to_string())
        );
    }

    #[test]
    fn test_split_only_trailing_parenthetical_counts() {
        assert_eq!(
            split_label_and_unit("Bus (12) angle"),
            ("Bus (12) angle".to_string(), String::new())
        );
        assert_eq!(
            split_label_and_unit("P (bus 7) (MW)"),
            ("P (bus 7)".to_string(), "MW".to_string())
        );
    }

    #[test]
    fn test_split_empty_parentheses_are_not_a_unit() {
        assert_eq!(split_label_and_unit("Flag ()"), ("Flag ()".to_string(), String::new()));
    }

    #[test]
    fn test_split_unit_with_stray_close_paren_is_rejected() {
        assert_eq!(split_label_and_unit("a(b)c)"), ("a(b)c)".to_string(), String::new()));
    }

    #[test]
    fn test_split_empty_input() {
        assert_eq!(split_label_and_unit("   "), (String::new(), String::new()));
    }
}
