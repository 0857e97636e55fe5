//! Identifier and display-name derivation for discovered documents.
//!
//! Both transforms are pure and total: any input yields an output, and the
//! same input always yields the same output.

/// Derive a machine-safe tool identifier from a document base name.
///
/// The name is lower-cased, every run of characters outside `[a-z0-9]` becomes
/// a single `_`, and leading/trailing `_` are dropped. Applying it to its own
/// output returns the output unchanged.
pub fn tool_identifier(base_name: &str) -> String {
    let mut identifier = String::with_capacity(base_name.len());
    let mut pending_separator = false;

    for ch in base_name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !identifier.is_empty() {
                identifier.push('_');
            }
            pending_separator = false;
            identifier.push(ch);
        } else {
            pending_separator = true;
        }
    }

    identifier
}

/// Derive a human-readable title from a document base name.
///
/// `-` and `_` become spaces and the first character of every word is
/// upper-cased. The rest of each word is left as-is, so `report (final)`
/// becomes `Report (Final)` and `NDA` stays `NDA`.
pub fn display_name(base_name: &str) -> String {
    let mut name = String::with_capacity(base_name.len());
    let mut previous_is_word = false;

    for ch in base_name.chars() {
        let ch = if ch == '-' || ch == '_' { ' ' } else { ch };
        let is_word = ch.is_alphanumeric();

        if is_word && !previous_is_word {
            name.extend(ch.to_uppercase());
        } else {
            name.push(ch);
        }
        previous_is_word = is_word;
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "Report (Final)",
        "a-b",
        "a_b",
        "__leading and trailing__",
        "Q3 2024 -- Board Pack!!",
        "already_canonical_123",
        "Ünïcödé naïve café",
        "!!!",
        "x",
        "multiple   spaces",
    ];

    #[test]
    fn test_tool_identifier_examples() {
        assert_eq!(tool_identifier("Report (Final)"), "report_final");
        assert_eq!(tool_identifier("a-b"), "a_b");
        assert_eq!(tool_identifier("a_b"), "a_b");
        assert_eq!(tool_identifier("Q3 2024 -- Board Pack!!"), "q3_2024_board_pack");
        assert_eq!(tool_identifier("__x__"), "x");
        assert_eq!(tool_identifier("!!!"), "");
    }

    #[test]
    fn test_tool_identifier_is_idempotent() {
        for sample in SAMPLES {
            let once = tool_identifier(sample);
            assert_eq!(tool_identifier(&once), once, "input: {sample}");
        }
    }

    #[test]
    fn test_tool_identifier_alphabet() {
        for sample in SAMPLES {
            let id = tool_identifier(sample);
            assert!(
                id.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "bad character in {id}"
            );
            assert!(!id.starts_with('_') && !id.ends_with('_'), "untrimmed: {id}");
            assert!(!id.contains("__"), "uncollapsed: {id}");
        }
    }

    #[test]
    fn test_display_name_examples() {
        assert_eq!(display_name("Report (Final)"), "Report (Final)");
        assert_eq!(display_name("report (final)"), "Report (Final)");
        assert_eq!(display_name("annual-report_2024"), "Annual Report 2024");
        assert_eq!(display_name("NDA"), "NDA");
        assert_eq!(display_name("o'neil"), "O'Neil");
    }

    #[test]
    fn test_display_name_properties() {
        for sample in SAMPLES {
            let name = display_name(sample);
            assert!(!name.contains('_') && !name.contains('-'), "separator left in {name}");
            for word in name.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
                let first = word.chars().next().unwrap();
                assert!(
                    !first.is_lowercase(),
                    "word '{word}' in '{name}' starts lower-case"
                );
            }
        }
    }
}
