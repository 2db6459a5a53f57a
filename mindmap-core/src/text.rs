//! Label wrapping for node boxes.

/// Greedy word wrap at `max_chars` characters per line.
///
/// Words are split on any whitespace, so runs of spaces and embedded newlines
/// collapse to a single separator. A word longer than the limit gets a line of
/// its own and is never broken. Empty text yields one empty line.
pub fn wrap_label(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > max_chars {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }
    lines.push(line);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fits_on_one_line() {
        assert_eq!(wrap_label("Lease Agreement", 18), ["Lease Agreement"]);
    }

    #[test]
    fn test_greedy_breaks() {
        assert_eq!(
            wrap_label("Obligations of the tenant under clause", 16),
            ["Obligations of", "the tenant under", "clause"]
        );
    }

    #[test]
    fn test_exact_fit_stays_on_line() {
        // "Term and" + " Rent" is 13 characters.
        assert_eq!(wrap_label("Term and Rent", 13), ["Term and Rent"]);
        assert_eq!(wrap_label("Term and Rent", 12), ["Term and", "Rent"]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(wrap_label("", 16), [""]);
        assert_eq!(wrap_label("   ", 16), [""]);
    }

    #[test]
    fn test_long_word_is_not_split() {
        assert_eq!(
            wrap_label("A Supercalifragilisticexpialidocious term", 16),
            ["A", "Supercalifragilisticexpialidocious", "term"]
        );
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(wrap_label("  Notice \t period\n", 16), ["Notice period"]);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(wrap_label("Überprüfung Verträge", 20), ["Überprüfung Verträge"]);
    }

    proptest! {
        #[test]
        fn wrap_is_idempotent(text in "[a-zA-Z ]{0,80}", width in 1usize..30) {
            let once = wrap_label(&text, width);
            let twice = wrap_label(&once.join("\n"), width);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn wrap_keeps_every_word(text in "[a-z ]{0,80}", width in 1usize..30) {
            let lines = wrap_label(&text, width);
            let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
            let original: Vec<&str> = text.split_whitespace().collect();
            prop_assert_eq!(rejoined, original);
        }

        #[test]
        fn multi_word_lines_fit(text in "[a-z ]{0,80}", width in 1usize..30) {
            for line in wrap_label(&text, width) {
                if line.contains(' ') {
                    prop_assert!(line.chars().count() <= width);
                }
            }
        }
    }
}
