use proptest::prelude::*;
use std::path::Path;
use token_scan_engine::scan_text;

/// Greedy left-to-right count without overlap, done by hand.
fn greedy_count(text: &str, target: &str) -> usize {
    let mut count = 0;
    let mut rest = text;
    while let Some(pos) = rest.find(target) {
        count += 1;
        rest = &rest[pos + target.len()..];
    }
    count
}

proptest! {
    #[test]
    fn test_brace_counts_match_char_tally(content in "\\PC{0,400}") {
        let report = scan_text(Path::new("p.txt"), &content, "x");
        prop_assert_eq!(report.braces.open, content.chars().filter(|&c| c == '{').count());
        prop_assert_eq!(report.braces.close, content.chars().filter(|&c| c == '}').count());
        prop_assert_eq!(report.parens.open, content.chars().filter(|&c| c == '(').count());
        prop_assert_eq!(report.parens.close, content.chars().filter(|&c| c == ')').count());
    }

    #[test]
    fn test_occurrences_match_greedy_scan(
        content in "[ab\\n{}()]{0,300}",
        target in "[ab]{1,3}"
    ) {
        let report = scan_text(Path::new("p.txt"), &content, &target);
        prop_assert_eq!(report.occurrences, greedy_count(&content, &target));
    }

    #[test]
    fn test_matched_lines_are_ordered_and_exact(
        content in "[ab \\n\\r]{0,300}",
        target in "[ab]{1,2}"
    ) {
        let report = scan_text(Path::new("p.txt"), &content, &target);
        let lines: Vec<&str> = content.lines().collect();

        let mut previous = 0;
        for m in &report.matches {
            prop_assert!(m.line_number > previous);
            previous = m.line_number;
            prop_assert_eq!(lines[m.line_number - 1], m.text.as_str());
            prop_assert!(m.text.contains(target.as_str()));
        }

        let expected = lines.iter().filter(|l| l.contains(target.as_str())).count();
        prop_assert_eq!(report.matches.len(), expected);
    }

    #[test]
    fn test_scan_is_deterministic(content in "\\PC{0,200}", target in "\\PC{1,4}") {
        let first = scan_text(Path::new("p.txt"), &content, &target);
        let second = scan_text(Path::new("p.txt"), &content, &target);
        prop_assert_eq!(first, second);
    }
}
