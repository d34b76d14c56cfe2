//! Label word wrapping

/// Greedily pack the words of `text` into lines no wider than `max_width`
///
/// `measure` returns the rendered width of a string. A word is moved to a
/// new line only when the current line already holds a word, so a single
/// word wider than `max_width` stays alone on its line and overflows.
pub fn wrap_label<F>(text: &str, max_width: f64, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        // Candidates are measured with the trailing space, as drawn
        let candidate = format!("{line}{word} ");
        if measure(&candidate) > max_width && !line.is_empty() {
            lines.push(line.trim_end().to_string());
            line = format!("{word} ");
        } else {
            line = candidate;
        }
    }

    lines.push(line.trim_end().to_string());
    lines
}

/// Baselines for `line_count` lines centered as a block around `anchor_y`
pub fn line_baselines(line_count: usize, anchor_y: f64, line_height: f64) -> Vec<f64> {
    let total_height = line_count as f64 * line_height;
    let first = anchor_y - total_height / 2.0 + line_height / 2.0;
    (0..line_count)
        .map(|i| first + i as f64 * line_height)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn char_width(s: &str) -> f64 {
        s.chars().count() as f64
    }

    #[test]
    fn test_short_label_stays_on_one_line() {
        assert_eq!(wrap_label("Pizza night", 40.0, char_width), vec!["Pizza night"]);
    }

    #[test]
    fn test_long_label_wraps_greedily() {
        let lines = wrap_label("the quick brown fox jumps over", 12.0, char_width);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over"]);
    }

    #[test]
    fn test_lines_never_exceed_max_width_unless_single_word() {
        let text = "a bb ccc dddd eeeee ffffff ggggggggggggggg hh i jjjjjjj kk";
        for max_width in [3.0, 5.0, 8.0, 11.0, 20.0] {
            for line in wrap_label(text, max_width, char_width) {
                let single_word = line.split_whitespace().count() == 1;
                assert!(
                    char_width(&line) <= max_width || single_word,
                    "line {line:?} exceeds {max_width}"
                );
            }
        }
    }

    #[test]
    fn test_unsplittable_word_overflows_alone() {
        let lines = wrap_label("tiny supercalifragilistic end", 6.0, char_width);
        assert_eq!(lines, vec!["tiny", "supercalifragilistic", "end"]);
    }

    #[test]
    fn test_words_are_preserved_in_order() {
        let text = "one two three four five six seven";
        let lines = wrap_label(text, 9.0, char_width);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_repeated_spaces_collapse() {
        assert_eq!(wrap_label("a   b", 10.0, char_width), vec!["a b"]);
    }

    #[test]
    fn test_baselines_are_centered() {
        assert_eq!(line_baselines(1, 0.0, 10.0), vec![0.0]);
        assert_eq!(line_baselines(2, 0.0, 10.0), vec![-5.0, 5.0]);
        assert_eq!(line_baselines(3, 100.0, 12.0), vec![88.0, 100.0, 112.0]);
    }
}
