//! Greedy word wrapping for description text.
//!
//! Widths are counted in bytes; no unicode width handling.

/// Wrap `text` so that no produced line exceeds `width` columns.
///
/// Pre-existing newlines are hard boundaries and each source line is wrapped
/// on its own. A word longer than `width` is emitted alone on its line,
/// never split. A `width` of 0 disables wrapping: source lines come back
/// untouched.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if width == 0 {
            out.push(line.to_string());
        } else {
            wrap_line(line, width, &mut out);
        }
    }
    out
}

fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut any = false;
    for word in line.split_whitespace() {
        any = true;
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if any {
        out.push(current);
    } else {
        // Blank source lines survive as paragraph breaks
        out.push(String::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: &str = "@var This is a very large string that will be wrapped if it contains more than 80 characters";

    #[test]
    fn breaks_at_word_boundary_before_width() {
        let lines = wrap(LONG, 80);
        assert_eq!(
            lines,
            vec![
                "@var This is a very large string that will be wrapped if it contains more than",
                "80 characters",
            ]
        );
        assert!(lines.iter().all(|l| l.len() <= 80));
    }

    #[test]
    fn zero_width_keeps_lines_whole() {
        assert_eq!(wrap(LONG, 0), vec![LONG]);
        assert_eq!(wrap("a  b\nc", 0), vec!["a  b", "c"]);
    }

    #[test]
    fn overlong_word_sits_alone() {
        let lines = wrap("tiny https://example.com/a/very/long/path tail", 10);
        assert_eq!(
            lines,
            vec!["tiny", "https://example.com/a/very/long/path", "tail"]
        );
    }

    #[test]
    fn existing_newlines_are_boundaries() {
        let lines = wrap("one two three\n\nfour five", 9);
        assert_eq!(lines, vec!["one two", "three", "", "four five"]);
    }

    #[test]
    fn exact_fit_stays_on_line() {
        assert_eq!(wrap("abcd efgh", 9), vec!["abcd efgh"]);
        assert_eq!(wrap("abcd efghi", 9), vec!["abcd", "efghi"]);
    }

    #[test]
    fn wrapping_is_idempotent() {
        for width in [1, 5, 12, 30, 80] {
            let once = wrap(LONG, width);
            let twice = wrap(&once.join("\n"), width);
            assert_eq!(once, twice, "width {width}");
        }
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 80), vec![String::new()]);
    }
}
