/// A maximal run of source lines merged into one evaluation unit.
///
/// Groups are contiguous and cover the whole input: the group after this
/// one starts at `start + line_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementGroup {
    /// Index of the group's first line in the original buffer
    pub start: usize,
    /// Number of original lines merged into this group
    pub line_count: usize,
    /// The group's lines joined with '\n'
    pub text: String,
}

/// A line that gets absorbed into the statement started above it:
/// indented, blank, or a comment.
fn is_continuation(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t') || line.starts_with('#') || line.is_empty()
}

/// A line the absorption run should not end on: comments and
/// whitespace-only lines belong to the next statement when they trail.
fn is_trailing_filler(line: &str) -> bool {
    line.starts_with('#') || line.trim().is_empty()
}

/// Partition source lines into statement groups.
///
/// A group starts at the first unconsumed line and greedily absorbs every
/// following continuation line. Trailing blank and comment lines are then
/// trimmed back out of the group so they start the next one instead,
/// unless the buffer itself ends inside the run.
pub fn segment(lines: &[String]) -> Vec<StatementGroup> {
    let mut groups = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let mut j = i + 1;
        while j < lines.len() && is_continuation(&lines[j]) {
            j += 1;
        }
        while j > i + 1 && is_trailing_filler(&lines[j - 1]) {
            j -= 1;
        }
        groups.push(StatementGroup {
            start: i,
            line_count: j - i,
            text: lines[i..j].join("\n"),
        });
        i = j;
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    fn texts(src: &[&str]) -> Vec<String> {
        segment(&lines(src)).into_iter().map(|g| g.text).collect()
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(segment(&[]).is_empty());
    }

    #[test]
    fn single_plain_line_is_one_group() {
        let groups = segment(&lines(&["x = 1"]));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].start, 0);
        assert_eq!(groups[0].line_count, 1);
        assert_eq!(groups[0].text, "x = 1");
    }

    #[test]
    fn indented_lines_are_absorbed() {
        assert_eq!(
            texts(&["def f():", "    return 1", "f()"]),
            vec!["def f():\n    return 1", "f()"]
        );
    }

    #[test]
    fn blank_and_comment_lines_inside_a_block_are_absorbed() {
        assert_eq!(
            texts(&["def f():", "", "    # doc", "    return 1", "f()"]),
            vec!["def f():\n\n    # doc\n    return 1", "f()"]
        );
    }

    #[test]
    fn trailing_blanks_and_comments_start_the_next_group() {
        // The blank line and comment after the def body are trimmed back
        // out of f()'s group; each then heads a group of its own since
        // g() is not a continuation line.
        assert_eq!(
            texts(&["def f():", "    return 1", "", "# next", "g()"]),
            vec!["def f():\n    return 1", "", "# next", "g()"]
        );
    }

    #[test]
    fn buffer_ending_in_blanks_peels_them_into_singleton_groups() {
        // With nothing after the run, trim-back keeps peeling until each
        // blank line heads its own group.
        assert_eq!(texts(&["x = 1", "", ""]), vec!["x = 1", "", ""]);
    }

    #[test]
    fn tab_indent_counts_as_continuation() {
        assert_eq!(
            texts(&["if True:", "\tpass", "y"]),
            vec!["if True:\n\tpass", "y"]
        );
    }

    #[test]
    fn leading_blank_line_forms_its_own_group() {
        assert_eq!(texts(&["", "x = 1"]), vec!["", "x = 1"]);
    }

    #[test]
    fn groups_are_contiguous_and_cover_the_input() {
        let input = lines(&["a = 1", "# note", "", "def f():", "    pass", "", "f()"]);
        let groups = segment(&input);
        let mut next = 0;
        for g in &groups {
            assert_eq!(g.start, next);
            assert!(g.line_count > 0);
            next += g.line_count;
        }
        assert_eq!(next, input.len());
    }
}
