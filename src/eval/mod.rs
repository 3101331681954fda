mod interp;
mod segment;

pub use segment::{StatementGroup, segment};

use anyhow::Result;
use interp::{Outcome, Session};
use pyo3::prelude::*;

/// The (stdout, stderr) capture attributed to one original source line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineResult {
    pub stdout: String,
    pub stderr: String,
}

impl LineResult {
    /// What the output pane shows for this line: blank when the statement
    /// faulted, otherwise the captured stdout flattened onto one line.
    pub fn rendered(&self) -> String {
        if !self.stderr.is_empty() {
            String::new()
        } else {
            self.stdout.replace('\n', " ")
        }
    }
}

/// Re-execute the whole buffer and return one result per input line.
///
/// Statement groups run in order against a single fresh interpreter
/// session, so a later statement sees every binding, definition, and
/// import made above it in the same pass. Interior lines of a multi-line
/// group get blank results; the group's final line carries the capture.
/// Faults never abort the pass, so the output length always equals the
/// input length.
pub fn evaluate(lines: &[String]) -> Result<Vec<LineResult>> {
    Python::attach(|py| {
        let session = Session::new(py)?;
        let mut pending = String::new();
        let mut results = Vec::with_capacity(lines.len());

        for group in segment(lines) {
            pending.push_str(&group.text);
            pending.push('\n');

            // Interior lines of the group carry no independent output.
            for _ in 1..group.line_count {
                results.push(LineResult::default());
            }

            match session.submit(&pending)? {
                Outcome::Incomplete => {
                    // An open construct at end of group: keep accumulating.
                    results.push(LineResult::default());
                }
                Outcome::Complete { stdout, stderr } => {
                    results.push(LineResult { stdout, stderr });
                    pending.clear();
                }
            }
        }

        debug_assert_eq!(results.len(), lines.len());
        Ok(results)
    })
}

/// Evaluate a whole buffer and render it as the text of the output pane:
/// one rendered line per source line, joined with newlines.
pub fn evaluate_text(text: &str) -> Result<String> {
    let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    let rendered: Vec<String> = evaluate(&lines)?.iter().map(LineResult::rendered).collect();
    Ok(rendered.join("\n"))
}
