use pyo3::prelude::*;

/// Verdict for one submission of the pending statement text.
pub enum Outcome {
    /// The text is a valid prefix of a larger statement; nothing ran and
    /// the pending buffer must carry forward.
    Incomplete,
    /// The text was fully parsed and, if valid, executed. Syntax and
    /// runtime faults both land in `stderr` (the interpreter prints them
    /// instead of raising), so completion never aborts a pass.
    Complete { stdout: String, stderr: String },
}

/// One pass's persistent evaluation state: a fresh
/// `code.InteractiveInterpreter` whose namespace accumulates bindings
/// across submissions. Created per `evaluate` call, never shared.
pub struct Session<'py> {
    interp: Bound<'py, PyAny>,
    sys: Bound<'py, PyAny>,
    string_io: Bound<'py, PyAny>,
}

impl<'py> Session<'py> {
    pub fn new(py: Python<'py>) -> PyResult<Self> {
        let interp = py
            .import("code")?
            .getattr("InteractiveInterpreter")?
            .call0()?;
        let sys = py.import("sys")?.into_any();
        let string_io = py.import("io")?.getattr("StringIO")?;
        Ok(Self {
            interp,
            sys,
            string_io,
        })
    }

    /// Submit accumulated statement text to the interpreter, with stdout
    /// and stderr redirected into per-call capture sinks.
    ///
    /// The saved streams are restored before any error from `runsource`
    /// is propagated, so a failing submission can never leave the process
    /// writing into a stale sink.
    pub fn submit(&self, source: &str) -> PyResult<Outcome> {
        let out_sink = self.string_io.call0()?;
        let err_sink = self.string_io.call0()?;
        let saved_out = self.sys.getattr("stdout")?;
        let saved_err = self.sys.getattr("stderr")?;

        self.sys.setattr("stdout", &out_sink)?;
        self.sys.setattr("stderr", &err_sink)?;
        let more = self.interp.call_method1("runsource", (source,));
        self.sys.setattr("stdout", saved_out)?;
        self.sys.setattr("stderr", saved_err)?;

        if more?.extract::<bool>()? {
            return Ok(Outcome::Incomplete);
        }
        Ok(Outcome::Complete {
            stdout: sink_value(&out_sink)?,
            stderr: sink_value(&err_sink)?,
        })
    }
}

/// Drain a StringIO sink, trimming surrounding whitespace.
fn sink_value(sink: &Bound<PyAny>) -> PyResult<String> {
    let value: String = sink.call_method0("getvalue")?.extract()?;
    Ok(value.trim().to_string())
}
