use std::io::{self, Write};

/// Probe argument inspected by [`show_arg`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgProbe {
    pub kind: String,
}

impl ArgProbe {
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// Writes one line describing the probe's kind to `out`.
pub fn show_arg_to<W: Write>(out: &mut W, probe: &ArgProbe) -> io::Result<()> {
    writeln!(out, "arg kind = {}", probe.kind)
}

/// Prints the probe's kind to stdout. Debug helper with no effect on
/// adapter or backend state.
pub fn show_arg(probe: &ArgProbe) {
    let _ = show_arg_to(&mut io::stdout().lock(), probe);
}
