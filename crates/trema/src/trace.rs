//! Human-readable traces of the widget calls issued each frame.
//!
//! A trace line reads like the call it records (`ImGui.Begin("T");`), with
//! `//` comments for frame markers and caught errors. Traces exist for
//! debugging and golden-output tests; the renderer works the same with
//! [`NoopTrace`].

/// Collects the calls made while rendering.
pub trait TraceLogger {
    fn start_frame(&mut self);

    fn end_frame(&mut self);

    fn log_call(&mut self, line: &str);

    /// Emits and clears whatever has been collected.
    fn flush(&mut self) {}

    /// Lines collected since the last flush.
    fn buffer(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTrace;

impl TraceLogger for NoopTrace {
    fn start_frame(&mut self) {}

    fn end_frame(&mut self) {}

    fn log_call(&mut self, _line: &str) {}
}

pub const START_FRAME_MARKER: &str = "// --- start frame ---";
pub const END_FRAME_MARKER: &str = "// --- end frame ---";

/// Buffers a frame's lines and writes them to the `log` facade on flush.
#[derive(Debug, Default, Clone)]
pub struct BufferedTrace {
    lines: Vec<String>,
}

impl BufferedTrace {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraceLogger for BufferedTrace {
    fn start_frame(&mut self) {
        self.lines.push(START_FRAME_MARKER.to_string());
    }

    fn end_frame(&mut self) {
        self.lines.push(END_FRAME_MARKER.to_string());
    }

    fn log_call(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn flush(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        log::info!("{}", self.lines.join("\n"));
        self.lines.clear();
    }

    fn buffer(&self) -> Vec<String> {
        self.lines.clone()
    }
}

/// Quotes a string the way trace lines show call arguments.
pub(crate) fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_trace_collects_until_flush() {
        let mut trace = BufferedTrace::new();
        trace.start_frame();
        trace.log_call("ImGui.Spacing();");
        trace.end_frame();
        assert_eq!(
            trace.buffer(),
            vec![START_FRAME_MARKER, "ImGui.Spacing();", END_FRAME_MARKER]
        );

        trace.flush();
        assert!(trace.buffer().is_empty());
    }

    #[test]
    fn noop_trace_keeps_nothing() {
        let mut trace = NoopTrace;
        trace.log_call("ImGui.Text(\"x\");");
        assert!(trace.buffer().is_empty());
    }

    #[test]
    fn quoting_escapes_like_json() {
        assert_eq!(quoted("Hi"), "\"Hi\"");
        assert_eq!(quoted("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
    }
}
