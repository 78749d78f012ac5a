//! Rendering seam between `pick` reports and where they end up.

/// Line-oriented sink for the `generate`, `check` and `explain` reports.
///
/// A report only picks the kind of line (a heading, a key/value pair, an
/// error); the sink owns the formatting and the stream it goes to.
pub trait Output {
    /// Report heading, underlined on a terminal.
    fn title(&mut self, text: &str);

    /// Heading of a group of lines, such as "Deferred".
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    /// A key/value pair belonging to the enclosing section.
    fn key_value_indented(&mut self, key: &str, value: &str);

    fn numbered_item(&mut self, index: usize, text: &str);

    fn list_item(&mut self, text: &str);

    /// A factory file that was written.
    fn added_item(&mut self, text: &str);

    /// A rule violation or failed write. Goes to stderr on a terminal.
    fn error(&mut self, msg: &str);

    /// Goes to stderr on a terminal.
    fn warning(&mut self, msg: &str);

    /// Separator naming the previewed file that follows.
    fn divider(&mut self, label: &str);

    /// Printed as is. Previewed factory sources go through here.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// A command result that knows how to print itself.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Writes reports to stdout, and errors and warnings to stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

/// `=` rule as wide as `text` in characters.
fn underline(text: &str) -> String {
    "=".repeat(text.chars().count())
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{text}");
        println!("{}", underline(text));
    }

    fn section(&mut self, name: &str) {
        println!("{name}:");
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{key}: {value}");
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {key}: {value}");
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        println!("  {index}. {text}");
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {text}");
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {text}");
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {msg}");
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {msg}");
    }

    fn divider(&mut self, label: &str) {
        println!("── {label} ──");
    }

    fn preformatted(&mut self, text: &str) {
        println!("{text}");
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered lines, for asserting on report output.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn title(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn section(&mut self, name: &str) {
        self.lines.push(format!("{name}:"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("{key}: {value}"));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.lines.push(format!("  {key}: {value}"));
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        self.lines.push(format!("  {index}. {text}"));
    }

    fn list_item(&mut self, text: &str) {
        self.lines.push(format!("  - {text}"));
    }

    fn added_item(&mut self, text: &str) {
        self.lines.push(format!("  + {text}"));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(format!("error: {msg}"));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning: {msg}"));
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("── {label} ──"));
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
