use sentrie::{FieldSummary, Status};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_fields(input: &str, kind: &str, fields: &[FieldSummary], color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Tokenizing as {kind}: {:?}", input.trim_end()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Fields ━━━", ansi::GRAY));
    if fields.is_empty() {
        println!("{}", palette.dim("  No fields produced"));
        return;
    }

    for field in fields {
        let span = palette.dim(format!("{:>4}..{:<4}", field.start, field.end));
        let value = match (&field.value, field.status) {
            (Some(v), _) => palette.bold(format!("{v:?}")),
            (None, s) if s.is_sentinel() => palette.paint("<sentinel>", ansi::YELLOW),
            (None, _) => palette.dim("<missing>"),
        };
        let status = palette.paint(field.status.describe(), status_color(field.status));
        println!("  #{:<3} {}  {:<28} {}", field.index, span, status, value);
    }

    let invalid = fields.iter().filter(|f| f.status.is_invalid()).count();
    println!("\n{}", palette.paint("━━━ Summary ━━━", ansi::GRAY));
    println!("  fields: {}  invalid: {}", fields.len(), invalid);
}

fn status_color(status: Status) -> &'static str {
    if status.is_invalid() {
        ansi::RED
    } else if status.is_sentinel() {
        ansi::YELLOW
    } else {
        ansi::GREEN
    }
}
