use tzoverlap::{OverlapResult, ZoneRow};

pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const BLUE: &str = "\x1b[34m";
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

const NAME_COLUMN: usize = 20;

pub fn print_overlap(result: &OverlapResult, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("{}", render_grid(result, &palette));
}

/// Render the legend, the shared local-hour header, one colored block row per
/// zone, and a trailing row of the second zone's mapped hour labels ("what
/// hour is it in the first zone when it's h in the second").
pub fn render_grid(result: &OverlapResult, palette: &ansi::Palette) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Legend:  {} Working Hours  {} Overlap  {} Non-working Hours\n",
        palette.paint("█", ansi::BLUE),
        palette.paint("█", ansi::GREEN),
        palette.paint("█", ansi::GRAY),
    ));
    out.push('\n');

    let local_hours: String = (0..24).map(|h| format!("{h:02} ")).collect();
    out.push_str(&format!("{:NAME_COLUMN$}{}\n", "", palette.dim(local_hours.trim_end())));

    out.push_str(&block_row(&result.row_a, palette));
    out.push_str(&block_row(&result.row_b, palette));

    out.push_str(&format!("{:NAME_COLUMN$}{}\n", "", palette.dim(label_row(&result.row_b).trim_end())));

    out
}

fn block_row(row: &ZoneRow, palette: &ansi::Palette) -> String {
    let blocks: String = row
        .hours
        .iter()
        .map(|slot| {
            let color = if slot.is_overlap {
                ansi::GREEN
            } else if slot.is_working_hour {
                ansi::BLUE
            } else {
                ansi::GRAY
            };
            palette.paint("██ ", color)
        })
        .collect();

    format!("{:<NAME_COLUMN$}{}\n", row.zone, blocks.trim_end())
}

fn label_row(row: &ZoneRow) -> String {
    row.hours
        .iter()
        .map(|slot| {
            // A DST-gap slot carries no mapped hour; keep the column aligned.
            if slot.mapped_hour_label.is_empty() {
                "-- ".to_string()
            } else {
                format!("{} ", slot.mapped_hour_label)
            }
        })
        .collect()
}
