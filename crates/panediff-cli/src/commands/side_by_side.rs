//! Side-by-side command
//!
//! Usage: panediff side-by-side <ORIGINAL> <MODIFIED> [--width <W>] [--json]

use clap::Args;
use panediff_core::diff::{DiffEngine, LeftKind, RightKind, SideBySideRow, SpanKind};
use panediff_core::{spans_to_kind_text, ExError, ExErrorKind};
use std::path::PathBuf;

use super::{read_input, to_json};

/// Narrowest column that still shows a useful prefix of each line.
const MIN_WIDTH: usize = 8;

#[derive(Debug, Args)]
pub struct SideBySideArgs {
    /// Original document
    pub original: PathBuf,

    /// Modified document
    pub modified: PathBuf,

    /// Width of each text column, in characters
    #[arg(long, default_value_t = 40)]
    pub width: usize,

    /// Print rows as JSON instead of columns
    #[arg(long)]
    pub json: bool,
}

/// Execute side-by-side command
pub fn execute(args: SideBySideArgs, engine: &DiffEngine) -> Result<(), ExError> {
    if args.width < MIN_WIDTH {
        return Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("side_by_side")
            .with_message(format!("--width must be at least {}", MIN_WIDTH)));
    }
    let original = read_input(&args.original)?;
    let modified = read_input(&args.modified)?;

    let rows = engine.side_by_side(&original, &modified)?;

    if args.json {
        println!("{}", to_json(&rows)?);
    } else {
        for row in &rows {
            println!("{}", format_row(row, args.width));
        }
    }
    Ok(())
}

/// One text line: `NNNN m left | NNNN m right`.
///
/// Changed words inside a paired row are wrapped as `[-word-]` on the left
/// and `{+word+}` on the right.
fn format_row(row: &SideBySideRow, width: usize) -> String {
    let left_marker = match row.left_kind {
        LeftKind::Unchanged | LeftKind::Empty => ' ',
        LeftKind::Removed => '-',
    };
    let right_marker = match row.right_kind {
        RightKind::Unchanged | RightKind::Empty => ' ',
        RightKind::Added => '+',
    };
    let left = row
        .left_spans
        .as_deref()
        .map(highlight)
        .unwrap_or_else(|| row.left_content.clone());
    let right = row
        .right_spans
        .as_deref()
        .map(highlight)
        .unwrap_or_else(|| row.right_content.clone());

    let line = format!(
        "{} {} {} | {} {} {}",
        line_number(row.left_line_number),
        left_marker,
        fit(&left, width),
        line_number(row.right_line_number),
        right_marker,
        truncate(&right, width),
    );
    line.trim_end().to_string()
}

fn highlight(spans: &[panediff_core::diff::InlineSpan]) -> String {
    spans_to_kind_text(spans)
        .into_iter()
        .map(|(text, kind)| match kind {
            SpanKind::Equal => text.to_string(),
            SpanKind::Removed => format!("[-{}-]", text),
            SpanKind::Added => format!("{{+{}+}}", text),
        })
        .collect()
}

fn line_number(number: Option<usize>) -> String {
    number.map_or_else(|| " ".repeat(4), |n| format!("{:>4}", n))
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Truncate or pad to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let mut out = truncate(text, width);
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}
