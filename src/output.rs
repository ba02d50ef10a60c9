//! Terminal formatting for CLI results

use crate::tree::{SuffixMatch, TreeStats};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print tree statistics as an aligned table
pub fn print_stats(stats: &TreeStats, color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    write_stats(&mut out, stats)
}

fn write_stats<W: WriteColor>(out: &mut W, stats: &TreeStats) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "Tree Statistics")?;
    writeln!(out, "===============")?;
    out.reset()?;

    let rows = [
        ("Sequences:", stats.sequence_count),
        ("Items:", stats.item_count),
        ("Nodes:", stats.node_count),
        ("Internal nodes:", stats.internal_node_count),
        ("Leaves:", stats.leaf_count),
        ("Edges:", stats.edge_count),
        ("Suffix links:", stats.suffix_link_count),
        ("Max depth:", stats.max_depth),
    ];
    for (label, value) in rows {
        write!(out, "{:18}", label)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "{}", value)?;
        out.reset()?;
    }
    Ok(())
}

/// Print one line per match: `<input>:<offset>`
pub fn print_matches(matches: &[SuffixMatch], inputs: &[String], color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    write_matches(&mut out, matches, inputs)
}

fn write_matches<W: WriteColor>(
    out: &mut W,
    matches: &[SuffixMatch],
    inputs: &[String],
) -> io::Result<()> {
    for m in matches {
        let name = inputs
            .get(m.sequence.index())
            .map(String::as_str)
            .unwrap_or("?");

        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(out, "{}", name)?;
        out.reset()?;
        write!(out, ":")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "{}", m.offset)?;
        out.reset()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::SequenceId;
    use termcolor::NoColor;

    #[test]
    fn test_write_matches() {
        let matches = [
            SuffixMatch { sequence: SequenceId(0), offset: 1, global_position: 1 },
            SuffixMatch { sequence: SequenceId(1), offset: 0, global_position: 7 },
        ];
        let inputs = vec!["a.txt".to_string(), "b.txt".to_string()];

        let mut out = NoColor::new(Vec::new());
        write_matches(&mut out, &matches, &inputs).unwrap();

        assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "a.txt:1\nb.txt:0\n");
    }

    #[test]
    fn test_write_stats() {
        let stats = TreeStats { leaf_count: 7, ..Default::default() };

        let mut out = NoColor::new(Vec::new());
        write_stats(&mut out, &stats).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.starts_with("Tree Statistics\n"));
        assert!(text.contains("Leaves:           7\n"));
    }
}
