use crate::Result;
use crate::analysis::YearStats;
use core::fmt::Write;
use owo_colors::OwoColorize;

const HEADER: [&str; 3] = ["Year", "Events", "Avg Magnitude"];

pub fn generate<W: Write>(stats: &[YearStats], use_colors: bool, writer: &mut W) -> Result<()> {
    let header = format!("{:>6}  {:>8}  {:>13}", HEADER[0], HEADER[1], HEADER[2]);
    if use_colors {
        writeln!(writer, "{}", header.bold().cyan())?;
    } else {
        writeln!(writer, "{header}")?;
    }

    if stats.is_empty() {
        writeln!(writer, "{:>6}  {:>8}  {:>13}", "-", 0, "-")?;
        return Ok(());
    }

    for stat in stats {
        writeln!(writer, "{:>6}  {:>8}  {:>13.2}", stat.year, stat.count, stat.average_magnitude)?;
    }

    let total: usize = stats.iter().map(|s| s.count).sum();
    let total_line = format!("{:>6}  {:>8}", "Total", total);
    if use_colors {
        writeln!(writer, "{}", total_line.bold())?;
    } else {
        writeln!(writer, "{total_line}")?;
    }

    Ok(())
}
