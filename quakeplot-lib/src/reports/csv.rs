use crate::Result;
use crate::analysis::YearStats;
use core::fmt::Write;

pub fn generate<W: Write>(stats: &[YearStats], writer: &mut W) -> Result<()> {
    writeln!(writer, "year,count,average_magnitude")?;

    for stat in stats {
        writeln!(writer, "{},{},{}", stat.year, stat.count, stat.average_magnitude)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_empty() {
        let mut output = String::new();
        generate(&[], &mut output).unwrap();
        assert_eq!(output, "year,count,average_magnitude\n");
    }

    #[test]
    fn test_generate_rows() {
        let stats = [
            YearStats {
                year: 2000,
                count: 1,
                average_magnitude: 2.5,
            },
            YearStats {
                year: 2001,
                count: 4,
                average_magnitude: 3.0,
            },
        ];

        let mut output = String::new();
        generate(&stats, &mut output).unwrap();
        assert_eq!(output, "year,count,average_magnitude\n2000,1,2.5\n2001,4,3\n");
    }

    #[test]
    fn test_generate_keeps_full_precision() {
        let stats = [YearStats {
            year: 2010,
            count: 3,
            average_magnitude: 1.0 / 3.0,
        }];

        let mut output = String::new();
        generate(&stats, &mut output).unwrap();
        let row = output.lines().nth(1).unwrap();
        let value: f64 = row.rsplit(',').next().unwrap().parse().unwrap();
        assert!((value - 1.0 / 3.0).abs() < 1e-12);
    }
}
