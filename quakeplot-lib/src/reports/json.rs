use crate::Result;
use crate::analysis::YearStats;
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(stats: &[YearStats], writer: &mut W) -> Result<()> {
    let output = json!({
        "years": stats,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_empty() {
        let mut output = String::new();
        generate(&[], &mut output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed["years"].is_array());
        assert_eq!(parsed["years"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_generate_years() {
        let stats = [
            YearStats {
                year: 2000,
                count: 1,
                average_magnitude: 2.5,
            },
            YearStats {
                year: 2001,
                count: 2,
                average_magnitude: 3.25,
            },
        ];

        let mut output = String::new();
        generate(&stats, &mut output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["years"][0]["year"], 2000);
        assert_eq!(parsed["years"][0]["count"], 1);
        assert_eq!(parsed["years"][0]["average_magnitude"], 2.5);
        assert_eq!(parsed["years"][1]["year"], 2001);
        assert_eq!(parsed["years"][1]["average_magnitude"], 3.25);
    }

    #[test]
    fn test_generate_pretty_formatting() {
        let stats = [YearStats {
            year: 2000,
            count: 1,
            average_magnitude: 2.5,
        }];

        let mut output = String::new();
        generate(&stats, &mut output).unwrap();
        assert!(output.contains('\n'));
        assert!(output.contains("  "));
    }
}
