use super::Host;
use super::ProgressReporter;
use super::common::{ColorMode, LogLevel, init_logging};
use super::config::Config;
use crate::Result;
use crate::analysis::{YearBasis, average_series, count_series, group_magnitudes_by_year, yearly_stats};
use crate::catalog::{EventQuery, Provider};
use crate::reports::{LineChart, generate_console, generate_csv, generate_json, render_line_chart};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use ohno::IntoAppError;
use plotters::style::RGBColor;
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "      plot";

/// File name of the events-per-year chart
pub const COUNT_CHART_FILE: &str = "number_per_year.png";

/// File name of the average-magnitude-per-year chart
pub const AVERAGE_CHART_FILE: &str = "avg_magnitude_per_year.png";

const COUNT_CHART_COLOR: RGBColor = RGBColor(65, 105, 225);
const AVERAGE_CHART_COLOR: RGBColor = RGBColor(255, 140, 0);

#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Path to configuration file (default is `quakeplot.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Directory where the chart images are written
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub output_dir: Utf8PathBuf,

    /// Time zone used to assign events to calendar years (overrides the configuration file)
    #[arg(long, value_name = "BASIS")]
    pub year_basis: Option<YearBasis>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Print a per-year summary table to the terminal
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,

    /// Write the per-year summary to a CSV file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<Utf8PathBuf>,

    /// Write the per-year summary to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,
}

/// Fetch the event catalog, group magnitudes by year, and write both charts
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the catalog request fails, or
/// a chart or report file cannot be written
pub async fn process_plot<H: Host>(host: &mut H, args: &PlotArgs) -> Result<()> {
    init_logging(args.log_level);

    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    let year_basis = effective_year_basis(args, &config);
    log::debug!(target: LOG_TARGET, "Assigning events to years using {year_basis:?}");

    let provider = Provider::new(Some(&config.service_url), config.request_timeout)?;

    let progress = ProgressReporter::new(args.log_level == LogLevel::None, args.color.use_colors_for_stderr());
    progress.start("Fetching", "earthquake catalog");
    let records = provider.fetch_events(&EventQuery::default()).await;
    progress.done();
    let records = records?;

    if records.is_empty() {
        log::warn!(target: LOG_TARGET, "The catalog returned no events; the charts will be empty");
    }

    let magnitudes = group_magnitudes_by_year(&records, year_basis);
    log::info!(
        target: LOG_TARGET,
        "Grouped {} magnitudes from {} records into {} years",
        magnitudes.total_magnitudes(),
        records.len(),
        magnitudes.len()
    );

    fs::create_dir_all(&args.output_dir).into_app_err_with(|| format!("creating output directory '{}'", args.output_dir))?;

    let (years, counts) = count_points(&count_series(&magnitudes));
    let count_chart = LineChart {
        title: "Number of Earthquakes per Year",
        x_label: "Year",
        y_label: "Number of Earthquakes",
        color: COUNT_CHART_COLOR,
        width: config.chart_width,
        height: config.chart_height,
    };
    let count_path = args.output_dir.join(COUNT_CHART_FILE);
    render_line_chart(&years, &counts, &count_chart, &count_path)?;
    let _ = writeln!(host.output(), "Wrote {count_path}");

    let (years, averages): (Vec<i32>, Vec<f64>) = average_series(&magnitudes).into_iter().unzip();
    let average_chart = LineChart {
        title: "Average Magnitude of Earthquakes per Year",
        y_label: "Average Magnitude",
        color: AVERAGE_CHART_COLOR,
        ..count_chart
    };
    let average_path = args.output_dir.join(AVERAGE_CHART_FILE);
    render_line_chart(&years, &averages, &average_chart, &average_path)?;
    let _ = writeln!(host.output(), "Wrote {average_path}");

    let stats = yearly_stats(&magnitudes);

    if args.console {
        let mut console_output = String::new();
        generate_console(&stats, args.color.use_colors_for_stdout(), &mut console_output)?;
        let _ = write!(host.output(), "{console_output}");
    }

    if let Some(filename) = &args.csv {
        let mut csv_output = String::new();
        generate_csv(&stats, &mut csv_output)?;
        fs::write(filename, csv_output).into_app_err_with(|| format!("writing CSV report to '{filename}'"))?;
        let _ = writeln!(host.output(), "Wrote {filename}");
    }

    if let Some(filename) = &args.json {
        let mut json_output = String::new();
        generate_json(&stats, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
        let _ = writeln!(host.output(), "Wrote {filename}");
    }

    Ok(())
}

/// The `--year-basis` flag wins over the configuration file.
fn effective_year_basis(args: &PlotArgs, config: &Config) -> YearBasis {
    args.year_basis.unwrap_or(config.year_basis)
}

#[expect(clippy::cast_precision_loss, reason = "yearly event counts are far below 2^52")]
fn count_points(series: &[(i32, usize)]) -> (Vec<i32>, Vec<f64>) {
    series.iter().map(|&(year, count)| (year, count as f64)).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot_args(year_basis: Option<YearBasis>) -> PlotArgs {
        PlotArgs {
            config: None,
            output_dir: Utf8PathBuf::from("."),
            year_basis,
            log_level: LogLevel::None,
            color: ColorMode::Never,
            console: false,
            csv: None,
            json: None,
        }
    }

    fn config_with(year_basis: YearBasis) -> Config {
        Config {
            year_basis,
            ..Config::default()
        }
    }

    #[test]
    fn test_year_basis_flag_overrides_config() {
        let config = config_with(YearBasis::Local);
        assert_eq!(effective_year_basis(&plot_args(Some(YearBasis::Utc)), &config), YearBasis::Utc);

        let config = config_with(YearBasis::Utc);
        assert_eq!(effective_year_basis(&plot_args(Some(YearBasis::Local)), &config), YearBasis::Local);
    }

    #[test]
    fn test_year_basis_defaults_to_config() {
        let config = config_with(YearBasis::Local);
        assert_eq!(effective_year_basis(&plot_args(None), &config), YearBasis::Local);

        let config: Config = toml::from_str("year_basis = \"local\"").unwrap();
        assert_eq!(effective_year_basis(&plot_args(None), &config), YearBasis::Local);

        assert_eq!(effective_year_basis(&plot_args(None), &Config::default()), YearBasis::Utc);
    }

    #[test]
    fn test_count_points() {
        let (years, counts) = count_points(&[(2000, 3), (2001, 0), (2005, 12)]);
        assert_eq!(years, vec![2000, 2001, 2005]);
        assert_eq!(counts, vec![3.0, 0.0, 12.0]);
    }

    #[test]
    fn test_count_points_empty() {
        let (years, counts) = count_points(&[]);
        assert!(years.is_empty());
        assert!(counts.is_empty());
    }
}
