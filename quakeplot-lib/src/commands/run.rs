//! Command dispatch logic for quakeplot

use super::{InitArgs, PlotArgs, ValidateArgs, init_config, process_plot, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "quakeplot", version, author, long_about = None)]
#[command(about = "Chart yearly earthquake counts and magnitudes from a seismic event catalog")]
#[command(args_conflicts_with_subcommands = true)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Option<QuakeSubcommand>,

    #[command(flatten)]
    plot: PlotArgs,
}

#[derive(Subcommand, Debug)]
enum QuakeSubcommand {
    /// Fetch the event catalog and write the yearly charts (the default)
    Plot(Box<PlotArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// Without a subcommand the arguments are treated as `plot` arguments, so a bare
/// `quakeplot` runs the whole pipeline with defaults.
///
/// # Errors
///
/// Returns an error if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);

    match &cli.command {
        None => process_plot(host, &cli.plot).await,
        Some(QuakeSubcommand::Plot(plot_args)) => process_plot(host, plot_args).await,
        Some(QuakeSubcommand::Init(init_args)) => init_config(host, init_args),
        Some(QuakeSubcommand::Validate(validate_args)) => validate_config(host, validate_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::YearBasis;
    use crate::commands::common::{ColorMode, LogLevel};
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_defaults_to_plot() {
        let cli = Cli::try_parse_from(["quakeplot"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.plot.output_dir, ".");
        assert_eq!(cli.plot.log_level, LogLevel::None);
        assert_eq!(cli.plot.color, ColorMode::Auto);
        assert_eq!(cli.plot.year_basis, None);
        assert!(!cli.plot.console);
    }

    #[test]
    fn test_top_level_plot_options() {
        let cli = Cli::try_parse_from(["quakeplot", "--output-dir", "charts", "--year-basis", "local", "--console"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.plot.output_dir, "charts");
        assert_eq!(cli.plot.year_basis, Some(YearBasis::Local));
        assert!(cli.plot.console);
    }

    #[test]
    fn test_plot_subcommand() {
        let cli = Cli::try_parse_from(["quakeplot", "plot", "-c", "custom.toml", "--json", "out.json"]).unwrap();
        let Some(QuakeSubcommand::Plot(args)) = cli.command else {
            panic!("expected the plot subcommand");
        };
        assert_eq!(args.config.as_deref().map(camino::Utf8Path::as_str), Some("custom.toml"));
        assert_eq!(args.json.as_deref().map(camino::Utf8Path::as_str), Some("out.json"));
    }

    #[test]
    fn test_init_subcommand() {
        let cli = Cli::try_parse_from(["quakeplot", "init", "my.toml"]).unwrap();
        let Some(QuakeSubcommand::Init(args)) = cli.command else {
            panic!("expected the init subcommand");
        };
        assert_eq!(args.output.as_deref().map(camino::Utf8Path::as_str), Some("my.toml"));
    }

    #[test]
    fn test_validate_subcommand() {
        let cli = Cli::try_parse_from(["quakeplot", "validate"]).unwrap();
        let Some(QuakeSubcommand::Validate(args)) = cli.command else {
            panic!("expected the validate subcommand");
        };
        assert!(args.config.is_none());
    }

    #[test]
    fn test_unknown_year_basis_rejected() {
        let _ = Cli::try_parse_from(["quakeplot", "--year-basis", "mars"]).unwrap_err();
    }
}
