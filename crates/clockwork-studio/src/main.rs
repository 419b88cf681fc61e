use clap::Parser;

use clockwork_engine::logging::{init_logging, LoggingConfig};
use clockwork_face::{ClockApplication, FixedTimeSource, TimeSample};

/// Analog clock window.
///
/// Shows the local time, or a frozen face when a time is given.
#[derive(Parser, Debug)]
#[command(name = "clockwork-studio")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Fixed time to show instead of the local clock (24-hour).
    #[arg(value_name = "HH:MM[:SS]")]
    time: Option<TimeSample>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(LoggingConfig::default());

    let app = ClockApplication::new().title("Clockwork");

    match cli.time {
        None => app.run(),
        Some(time) => {
            log::info!("showing fixed time {time}");
            app.title(format!("Clockwork ({time})"))
                .run_with_source(FixedTimeSource(time))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("clockwork-studio").chain(args.iter().copied()))
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_argument_shows_local_time() {
        assert_eq!(parse(&[]).expect("parses").time, None);
    }

    #[test]
    fn time_argument_goes_through_from_str() {
        let cli = parse(&["10:43:23"]).expect("parses");
        assert_eq!(cli.time, Some(TimeSample::PREVIEW));
    }

    #[test]
    fn bad_times_are_usage_errors() {
        for arg in ["noon", "+5:+3", "25:00"] {
            let err = parse(&[arg]).expect_err(arg);
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation, "{arg}");
        }
    }

    #[test]
    fn help_is_handled_by_clap() {
        let err = parse(&["--help"]).expect_err("help exits early");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn extra_arguments_are_rejected() {
        assert!(parse(&["10:00", "11:00"]).is_err());
    }
}
