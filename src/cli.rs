use crate::report::ReportFormat;
use crate::sampler::DEFAULT_BAND_COUNT;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_band_count_argument(command);
        Self::register_report_format_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_band_count_argument(command: Command) -> Command {
        command.arg(Self::create_band_count_argument())
    }

    fn register_report_format_argument(command: Command) -> Command {
        command.arg(Self::create_report_format_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the striped input image")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_band_count_argument() -> Arg {
        arg!(band_count: -n --bands <BANDS> "Number of equally sized bands in the image")
            .default_value(DEFAULT_BAND_COUNT.to_string())
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64))
    }

    fn create_report_format_argument() -> Arg {
        arg!(report_format: -f --format <FORMAT> "Format of the band report")
            .default_value("text")
            .value_parser(value_parser!(ReportFormat))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            band_count: Self::extract_band_count_argument(matches),
            report_format: Self::extract_report_format_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_band_count_argument(matches: &ArgMatches) -> i64 {
        matches
            .get_one::<i64>("band_count")
            .expect("Band count must be provided, but was unset.")
            .to_owned()
    }

    fn extract_report_format_argument(matches: &ArgMatches) -> ReportFormat {
        matches
            .get_one::<ReportFormat>("report_format")
            .expect("Report format must be provided, but was unset.")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
