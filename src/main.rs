use std::env::args_os;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use band_sampler::{sample_image_bands, write_report, CLIParser, Error};

fn report_failure(e: Error) -> ExitCode {
    log::debug!("{:?}", e);
    eprintln!("Sampling failed because of: {}", e);
    ExitCode::from(e.kind().exit_code())
}

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let results = match sample_image_bands(&arguments) {
        Ok(results) => results,
        Err(e) => return report_failure(e),
    };
    let mut stdout = BufWriter::new(io::stdout().lock());
    match write_report(&mut stdout, &results, arguments.report_format()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => report_failure(e),
    }
}
