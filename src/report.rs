use std::io::Write;

use clap::builder::PossibleValue;
use clap::ValueEnum;

use crate::sampler::BandResult;
use crate::{Error, Result};

const CSV_HEADER: &str = "band,red,green,blue";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReportFormat {
    Text,
    Csv,
}

impl ValueEnum for ReportFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Text, Self::Csv]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Text => Some(PossibleValue::new("text").help("Band <i>: RGB(<r>, <g>, <b>)")),
            Self::Csv => Some(PossibleValue::new("csv").help("band,red,green,blue rows")),
        }
    }
}

pub fn write_report<W: Write>(
    writer: &mut W,
    results: &[BandResult],
    format: ReportFormat,
) -> Result<()> {
    let written = match format {
        ReportFormat::Text => write_text(writer, results),
        ReportFormat::Csv => write_csv(writer, results),
    };
    written
        .and_then(|_| writer.flush())
        .map_err(Error::FailedToWriteReport)
}

fn write_text<W: Write>(writer: &mut W, results: &[BandResult]) -> std::io::Result<()> {
    for result in results {
        writeln!(writer, "{}", result)?;
    }
    Ok(())
}

fn write_csv<W: Write>(writer: &mut W, results: &[BandResult]) -> std::io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for result in results {
        let color = result.color();
        writeln!(
            writer,
            "{},{},{},{}",
            result.index(),
            color.red(),
            color.green(),
            color.blue()
        )?;
    }
    Ok(())
}
