//! Output writers for scored matches.

use crate::report::CsvSummaryRow;
use crate::types::OutputFormat;
use scorekeeper::MatchRecord;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct OutputWriter {
    format: OutputFormat,
    records_writer: BufWriter<File>,
    csv_writer: csv::Writer<BufWriter<File>>,
    records_path: PathBuf,
    csv_path: PathBuf,
    /// Buffered for `--output-format json`, written as one array on finish.
    pending: Vec<MatchRecord>,
}

fn create(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

impl OutputWriter {
    pub fn new(output_dir: &Path, format: OutputFormat) -> Result<Self, Box<dyn std::error::Error>> {
        std::fs::create_dir_all(output_dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let extension = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let records_path = output_dir.join(format!("matches_{timestamp}.{extension}"));
        let records_writer = BufWriter::new(create(&records_path)?);

        let csv_path = output_dir.join(format!("matches_{timestamp}_summary.csv"));
        let csv_writer = csv::Writer::from_writer(BufWriter::new(create(&csv_path)?));

        Ok(Self {
            format,
            records_writer,
            csv_writer,
            records_path,
            csv_path,
            pending: Vec::new(),
        })
    }

    pub fn write_match(&mut self, record: &MatchRecord) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Jsonl => {
                let json = serde_json::to_string(record)?;
                writeln!(self.records_writer, "{}", json)?;
                self.records_writer.flush()?;
            }
            OutputFormat::Json => self.pending.push(record.clone()),
        }

        self.csv_writer.serialize(CsvSummaryRow::from(record))?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if matches!(self.format, OutputFormat::Json) {
            serde_json::to_writer_pretty(&mut self.records_writer, &self.pending)?;
            writeln!(self.records_writer)?;
        }
        self.records_writer.flush()?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (&Path, &Path) {
        (&self.records_path, &self.csv_path)
    }
}
