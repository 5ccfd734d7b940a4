//! Per-step rows for CSV export.
use anyhow::Result;
use csv::WriterBuilder;
use rotor_core::record::Record;
use serde::Serialize;
use std::{convert::TryFrom, path::Path};

/// One decision step as written to CSV.
#[derive(Debug, Serialize, PartialEq)]
pub struct StepRecord {
    episode: usize,
    step: usize,
    reward: f32,
    distance: f32,
    time: f32,
    x: f32,
    y: f32,
    z: f32,
}

impl TryFrom<&Record> for StepRecord {
    type Error = anyhow::Error;

    fn try_from(record: &Record) -> Result<Self> {
        Ok(Self {
            episode: record.get_scalar("episode")? as _,
            step: record.get_scalar("step")? as _,
            reward: record.get_scalar("reward")?,
            distance: record.get_scalar("distance")?,
            time: record.get_scalar("time")?,
            x: record.get_scalar("x")?,
            y: record.get_scalar("y")?,
            z: record.get_scalar("z")?,
        })
    }
}

/// Writes the records as CSV with a header row.
pub fn write_csv<'a>(
    path: impl AsRef<Path>,
    records: impl Iterator<Item = &'a Record>,
) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_path(path)?;
    for record in records {
        wtr.serialize(StepRecord::try_from(record)?)?;
    }
    wtr.flush()?;
    Ok(())
}
