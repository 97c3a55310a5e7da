use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::RestampError;
use crate::plan::{self, PlanEntry};
use crate::slots;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    fn delimiter(self) -> u8 {
        match self {
            ExportFormat::Csv => b',',
            ExportFormat::Tsv => b'\t',
        }
    }
}

/// Column order is an external contract; downstream spreadsheets key on it.
pub const EXPORT_COLUMNS: [&str; 11] = [
    "Order",
    "Category",
    "CatIndex",
    "Slot",
    "OffsetSec",
    "Name",
    "EffectiveName",
    "Payload",
    "LocalTime",
    "UTC",
    "FullPath",
];

/// Write the plan, newest to oldest, to restamp-dryrun.{csv,tsv} under
/// out_dir. Returns the path written.
pub fn write_plan(
    entries: &[PlanEntry],
    base_path: &Path,
    out_dir: &Path,
    format: ExportFormat,
) -> Result<PathBuf, RestampError> {
    let out_path = out_dir.join(format!("restamp-dryrun.{}", format.extension()));

    let mut writer = csv::WriterBuilder::new()
        .delimiter(format.delimiter())
        .from_path(&out_path)?;
    writer.write_record(EXPORT_COLUMNS)?;

    for (idx, entry) in plan::sorted_newest_first(entries).iter().enumerate() {
        let payload = slots::payload_for_effective(&entry.effective);
        let local_str = entry
            .instant
            .with_timezone(&Local)
            .format("%m/%d/%Y %H:%M:%S %Z")
            .to_string();
        let utc_str = entry.instant.format("%Y-%m-%d %H:%M:%S UTC").to_string();
        let full_path = base_path.join(&entry.name);

        writer.write_record([
            (idx + 1).to_string(),
            entry.label.clone(),
            entry.rank.to_string(),
            entry.slot.to_string(),
            entry.offset_seconds.to_string(),
            entry.name.clone(),
            entry.effective.clone(),
            payload,
            local_str,
            utc_str,
            full_path.display().to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(out_path)
}
