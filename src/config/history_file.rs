use crate::domain::model::HistoryEntry;
use crate::utils::error::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 從 CSV 檔案載入船長航行紀錄 (欄位: zone,profit)
pub fn load_history_csv<P: AsRef<Path>>(path: P) -> Result<Vec<HistoryEntry>> {
    let path = path.as_ref();
    tracing::debug!("Reading voyage history from: {}", path.display());
    let file = File::open(path)?;
    parse_history_csv(file)
}

pub fn parse_history_csv<R: Read>(reader: R) -> Result<Vec<HistoryEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut history = Vec::new();
    for record in csv_reader.deserialize() {
        let entry: HistoryEntry = record?;
        history.push(entry);
    }

    tracing::debug!("Loaded {} past voyages", history.len());
    Ok(history)
}
