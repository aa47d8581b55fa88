use super::ExportRow;
use crate::errors::{CalcError, CalcResult};

/// Serialize export rows as comma-delimited text. The header row comes
/// from the serde field names, which carry the exact column contract.
pub fn to_csv(rows: &[ExportRow]) -> CalcResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| CalcError::Export(e.to_string()))
}
