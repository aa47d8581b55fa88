use super::{ExportRow, COLUMNS};
use crate::errors::CalcResult;
use rust_xlsxwriter::{Format, Workbook};

/// Serialize export rows as a single-worksheet XLSX workbook, same
/// header and column order as the delimited export.
pub fn to_xlsx(rows: &[ExportRow]) -> CalcResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name("EMV")?;

    for (col, name) in COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &bold)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, &row.alternative)?;
        sheet.write_number(r, 1, row.scenario as f64)?;
        sheet.write_number(r, 2, row.probability)?;
        sheet.write_number(r, 3, row.units as f64)?;
        sheet.write_number(r, 4, row.unit_price)?;
        sheet.write_number(r, 5, row.revenue)?;
        sheet.write_number(r, 6, row.fixed_cost)?;
        sheet.write_number(r, 7, row.expected_value)?;
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::defaults::ParameterDefaults;
    use crate::collect::ParameterCollector;
    use crate::export::build_rows;
    use crate::session::{run_pass, EvaluateRequest};

    #[test]
    fn test_workbook_is_a_zip_container() {
        let collector = ParameterCollector::new(ParameterDefaults::default());
        let report = run_pass(&collector, &EvaluateRequest::defaults());
        let bytes = to_xlsx(&build_rows(&report)).unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK", "xlsx must be a zip archive");
    }
}
