// 📄 Workbook Access - calamine wrapper
// Reads year labels and numeric rows out of the source xlsx. Strict: any
// missing or non-numeric cell inside the layout's span is fatal, no partial
// output.

use anyhow::{bail, Context, Result};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;

use crate::layout::{SheetLayout, SourceCategory};

/// Open workbook + first worksheet, as the provider exports it
pub struct SourceSheet {
    /// Worksheet name, for diagnostics
    pub name: String,

    /// Full cell range of the first worksheet
    pub range: Range<Data>,
}

/// Open the workbook at `path` and load its first worksheet
pub fn open_sheet<P: AsRef<Path>>(path: P) -> Result<SourceSheet> {
    let path = path.as_ref();

    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open workbook: {:?}", path))?;

    let sheet_names = workbook.sheet_names();
    let name = sheet_names
        .first()
        .cloned()
        .with_context(|| format!("Workbook has no worksheets: {:?}", path))?;

    let range = workbook
        .worksheet_range(&name)
        .with_context(|| format!("Failed to read worksheet '{}' in {:?}", name, path))?;

    Ok(SourceSheet { name, range })
}

/// Read the year labels over the layout's column span
pub fn read_years(range: &Range<Data>, layout: &SheetLayout) -> Result<Vec<i32>> {
    let mut years = Vec::with_capacity(layout.column_count());

    for col in layout.first_col..=layout.last_col {
        let cell = cell_at(range, layout.years_row, col);
        let year = match cell {
            Some(Data::Int(i)) => *i as i32,
            Some(Data::Float(f)) if f.fract() == 0.0 => *f as i32,
            Some(Data::String(s)) => s.trim().parse::<i32>().with_context(|| {
                format!(
                    "Year cell at row {}, column {} is not a year: '{}'",
                    layout.years_row, col, s
                )
            })?,
            other => bail!(
                "Year cell at row {}, column {} is not numeric: {:?}",
                layout.years_row,
                col,
                other
            ),
        };
        years.push(year);
    }

    Ok(years)
}

/// Read one numeric row (a category or the total) over the column span
pub fn read_row(range: &Range<Data>, row: u32, layout: &SheetLayout) -> Result<Vec<f64>> {
    let mut values = Vec::with_capacity(layout.column_count());

    for col in layout.first_col..=layout.last_col {
        let value = match cell_at(range, row, col) {
            Some(Data::Int(i)) => *i as f64,
            Some(Data::Float(f)) => *f,
            other => bail!(
                "Cell at row {}, column {} is not numeric: {:?}",
                row,
                col,
                other
            ),
        };
        values.push(value);
    }

    Ok(values)
}

/// Cross-check the sheet's header column against the layout's category rows
///
/// Only rows whose header cell holds text are checked; a sheet without header
/// labels passes. A present-but-wrong label means the layout no longer matches
/// the export and extraction must not proceed.
pub fn validate_labels(range: &Range<Data>, layout: &SheetLayout) -> Result<()> {
    if layout.first_col < 2 {
        // No header column to the left of the data span
        return Ok(());
    }
    let label_col = layout.first_col - 1;

    for category in SourceCategory::ALL {
        let row = layout.category_row(category)?;
        if let Some(Data::String(s)) = cell_at(range, row, label_col) {
            let found = s.trim().to_lowercase();
            let expected = category.label().to_lowercase();
            if !found.contains(&expected) {
                bail!(
                    "Sheet layout drift: row {} is labeled '{}', expected '{}'",
                    row,
                    s.trim(),
                    category.label()
                );
            }
        }
    }

    Ok(())
}

/// First `n` rows rendered for the inspect mode
pub fn preview(range: &Range<Data>, n: usize) -> Vec<String> {
    range
        .rows()
        .take(n)
        .enumerate()
        .map(|(i, row)| {
            let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            format!("Row {}: [{}]", i + 1, cells.join(", "))
        })
        .collect()
}

/// Cell lookup translating the layout's 1-based positions to calamine's
/// 0-based absolute coordinates
fn cell_at(range: &Range<Data>, row: u32, col: u32) -> Option<&Data> {
    range.get_value((row - 1, col - 1))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Small 3-year sheet in the provider's shape (years row 3, cols B..D)
    fn test_range() -> Range<Data> {
        let mut range = Range::new((0, 0), (9, 3));
        let mut layout = SheetLayout::default();
        layout.last_col = 4;

        for (i, year) in [2010i64, 2011, 2012].iter().enumerate() {
            let col = layout.first_col - 1 + i as u32;
            range.set_value((2, col), Data::Int(*year));
            range.set_value((3, col), Data::Float(900.0 + i as f64)); // Jewellery
            range.set_value((4, col), Data::Float(500.0)); // Central Banks
            range.set_value((5, col), Data::Float(100.0)); // Private Investment
            range.set_value((6, col), Data::Float(600.0)); // Bars & Coins
            range.set_value((7, col), Data::Float(200.0)); // ETFs
            range.set_value((8, col), Data::Float(300.0)); // Other
            range.set_value((9, col), Data::Float(3000.0)); // Total
        }

        range.set_value((3, 0), Data::String("Jewellery".to_string()));
        range.set_value((4, 0), Data::String("Central Banks".to_string()));
        range
    }

    fn three_year_layout() -> SheetLayout {
        let mut layout = SheetLayout::default();
        layout.last_col = 4;
        layout
    }

    #[test]
    fn test_read_years() {
        let layout = three_year_layout();
        let years = read_years(&test_range(), &layout).unwrap();
        assert_eq!(years, vec![2010, 2011, 2012]);
    }

    #[test]
    fn test_read_years_rejects_text_cell() {
        let layout = three_year_layout();
        let mut range = test_range();
        range.set_value((2, 2), Data::String("n/a".to_string()));

        let result = read_years(&range, &layout);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_row_jewellery() {
        let layout = three_year_layout();
        let values = read_row(&test_range(), 4, &layout).unwrap();
        assert_eq!(values, vec![900.0, 901.0, 902.0]);
    }

    #[test]
    fn test_read_row_rejects_empty_cell() {
        let layout = three_year_layout();
        let mut range = test_range();
        range.set_value((9, 2), Data::Empty);

        let result = read_row(&range, 10, &layout);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_labels_accepts_matching_sheet() {
        let layout = three_year_layout();
        assert!(validate_labels(&test_range(), &layout).is_ok());
    }

    #[test]
    fn test_validate_labels_catches_drift() {
        let layout = three_year_layout();
        let mut range = test_range();
        // A shifted export: row 4 now holds central bank data
        range.set_value((3, 0), Data::String("Central Banks".to_string()));

        let result = validate_labels(&range, &layout);
        assert!(result.is_err());
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("drift"));
    }

    #[test]
    fn test_validate_labels_skips_unlabeled_rows() {
        let layout = three_year_layout();
        let mut range = test_range();
        range.set_value((3, 0), Data::Empty);
        range.set_value((4, 0), Data::Empty);

        assert!(validate_labels(&range, &layout).is_ok());
    }

    #[test]
    fn test_preview_renders_rows() {
        let rows = preview(&test_range(), 3);
        assert_eq!(rows.len(), 3);
        assert!(rows[2].starts_with("Row 3:"));
        assert!(rows[2].contains("2010"));
    }

    #[test]
    fn test_open_sheet_missing_file_is_fatal() {
        let result = open_sheet("no/such/workbook.xlsx");
        assert!(result.is_err());
    }
}
