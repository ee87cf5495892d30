// 🗺️ Sheet Layout - layout as data
// Named row/column mapping for the source workbook, replacing the original
// positional constants ("row 3 is years, row 10 is total") so layout drift
// fails loudly instead of silently.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// ============================================================================
// SOURCE CATEGORIES
// ============================================================================

/// SourceCategory - the 6 category rows present in the source sheet
///
/// Two of these (ETFs, Private Investment) are read for validation purposes
/// only; the sheet's Total row is addressed separately via `total_row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceCategory {
    Jewellery,
    CentralBanks,
    PrivateInvestment,
    BarsAndCoins,
    Etfs,
    Other,
}

impl SourceCategory {
    /// All source category rows, in sheet order
    pub const ALL: [SourceCategory; 6] = [
        SourceCategory::Jewellery,
        SourceCategory::CentralBanks,
        SourceCategory::PrivateInvestment,
        SourceCategory::BarsAndCoins,
        SourceCategory::Etfs,
        SourceCategory::Other,
    ];

    /// Label as it appears in the sheet's header column
    pub fn label(&self) -> &'static str {
        match self {
            SourceCategory::Jewellery => "Jewellery",
            SourceCategory::CentralBanks => "Central Banks",
            SourceCategory::PrivateInvestment => "Private Investment",
            SourceCategory::BarsAndCoins => "Bars & Coins",
            SourceCategory::Etfs => "ETFs",
            SourceCategory::Other => "Other",
        }
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

/// SheetLayout - where each piece of data lives in the workbook
///
/// Rows and columns are 1-based, as spreadsheet users see them. Loadable from
/// a JSON file so a re-exported sheet with a shifted layout only needs a new
/// mapping, not a code change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Row holding the year labels
    pub years_row: u32,

    /// First data column (inclusive)
    pub first_col: u32,

    /// Last data column (inclusive)
    pub last_col: u32,

    /// Row per source category
    pub category_rows: BTreeMap<SourceCategory, u32>,

    /// Row holding the sheet's own "Total" values
    pub total_row: u32,
}

impl Default for SheetLayout {
    /// The known contract with the data provider: years in row 3 over
    /// columns B..P, category rows 4-9, total in row 10.
    fn default() -> Self {
        let mut category_rows = BTreeMap::new();
        category_rows.insert(SourceCategory::Jewellery, 4);
        category_rows.insert(SourceCategory::CentralBanks, 5);
        category_rows.insert(SourceCategory::PrivateInvestment, 6);
        category_rows.insert(SourceCategory::BarsAndCoins, 7);
        category_rows.insert(SourceCategory::Etfs, 8);
        category_rows.insert(SourceCategory::Other, 9);

        SheetLayout {
            years_row: 3,
            first_col: 2,
            last_col: 16,
            category_rows,
            total_row: 10,
        }
    }
}

impl SheetLayout {
    /// Load a layout mapping from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read layout file: {:?}", path.as_ref()))?;

        let layout: SheetLayout =
            serde_json::from_str(&content).context("Failed to parse layout JSON")?;

        layout.validate()?;
        Ok(layout)
    }

    /// Number of data columns (one per year)
    pub fn column_count(&self) -> usize {
        (self.last_col - self.first_col + 1) as usize
    }

    /// Row for a given source category
    ///
    /// Only fails on a layout that skipped `validate()`.
    pub fn category_row(&self, category: SourceCategory) -> Result<u32> {
        self.category_rows
            .get(&category)
            .copied()
            .with_context(|| format!("Layout has no row for category '{}'", category.label()))
    }

    /// Check the mapping is internally consistent
    pub fn validate(&self) -> Result<()> {
        if self.years_row == 0 || self.total_row == 0 || self.first_col == 0 {
            bail!("Layout rows and columns are 1-based; 0 is not a valid position");
        }

        if self.first_col > self.last_col {
            bail!(
                "Layout column span is empty: first_col {} > last_col {}",
                self.first_col,
                self.last_col
            );
        }

        for category in SourceCategory::ALL {
            let row = self.category_row(category)?;
            if row == 0 {
                bail!("Row for category '{}' is 0 (rows are 1-based)", category.label());
            }
            if row == self.years_row || row == self.total_row {
                bail!(
                    "Row {} for category '{}' collides with the years or total row",
                    row,
                    category.label()
                );
            }
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
