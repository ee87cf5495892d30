// ⚗️ Extraction - raw sheet rows → YearRecords
// Pure transformation: percentages against the sheet's own Total row and the
// cube-root volume metric.
//
// Known quirk, preserved on purpose: ETFs and Private Investment are counted
// in totalGold but not emitted as slices, so the 4 exported percentages do
// not sum to 100. The visualization depends on the totals matching the
// provider's sheet, so do not "fix" this here.

use anyhow::{bail, Context, Result};

use crate::layout::{SheetLayout, SourceCategory};
use crate::model::{Category, CategorySlice, YearRecord};
use crate::sheet::{self, SourceSheet};

/// Density of gold in tonnes per cubic meter
pub const GOLD_TONNES_PER_M3: f64 = 19_300.0;

// ============================================================================
// RAW SHEET DATA
// ============================================================================

/// One full read of the source sheet, aligned by column index
#[derive(Debug, Clone)]
pub struct RawSheetData {
    pub years: Vec<i32>,
    pub jewellery: Vec<f64>,
    pub central_banks: Vec<f64>,
    pub bars_coins: Vec<f64>,
    pub other: Vec<f64>,
    pub totals: Vec<f64>,
}

impl RawSheetData {
    /// Read all required rows from an opened worksheet
    ///
    /// ETFs and Private Investment rows are read too, to keep the cell-level
    /// strictness over the whole contract range, but only the 4 exported
    /// categories and the total are retained.
    pub fn read(source: &SourceSheet, layout: &SheetLayout) -> Result<Self> {
        layout.validate()?;
        sheet::validate_labels(&source.range, layout)?;

        let years = sheet::read_years(&source.range, layout)
            .with_context(|| format!("Reading years from sheet '{}'", source.name))?;

        let read_category = |category: SourceCategory| -> Result<Vec<f64>> {
            let row = layout.category_row(category)?;
            sheet::read_row(&source.range, row, layout)
                .with_context(|| format!("Reading '{}' row", category.label()))
        };

        let jewellery = read_category(SourceCategory::Jewellery)?;
        let central_banks = read_category(SourceCategory::CentralBanks)?;
        read_category(SourceCategory::PrivateInvestment)?;
        let bars_coins = read_category(SourceCategory::BarsAndCoins)?;
        read_category(SourceCategory::Etfs)?;
        let other = read_category(SourceCategory::Other)?;

        let totals = sheet::read_row(&source.range, layout.total_row, layout)
            .context("Reading 'Total' row")?;

        Ok(RawSheetData {
            years,
            jewellery,
            central_banks,
            bars_coins,
            other,
            totals,
        })
    }
}

// ============================================================================
// TRANSFORMATION
// ============================================================================

/// Build the full timeline, one YearRecord per year column, in column order
pub fn build_timeline(raw: &RawSheetData) -> Result<Vec<YearRecord>> {
    let n = raw.years.len();
    for (name, row) in [
        ("Jewellery", &raw.jewellery),
        ("Central Banks", &raw.central_banks),
        ("Bars & Coins", &raw.bars_coins),
        ("Other", &raw.other),
        ("Total", &raw.totals),
    ] {
        if row.len() != n {
            bail!(
                "Row '{}' has {} values but there are {} years",
                name,
                row.len(),
                n
            );
        }
    }

    let mut timeline = Vec::with_capacity(n);

    for i in 0..n {
        let total_gold = raw.totals[i];
        if total_gold <= 0.0 {
            bail!(
                "Total gold for year {} is {} (must be positive)",
                raw.years[i],
                total_gold
            );
        }

        let tonnes_for = |category: Category| match category {
            Category::Jewellery => raw.jewellery[i],
            Category::BarsAndCoins => raw.bars_coins[i],
            Category::CentralBanks => raw.central_banks[i],
            Category::Other => raw.other[i],
        };

        let categories = Category::ALL
            .iter()
            .map(|&category| {
                let tonnes = tonnes_for(category);
                CategorySlice {
                    name: category.name().to_string(),
                    tonnes: round0(tonnes),
                    percentage: round1(100.0 * tonnes / total_gold),
                    color: category.color().to_string(),
                    description: category.description().to_string(),
                }
            })
            .collect();

        timeline.push(YearRecord {
            year: raw.years[i],
            total_gold: round0(total_gold),
            cube_size: round2(cube_size(total_gold)),
            categories,
        });
    }

    Ok(timeline)
}

/// Edge length of a cube of pure gold holding `total_gold` tonnes, in meters
pub fn cube_size(total_gold: f64) -> f64 {
    (total_gold / GOLD_TONNES_PER_M3).cbrt()
}

pub fn round0(x: f64) -> f64 {
    x.round()
}

pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// ============================================================================
// TESTS
// ============================================================================
