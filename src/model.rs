// 🥇 Data Model - YearRecord / CategorySlice
// Wire types consumed by the browser-side visualization (data.js)

use serde::{Deserialize, Serialize};

// ============================================================================
// CATEGORIES
// ============================================================================

/// Category - the 4 gold-stock categories exported to the visualization
///
/// Labels, colors and descriptions are fixed constants, NOT derived from the
/// sheet headers. Output order is fixed: Jewellery, Bars & Coins,
/// Central Banks, Other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Jewellery,
    BarsAndCoins,
    CentralBanks,
    Other,
}

impl Category {
    /// All exported categories in output order
    pub const ALL: [Category; 4] = [
        Category::Jewellery,
        Category::BarsAndCoins,
        Category::CentralBanks,
        Category::Other,
    ];

    /// Display label used in the output literal
    pub fn name(&self) -> &'static str {
        match self {
            Category::Jewellery => "Jewellery",
            Category::BarsAndCoins => "Bars & Coins",
            Category::CentralBanks => "Central Banks",
            Category::Other => "Other",
        }
    }

    /// Fixed hex color per category
    pub fn color(&self) -> &'static str {
        match self {
            Category::Jewellery => "#FFD700",
            Category::BarsAndCoins => "#FFA500",
            Category::CentralBanks => "#DAA520",
            Category::Other => "#B8860B",
        }
    }

    /// Fixed descriptive text per category
    pub fn description(&self) -> &'static str {
        match self {
            Category::Jewellery => "Gold used in jewelry and ornaments",
            Category::BarsAndCoins => "Physical investment gold in bar and coin form",
            Category::CentralBanks => "Official gold reserves held by central banks",
            Category::Other => "Electronics, dentistry, and other industrial uses",
        }
    }
}

// ============================================================================
// RECORDS
// ============================================================================

/// One slice of a year's gold distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    /// One of the 4 fixed labels
    pub name: String,

    /// Tonnes, rounded to 0 decimals
    pub tonnes: f64,

    /// Share of the year's total, rounded to 1 decimal
    ///
    /// Slices do not sum to 100: ETFs and Private Investment are counted in
    /// the total but not exported as slices.
    pub percentage: f64,

    /// Fixed hex color
    pub color: String,

    /// Fixed descriptive text
    pub description: String,
}

/// One calendar year of above-ground gold stock data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    /// Calendar year, unique, ascending by sheet column order
    pub year: i32,

    /// The sheet's own Total row value in tonnes, rounded to 0 decimals
    pub total_gold: f64,

    /// Edge length in meters of a cube holding the year's total gold,
    /// rounded to 2 decimals
    pub cube_size: f64,

    /// Exactly 4 slices, in `Category::ALL` order
    pub categories: Vec<CategorySlice>,
}
