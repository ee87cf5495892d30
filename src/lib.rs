// Gold Stocks - Core Library
// Extracts above-ground gold stock data from the provider's workbook and
// renders the data.js artifact for the visualization front end.
// Exposes all modules for use in the CLI, the static server, and tests.

pub mod model;
pub mod layout;
pub mod sheet;
pub mod extract;
pub mod emit;

// Re-export commonly used types
pub use model::{Category, CategorySlice, YearRecord};
pub use layout::{SheetLayout, SourceCategory};
pub use sheet::{open_sheet, SourceSheet};
pub use extract::{build_timeline, cube_size, RawSheetData, GOLD_TONNES_PER_M3};
pub use emit::render_script;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
