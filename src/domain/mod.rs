pub mod color_mode;
pub mod image_report;
pub mod inspection;
pub mod pixel_value;
pub mod source;

// --- public re-exports ---
pub use color_mode::ColorMode;
pub use image_report::{ImageReport, InspectError};
pub use inspection::{inspect_file, inspect_files, InspectionOutcome, InspectionSummary};
pub use pixel_value::{CornerSamples, PixelValue};
