//! Layout defaults and output naming.

/// Default chart canvas width (pixels). 8in at 100 dpi.
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;

/// Default chart canvas height (pixels). 6in at 100 dpi.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

/// Default number of tiles per composite row.
pub const DEFAULT_ROW_SIZE: usize = 2;

/// Decimal places used for point annotations.
pub const ANNOTATION_PRECISION: usize = 3;

/// File name of the cross-configuration comparison chart.
pub const COMPARISON_FILE: &str = "comparison.png";

/// Suffix appended to a configuration name for its composite image.
pub const COMBINED_SUFFIX: &str = "combined";
