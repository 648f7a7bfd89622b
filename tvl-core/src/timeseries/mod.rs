/// Ascending timestamp grids at a chart resolution.
pub mod grid;
/// Display range bounds and their clamping to data availability.
pub mod range;
