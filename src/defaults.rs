//! Default values for every optional overlay knob
//!
//! Used whenever a provider does not implement the matching capability.

/// Space between the image and the title (points)
pub const SPACE_IMAGE_TITLE: f32 = 8.0;
/// Space between the title and the description (points)
pub const SPACE_TITLE_DESCRIPTION: f32 = 4.0;
/// Space between the description and the button (points)
pub const SPACE_DESCRIPTION_BUTTON: f32 = 8.0;

/// Delegate defaults
pub mod delegate {
    pub const SHOULD_DISPLAY: bool = true;
    pub const SHOULD_BE_FORCED_TO_DISPLAY: bool = false;
    pub const SHOULD_FADE_IN: bool = true;
    pub const SHOULD_ALLOW_TOUCH: bool = true;
    pub const SHOULD_ALLOW_SCROLL: bool = false;
    pub const SHOULD_ANIMATE_IMAGE: bool = false;
}

/// Conversion from layout points to terminal cells
///
/// A terminal cell is roughly twice as tall as it is wide.
pub mod cells {
    /// Points per terminal row
    pub const POINTS_PER_ROW: f32 = 8.0;
    /// Points per terminal column
    pub const POINTS_PER_COLUMN: f32 = 4.0;
    /// Horizontal margin kept between the content stack and the overlay edge (columns)
    pub const STACK_MARGIN: u16 = 2;
}

/// Number of native sections assumed when a content source does not report one
pub const SECTION_COUNT: usize = 1;

/// Convert a vertical distance in points to whole rows.
///
/// Negative or non-finite values collapse to zero.
pub fn points_to_rows(points: f32) -> u16 {
    to_cells(points, cells::POINTS_PER_ROW)
}

/// Convert a horizontal distance in points to whole columns.
pub fn points_to_columns(points: f32) -> u16 {
    to_cells(points, cells::POINTS_PER_COLUMN)
}

/// Convert a signed offset in points to signed rows.
pub fn offset_to_rows(points: f32) -> i32 {
    to_signed_cells(points, cells::POINTS_PER_ROW)
}

/// Convert a signed offset in points to signed columns.
pub fn offset_to_columns(points: f32) -> i32 {
    to_signed_cells(points, cells::POINTS_PER_COLUMN)
}

fn to_cells(points: f32, per_cell: f32) -> u16 {
    if !points.is_finite() || points <= 0.0 {
        return 0;
    }
    (points / per_cell).round().min(f32::from(u16::MAX)) as u16
}

fn to_signed_cells(points: f32, per_cell: f32) -> i32 {
    if !points.is_finite() {
        return 0;
    }
    let limit = f32::from(u16::MAX);
    (points / per_cell).round().clamp(-limit, limit) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spacings_convert_to_single_rows() {
        assert_eq!(points_to_rows(SPACE_IMAGE_TITLE), 1);
        assert_eq!(points_to_rows(SPACE_TITLE_DESCRIPTION), 1);
        assert_eq!(points_to_rows(SPACE_DESCRIPTION_BUTTON), 1);
    }

    #[test]
    fn test_points_to_rows_clamps_negative_and_nan() {
        assert_eq!(points_to_rows(-12.0), 0);
        assert_eq!(points_to_rows(f32::NAN), 0);
        assert_eq!(points_to_rows(0.0), 0);
    }

    #[test]
    fn test_points_to_columns() {
        assert_eq!(points_to_columns(8.0), 2);
        assert_eq!(points_to_columns(1.0), 0);
    }

    #[test]
    fn test_signed_offsets() {
        assert_eq!(offset_to_rows(-16.0), -2);
        assert_eq!(offset_to_columns(12.0), 3);
        assert_eq!(offset_to_rows(f32::INFINITY), 0);
    }

    #[test]
    fn test_huge_offsets_clamp_to_screen_range() {
        assert_eq!(offset_to_rows(1.0e12), i32::from(u16::MAX));
        assert_eq!(offset_to_columns(-1.0e12), -i32::from(u16::MAX));
    }
}
