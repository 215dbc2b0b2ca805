use crate::geom;

pub const FONT_SIZE: f32 = 10.0;

// 3.5 in is the column width of a two-column journal page
pub const FIG_SIZE: geom::Size = geom::Size::new(3.5, 3.5);
pub const FIG_DPI: u32 = 175;

pub const SAVE_DPI: u32 = 300;
pub const SAVE_PAD_INCHES: f32 = 0.05;

pub const LATEX_PREAMBLE: &str = r"\usepackage{textgreek} \usepackage{amsmath}";

pub const MAJOR_TICK_SIZE: f32 = 5.0;
pub const MAJOR_TICK_WIDTH: f32 = 0.5;
pub const MINOR_TICK_SIZE: f32 = 2.5;
pub const MINOR_TICK_WIDTH: f32 = 0.5;

pub const AXES_LINE_WIDTH: f32 = 0.5;
pub const GRID_LINE_WIDTH: f32 = 0.5;
pub const SERIES_LINE_WIDTH: f32 = 0.75;

pub const LEGEND_HANDLE_LENGTH: f32 = 1.25;
pub const LEGEND_HANDLE_TEXT_PAD: f32 = 0.5;
