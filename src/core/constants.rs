//! Shared constants used across the application

use std::time::Duration;

/// Minimum logical viewport width (px) below which a portrait host gets the
/// rotate-device notice instead of the interactive shell.
pub const MIN_LANDSCAPE_WIDTH: u32 = 768;

/// Approximate pixel metrics for one terminal cell, used to map the cell
/// grid onto the logical viewport the orientation guard reasons about.
pub const CELL_WIDTH_PX: u32 = 8;
pub const CELL_HEIGHT_PX: u32 = 16;

/// How long a message keeps its "copied" indicator before reverting.
pub const COPY_INDICATOR_TTL: Duration = Duration::from_millis(2000);

/// Column width of the sidebar when rendered inline next to the transcript.
pub const SIDEBAR_WIDTH: u16 = 34;

/// Terminal width (columns) required to render the sidebar inline. Below
/// this the sidebar is drawn as an overlay covering the transcript.
pub const SIDEBAR_INLINE_MIN_WIDTH: u16 = 90;
