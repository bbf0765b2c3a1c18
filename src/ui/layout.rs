//! Viewport model and screen area layout
//!
//! The orientation guard reasons about a logical pixel viewport derived
//! from the terminal cell grid with fixed cell metrics. Each resize event
//! recomputes the viewport from scratch, so handling order between resize
//! notifications does not matter.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::core::constants::{
    CELL_HEIGHT_PX, CELL_WIDTH_PX, MIN_LANDSCAPE_WIDTH, SIDEBAR_INLINE_MIN_WIDTH, SIDEBAR_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width_px: u32,
    pub height_px: u32,
}

impl Viewport {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// Map a terminal cell grid onto the logical viewport.
    pub fn from_cell_grid(cols: u16, rows: u16) -> Self {
        Self {
            width_px: u32::from(cols) * CELL_WIDTH_PX,
            height_px: u32::from(rows) * CELL_HEIGHT_PX,
        }
    }

    pub fn is_landscape(&self) -> bool {
        self.width_px >= self.height_px
    }

    /// Whether the interactive surface must be replaced by the
    /// rotate-device notice.
    pub fn needs_rotation_notice(&self) -> bool {
        rotation_notice_required(self.width_px, self.is_landscape())
    }
}

/// A portrait host below the small-screen width threshold gets the static
/// rotate-device notice; everything else gets the interactive shell.
pub fn rotation_notice_required(width_px: u32, landscape: bool) -> bool {
    !landscape && width_px < MIN_LANDSCAPE_WIDTH
}

/// Resolved screen regions for one frame.
#[derive(Debug, Clone, Copy)]
pub struct ShellLayout {
    pub sidebar: Option<Rect>,
    /// When true the sidebar covers the transcript instead of sitting next
    /// to it; closing the sidebar dismisses the overlay.
    pub sidebar_overlay: bool,
    pub transcript: Rect,
    pub composer: Rect,
}

/// Split the frame into sidebar, transcript, and composer regions.
pub fn compute_layout(area: Rect, sidebar_open: bool, composer_height: u16) -> ShellLayout {
    let (sidebar, main, overlay) = if sidebar_open && area.width >= SIDEBAR_INLINE_MIN_WIDTH {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(area);
        (Some(chunks[0]), chunks[1], false)
    } else if sidebar_open {
        // Narrow terminal: draw the sidebar over the left edge of the
        // transcript area.
        let width = SIDEBAR_WIDTH.min(area.width);
        let overlay_area = Rect::new(area.x, area.y, width, area.height);
        (Some(overlay_area), area, true)
    } else {
        (None, area, false)
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(composer_height)])
        .split(main);

    ShellLayout {
        sidebar,
        sidebar_overlay: overlay,
        transcript: rows[0],
        composer: rows[1],
    }
}
