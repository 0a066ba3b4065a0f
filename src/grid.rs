//! Pick a color from the preset palette laid out as a fixed grid of square
//! cells.

use tracing::trace;

use crate::{
    color::{Color, Component},
    math::{rect, Point, Rect},
    palette::{self, Swatch},
    pointer::{PointerEvent, PointerPhase},
};

/// Draw state of a single cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellView {
    /// The swatch shown in the cell.
    pub swatch: Swatch,
    /// Where the cell is drawn.
    pub frame: Rect,
    /// The cell shows the selection border.
    pub selected: bool,
    /// The pointer hovers over the cell.
    pub hovered: bool,
}

/// The grid picker.
#[derive(Clone, Debug)]
pub struct GridPicker {
    bounds: Rect,
    columns: usize,
    selected: Option<usize>,
    hovered: Option<usize>,
}

impl GridPicker {
    /// Create a grid with `columns` columns. Zero is treated as one.
    pub fn new(columns: usize) -> Self {
        Self {
            bounds: Rect::zero(),
            columns: columns.max(1),
            selected: None,
            hovered: None,
        }
    }

    /// The area the grid is drawn in.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Move the grid to new bounds. Cells are square, so only the width
    /// decides their size.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Side length of a cell.
    pub fn cell_size(&self) -> Component {
        self.bounds.size.width / self.columns as Component
    }

    /// Number of rows needed for the palette.
    pub fn rows(&self) -> usize {
        palette::swatches().len().div_ceil(self.columns)
    }

    /// Frame of the cell at `index`.
    pub fn cell_frame(&self, index: usize) -> Rect {
        let size = self.cell_size();
        let column = (index % self.columns) as Component;
        let row = (index / self.columns) as Component;
        rect(
            self.bounds.origin.x + column * size,
            self.bounds.origin.y + row * size,
            size,
            size,
        )
    }

    /// Index of the cell under `point`, if any.
    pub fn cell_at(&self, point: Point) -> Option<usize> {
        let size = self.cell_size();
        if size <= 0.0 || !self.bounds.contains(point) {
            return None;
        }

        let column = ((point.x - self.bounds.origin.x) / size).floor() as usize;
        let row = ((point.y - self.bounds.origin.y) / size).floor() as usize;
        if column >= self.columns {
            return None;
        }

        let index = row * self.columns + column;
        (index < palette::swatches().len()).then_some(index)
    }

    /// Index of the highlighted cell.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Index of the hovered cell.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Handle a pointer event. Press, drag and release all pick the swatch
    /// under the pointer, so dragging previews every cell it crosses.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<Color> {
        if event.phase == PointerPhase::Cancel {
            return None;
        }

        let index = self.cell_at(event.position)?;
        let swatch = palette::get(index)?;
        self.selected = Some(index);
        trace!(index, hex = %swatch.hex(), "grid swatch picked");
        Some(swatch.color())
    }

    /// Track the hovering pointer, `None` when it leaves the grid.
    pub fn hover(&mut self, point: Option<Point>) {
        self.hovered = point.and_then(|p| self.cell_at(p));
    }

    /// Move the highlight to the swatch matching `color`, or clear it when no
    /// swatch matches. `None` leaves the grid untouched.
    pub fn set_color(&mut self, color: Option<&Color>) {
        let Some(color) = color else {
            return;
        };
        self.selected = palette::position_of(color);
    }

    /// Draw state for every cell.
    pub fn render(&self) -> Vec<CellView> {
        palette::swatches()
            .iter()
            .enumerate()
            .map(|(index, swatch)| CellView {
                swatch: *swatch,
                frame: self.cell_frame(index),
                selected: self.selected == Some(index),
                hovered: self.hovered == Some(index),
            })
            .collect()
    }
}
