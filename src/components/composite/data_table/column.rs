//! Column Definition
//!
//! Table columns with their header label, width and cell renderer.

use gpui::{AnyElement, SharedString};

/// Column width
#[derive(Debug, Clone, Copy)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Share of the remaining space, never narrower than `min`
    Flex { min: f32 },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: 80.0 }
    }
}

/// Horizontal alignment of header and cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Start,
    End,
}

pub struct Column<R> {
    pub id: SharedString,
    pub label: SharedString,
    pub width: ColumnWidth,
    pub align: Align,
    render: Box<dyn Fn(&R) -> AnyElement>,
}

impl<R: 'static> Column<R> {
    /// Create a column with a header and cell renderer
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        render: impl Fn(&R) -> AnyElement + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: ColumnWidth::default(),
            align: Align::Start,
            render: Box::new(render),
        }
    }

    /// Use a fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Share remaining space, with a minimum width
    pub fn flex_width(mut self, min: f32) -> Self {
        self.width = ColumnWidth::Flex { min };
        self
    }

    /// Right-align, for numbers
    pub fn align_end(mut self) -> Self {
        self.align = Align::End;
        self
    }

    pub fn render_cell(&self, row: &R) -> AnyElement {
        (self.render)(row)
    }
}
