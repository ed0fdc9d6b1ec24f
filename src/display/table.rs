use crate::table::Table;
use crate::utils::text::truncate_text_unicode;
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table as RenderTable};
use crossterm::terminal;
use serde_json::Value;

const MAX_CELL_WIDTH: usize = 60;

/// Formatter for table display
pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl TableDisplay {
    /// Create a new TableDisplay instance
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    /// Detect terminal width
    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _rows)) => {
                let width = cols as usize;
                // Clamp for stability on very narrow or very wide terminals
                if width < 40 {
                    Some(40)
                } else if width > 200 {
                    Some(200)
                } else {
                    Some(width)
                }
            }
            Err(_) => Some(80),
        }
    }

    /// Create a TableDisplay instance with maximum width setting
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set color usage
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Render a metadata table for the terminal.
    pub fn render(&self, table: &Table) -> String {
        let mut out = RenderTable::new();
        out.load_preset(presets::UTF8_FULL);
        out.set_content_arrangement(ContentArrangement::Dynamic);
        if let Some(width) = self.max_width {
            out.set_width(width as u16);
        }

        if self.use_colors {
            out.set_header(
                table
                    .columns()
                    .iter()
                    .map(|name| {
                        Cell::new(name)
                            .add_attribute(Attribute::Bold)
                            .fg(Color::Cyan)
                    })
                    .collect::<Vec<Cell>>(),
            );
        } else {
            out.set_header(table.columns().to_vec());
        }

        for row in table.rows() {
            out.add_row(
                row.iter()
                    .map(|value| truncate_text_unicode(&format_cell(value), MAX_CELL_WIDTH))
                    .collect::<Vec<String>>(),
            );
        }

        out.to_string()
    }
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
