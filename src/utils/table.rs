/// A simple text-based table generator for terminal output
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| h.len()).collect();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<String>) {
        // Update column widths if needed
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(col.chars().count());
            }
        }

        self.rows.push(row);
    }

    /// Render the table as a formatted string
    pub fn render(&self) -> String {
        let mut output = String::new();

        // Add header
        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        // Add separator
        output.push_str(&self.render_separator());
        output.push('\n');

        // Add rows
        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    /// Render a single row with proper spacing
    fn render_row(&self, row: &[String]) -> String {
        let mut line = String::new();
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                let pad = self.col_widths[i].saturating_sub(col.chars().count());
                line.push_str(col);
                line.push_str(&" ".repeat(pad));
                if i < row.len() - 1 {
                    line.push_str(" | ");
                }
            }
        }
        line
    }

    /// Render a separator line
    fn render_separator(&self) -> String {
        let mut line = String::new();
        for (i, &width) in self.col_widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < self.col_widths.len() - 1 {
                line.push_str("-+-");
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let mut table = Table::new(vec!["Route", "Price", "Change"]);
        table.add_row(vec![
            "MNL → NRT".to_string(),
            "480.00".to_string(),
            "—".to_string(),
        ]);
        table.add_row(vec![
            "MNL → NRT".to_string(),
            "455.00".to_string(),
            "▼ -25.00".to_string(),
        ]);

        let rendered = table.render();
        assert!(rendered.contains("Route"));
        assert!(rendered.contains("480.00"));
        assert!(rendered.contains("▼ -25.00"));
    }

    #[test]
    fn test_columns_align_on_widest_cell() {
        let mut table = Table::new(vec!["A", "B"]);
        table.add_row(vec!["wide-cell".to_string(), "x".to_string()]);

        let lines: Vec<String> = table.render().lines().map(|l| l.to_string()).collect();
        // header pads "A" out to the width of "wide-cell"
        assert!(lines[0].starts_with("A         | "));
        assert!(lines[1].starts_with("----------+-"));
    }
}
