/// A simple text-based table generator for terminal output
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<&str>) {
        self.rows.push(row.iter().map(|s| s.to_string()).collect());
    }

    /// Render the table as a formatted string
    pub fn render(&self) -> String {
        let widths = self.column_widths();

        let mut output = Self::render_row(&self.headers, &widths);
        output.push('\n');
        output.push_str(&Self::render_separator(&widths));

        for row in &self.rows {
            output.push('\n');
            output.push_str(&Self::render_row(row, &widths));
        }

        output
    }

    /// Widest cell per column, headers included
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (i, col) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(col.len());
                }
            }
        }
        widths
    }

    fn render_row(row: &[String], widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, col) in row.iter().enumerate() {
            if i < widths.len() {
                line.push_str(&format!("{:<width$}", col, width = widths[i]));
                if i < row.len() - 1 {
                    line.push_str(" | ");
                }
            }
        }
        line
    }

    fn render_separator(widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, &width) in widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < widths.len() - 1 {
                line.push_str("-+-");
            }
        }
        line
    }
}
