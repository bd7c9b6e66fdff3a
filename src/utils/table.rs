//! Plain-text table rendering for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Missing trailing cells render as blanks.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.push_line(&mut out, &header);
        let rule: Vec<String> = self.columns.iter().map(|c| "-".repeat(c.width)).collect();
        self.push_line(&mut out, &rule);

        for row in &self.rows {
            self.push_line(&mut out, row);
        }
        out
    }

    fn push_line(&self, out: &mut String, cells: &[String]) {
        let line: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                format!("{:<width$}", cell, width = col.width)
            })
            .collect();
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    }
}
