//! Port map parser: CSV link table → typed records.

use crate::types::PortMapping;

/// Parsed port map: one [`PortMapping`] per non-blank CSV line.
///
/// Parsing never rejects a line. Rows with fewer than four comma-separated
/// fields fill the remainder with empty strings; their line numbers are kept
/// for the compile report.
#[derive(Debug, Clone, Default)]
pub struct PortMap {
    mappings: Vec<PortMapping>,
    short_rows: Vec<usize>,
}

impl PortMap {
    /// Parses raw mapping text,
    /// `switchName, portName, iedName, receivingPortName` per line.
    pub fn parse(text: &str) -> Self {
        let mut mappings = Vec::new();
        let mut short_rows = Vec::new();

        for (line_no, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split(',').map(str::trim);
            let mapping = PortMapping {
                switch_name: fields.next().unwrap_or("").to_string(),
                port_name: fields.next().unwrap_or("").to_string(),
                ied_name: fields.next().unwrap_or("").to_string(),
                receiving_port_name: fields.next().unwrap_or("").to_string(),
            };
            if line.matches(',').count() < 3 {
                short_rows.push(line_no + 1);
            }
            mappings.push(mapping);
        }

        PortMap {
            mappings,
            short_rows,
        }
    }

    /// All rows in input order.
    pub fn mappings(&self) -> &[PortMapping] {
        &self.mappings
    }

    /// Distinct switch names, deduplicated in first-seen order.
    pub fn switch_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for mapping in &self.mappings {
            if !mapping.switch_name.is_empty()
                && !names.contains(&mapping.switch_name.as_str())
            {
                names.push(&mapping.switch_name);
            }
        }
        names
    }

    /// Rows belonging to one switch, in input order.
    pub fn ports_for<'a>(&'a self, switch_name: &'a str) -> impl Iterator<Item = &'a PortMapping> {
        self.mappings
            .iter()
            .filter(move |m| m.switch_name == switch_name)
    }

    /// 1-based line numbers of rows with fewer than four fields.
    pub fn short_rows(&self) -> &[usize] {
        &self.short_rows
    }
}
