use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record(Vec<String>);

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Empty cells read as missing values.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.get(index).filter(|value| !value.is_empty())
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.0.push(value.into());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Index of the first header named `name`.
    pub fn column_index(&self, name: &str) -> Result<usize, CoreError> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| CoreError::MissingColumn {
                column: name.to_string(),
                available: self.headers.clone(),
            })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
