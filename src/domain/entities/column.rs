use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Text,
    Date,
    Link,
    Dropdown,
    LinkAndDescription,
    Icon,
    CustomTemplate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

impl Align {
    pub fn as_css(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Right => "right",
            Align::Center => "center",
        }
    }
}

/// Presentation payload handed to the rendering layer as-is.
pub type PresentationStyle = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownValue {
    pub value: String,
    pub view_value: String,
}

impl DropdownValue {
    pub fn new(value: impl Into<String>, view_value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            view_value: view_value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnConfig {
    pub name: String,
    pub label: String,
    pub column_type: ColumnType,
    pub sort: bool,
    pub align: Align,
    pub style: PresentationStyle,
    pub dropdown_values: Option<Vec<DropdownValue>>,
}

impl ColumnConfig {
    pub fn new(name: impl Into<String>, label: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            column_type,
            sort: false,
            align: Align::default(),
            style: PresentationStyle::new(),
            dropdown_values: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sort = true;
        self
    }

    pub fn aligned(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn styled(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    pub fn with_dropdown_values(mut self, values: Vec<DropdownValue>) -> Self {
        self.dropdown_values = Some(values);
        self
    }
}
