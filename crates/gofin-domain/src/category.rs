//! Domain types representing the static category catalog.

use serde::{Deserialize, Serialize};

/// Key the category picker reports while nothing has been chosen yet.
pub const UNSELECTED_CATEGORY_KEY: &str = "category";

/// Categorises expenses for reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub key: String,
    pub name: String,
    pub icon: String,
    /// Hex colour used by charts. The unselected placeholder has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Category {
    pub fn new(key: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            icon: icon.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Ordered, read-only list of categories. Order is the display order of every report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The catalog shipped with the app.
    pub fn standard() -> Self {
        Self::new(vec![
            Category::new("purchases", "Compras", "shopping-bag").with_color("#5636D3"),
            Category::new("food", "Alimentação", "coffee").with_color("#FF872C"),
            Category::new("salary", "Salário", "dollar-sign").with_color("#12A454"),
            Category::new("car", "Carro", "crosshair").with_color("#E83F5B"),
            Category::new("leisure", "Lazer", "heart").with_color("#26195C"),
            Category::new("studies", "Estudos", "book").with_color("#9C001A"),
        ])
    }

    /// Placeholder shown by the picker before a selection is made.
    pub fn unselected() -> Category {
        Category::new(UNSELECTED_CATEGORY_KEY, "Categoria", "list")
    }

    pub fn is_unselected(key: &str) -> bool {
        let key = key.trim();
        key.is_empty() || key == UNSELECTED_CATEGORY_KEY
    }

    pub fn find(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
