use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ImageRef, Price, Product};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    /// Optional catalog override. When absent, the built-in sample catalog
    /// is used.
    pub products: Option<Vec<ProductEntry>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            products: None,
        }
    }
}

impl Config {
    /// Build the startup catalog: configured products, or the sample set.
    pub fn catalog(&self) -> Catalog {
        match &self.products {
            Some(entries) => Catalog::new(entries.iter().map(ProductEntry::to_product).collect()),
            None => Catalog::sample(),
        }
    }
}

/// UI behavior knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event-loop tick interval in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

/// One catalog product as declared in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Decimal dollars; converted to integer cents on load.
    pub price: f64,
    /// Asset key for the row/detail placeholder art.
    #[serde(default)]
    pub image: String,
    /// Quantity on hand shown next to the row. Display only.
    #[serde(default)]
    pub quantity: u32,
}

impl ProductEntry {
    fn to_product(&self) -> Product {
        Product::new(
            self.name.clone(),
            self.description.clone(),
            Price::from_dollars(self.price),
            ImageRef::new(self.image.clone()),
            self.quantity,
        )
    }
}
