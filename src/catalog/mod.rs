mod product;

pub use product::{ImageRef, Price, Product};

/// Insertion-ordered product catalog.
///
/// Built once at startup and never mutated for the process lifetime. Rows
/// are displayed in the order they were inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Built-in sample catalog, used when no config file supplies one.
    pub fn sample() -> Self {
        Self::new(vec![
            Product::new(
                "Make up fix",
                "for all skin type",
                Price::from_cents(4799),
                ImageRef::new("makeup_fix"),
                5,
            ),
            Product::new(
                "Lotion",
                "night only",
                Price::from_cents(9799),
                ImageRef::new("cleansing_foam"),
                3,
            ),
            Product::new(
                "Cleansing Foam",
                "for oily skin",
                Price::from_cents(1799),
                ImageRef::new("cleansing_foam_2"),
                2,
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}
