/// Item names the predictor can suggest. Ordered, fixed at construction.
///
/// The default catalog is the set of commonly purchased groceries the mock
/// model was trained against. It never changes during the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<String>,
}

const COMMON_ITEMS: [&str; 10] = [
    "milk", "bread", "eggs", "cheese", "butter", "cereal", "juice", "apples", "bananas", "chicken",
];

impl Catalog {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// The built-in catalog of commonly purchased grocery items.
    pub fn common_items() -> Self {
        Self::new(COMMON_ITEMS.iter().map(|item| item.to_string()).collect())
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
