//! Items and the inventory that holds them.

/// What an item does when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Attack,
    Heal,
    Utility,
}

/// A single item. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    category: ItemCategory,
    /// Effect magnitude.
    value: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, category: ItemCategory, value: i32) -> Self {
        Self {
            name: name.into(),
            category,
            value,
        }
    }

    /// Rebuild an item from its name alone, as the save file only keeps names.
    pub fn from_name(name: impl Into<String>) -> Self {
        Self::new(name, ItemCategory::Utility, 0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

/// Ordered, append-only collection of items.
///
/// Insertion order is display order. Duplicate names are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item at the end.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fresh traversal in insertion order. Every call starts from the first item.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Items of one category, in insertion order.
    pub fn iter_category(&self, category: ItemCategory) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// Names of all items, in insertion order.
    pub fn item_names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add(Item::new("A", ItemCategory::Attack, 10));
        inventory.add(Item::new("B", ItemCategory::Heal, 25));
        inventory.add(Item::new("C", ItemCategory::Attack, 4));
        inventory
    }

    #[test]
    fn test_iteration_order_is_insertion_order() {
        let inventory = sample();

        let first: Vec<&str> = inventory.iter().map(Item::name).collect();
        let second: Vec<&str> = (&inventory).into_iter().map(Item::name).collect();

        assert_eq!(first, vec!["A", "B", "C"]);
        assert_eq!(first, second);
        assert_eq!(inventory.len(), 3);
    }

    #[test]
    fn test_exhausted_traversal_leaves_inventory_intact() {
        let inventory = sample();
        let mut iter = inventory.iter();
        while iter.next().is_some() {}

        assert_eq!(inventory.iter().next().map(Item::name), Some("A"));
    }

    #[test]
    fn test_category_filter() {
        let inventory = sample();
        let attacks: Vec<&str> = inventory
            .iter_category(ItemCategory::Attack)
            .map(Item::name)
            .collect();

        assert_eq!(attacks, vec!["A", "C"]);
        assert_eq!(inventory.iter_category(ItemCategory::Utility).count(), 0);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut inventory = Inventory::new();
        inventory.add(Item::new("Potion", ItemCategory::Heal, 20));
        inventory.add(Item::new("Potion", ItemCategory::Heal, 20));

        assert_eq!(inventory.item_names(), vec!["Potion", "Potion"]);
    }

    #[test]
    fn test_item_from_name_uses_defaults() {
        let item = Item::from_name("Rope");
        assert_eq!(item.name(), "Rope");
        assert_eq!(item.category(), ItemCategory::Utility);
        assert_eq!(item.value(), 0);
    }
}
