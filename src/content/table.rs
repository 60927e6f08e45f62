//! Content table for secret lookup.
//!
//! The `ContentTable` stores every category a secret can be drawn from.
//! It keeps registration order so seeded draws are reproducible, and
//! provides lookup by category name.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A secret word (word variant) or drawing prompt (drawing variant).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretEntry {
    pub text: String,
    /// Weaker clue related to the secret, shown to impostors when enabled.
    pub hint: Option<String>,
}

impl SecretEntry {
    /// Entry without a hint.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hint: None,
        }
    }

    /// Entry with a hint word.
    pub fn with_hint(text: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hint: Some(hint.into()),
        }
    }
}

/// A named list of secrets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub entries: Vec<SecretEntry>,
}

impl Category {
    /// Create an empty category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Add a secret without a hint.
    #[must_use]
    pub fn with_word(mut self, text: impl Into<String>) -> Self {
        self.entries.push(SecretEntry::new(text));
        self
    }

    /// Add a secret with a hint.
    #[must_use]
    pub fn with_hinted_word(mut self, text: impl Into<String>, hint: impl Into<String>) -> Self {
        self.entries.push(SecretEntry::with_hint(text, hint));
        self
    }

    /// Add several hintless secrets.
    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.extend(words.into_iter().map(SecretEntry::new));
        self
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the category has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Table of categories.
///
/// ## Example
///
/// ```
/// use pass_and_play::content::{Category, ContentTable};
///
/// let mut table = ContentTable::new();
/// table.register(Category::new("Animals").with_words(["Cat", "Dog"]));
///
/// let animals = table.get("Animals").unwrap();
/// assert_eq!(animals.len(), 2);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ContentTable {
    categories: Vec<Category>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl PartialEq for ContentTable {
    fn eq(&self, other: &Self) -> bool {
        self.categories == other.categories
    }
}

impl ContentTable {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from categories.
    ///
    /// Panics if two categories share a name.
    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut table = Self::new();
        for category in categories {
            table.register(category);
        }
        table
    }

    /// Register a category.
    ///
    /// Panics if a category with the same name already exists.
    pub fn register(&mut self, category: Category) {
        if self.contains(&category.name) {
            panic!("Category {:?} already registered", category.name);
        }
        self.index.insert(category.name.clone(), self.categories.len());
        self.categories.push(category);
    }

    /// Get a category by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Category> {
        match self.index.get(name) {
            Some(&i) => self.categories.get(i),
            // Deserialized tables have no index yet.
            None => self.categories.iter().find(|c| c.name == name),
        }
    }

    /// Check if a category is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get the number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate over categories in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Iterate over category names in registration order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Non-empty categories among `selected`, in registration order.
    pub fn enabled<'a>(&'a self, selected: &'a [String]) -> impl Iterator<Item = &'a Category> + 'a {
        self.categories
            .iter()
            .filter(move |c| !c.is_empty() && selected.iter().any(|s| s == &c.name))
    }

    /// Default word-deduction table.
    #[must_use]
    pub fn builtin_words() -> Self {
        Self::from_categories([
            Category::new("Animals")
                .with_hinted_word("Elephant", "Trunk")
                .with_hinted_word("Penguin", "Ice")
                .with_hinted_word("Kangaroo", "Pouch")
                .with_hinted_word("Owl", "Night")
                .with_hinted_word("Octopus", "Ink")
                .with_hinted_word("Camel", "Desert"),
            Category::new("Food")
                .with_hinted_word("Pizza", "Slice")
                .with_hinted_word("Sushi", "Rice")
                .with_hinted_word("Pancake", "Syrup")
                .with_hinted_word("Popcorn", "Cinema")
                .with_hinted_word("Taco", "Shell")
                .with_hinted_word("Soup", "Spoon"),
            Category::new("Places")
                .with_hinted_word("Airport", "Gate")
                .with_hinted_word("Library", "Quiet")
                .with_hinted_word("Beach", "Sand")
                .with_hinted_word("Hospital", "Doctor")
                .with_hinted_word("Museum", "Exhibit")
                .with_hinted_word("Stadium", "Crowd"),
            Category::new("Jobs")
                .with_hinted_word("Firefighter", "Hose")
                .with_hinted_word("Chef", "Kitchen")
                .with_hinted_word("Pilot", "Cockpit")
                .with_hinted_word("Teacher", "Chalk")
                .with_hinted_word("Astronaut", "Orbit")
                .with_hinted_word("Farmer", "Tractor"),
        ])
    }

    /// Default drawing-deduction table.
    #[must_use]
    pub fn builtin_prompts() -> Self {
        Self::from_categories([
            Category::new("Objects").with_words(["Umbrella", "Bicycle", "Lamp", "Guitar", "Clock"]),
            Category::new("Nature").with_words(["Volcano", "Rainbow", "Cactus", "Waterfall", "Moon"]),
            Category::new("Creatures").with_words(["Dragon", "Snail", "Giraffe", "Robot", "Ghost"]),
        ])
    }
}
