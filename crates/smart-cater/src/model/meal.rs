use serde::{Deserialize, Serialize};

/// Category assigned when a catalog entry does not name one.
pub const DEFAULT_CATEGORY: &str = "general";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A catalog entry: a named meal and the ingredients needed to cook it.
///
/// Meals are never mutated once they are in the catalog. Orders hold them
/// behind an `Arc`, so many orders can share one meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub meal_id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    #[serde(default = "default_category")]
    pub category: String,
}

impl Meal {
    /// Creates a new Meal.
    ///
    /// # Arguments
    /// * `meal_id` - Catalog identifier (e.g. `"M001"`)
    /// * `name` - Display name
    /// * `ingredients` - Ingredient names, in the order they are listed
    /// * `category` - Category tag (e.g. `"vegan"`)
    pub fn new<I, S>(
        meal_id: impl Into<String>,
        name: impl Into<String>,
        ingredients: I,
        category: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            meal_id: meal_id.into(),
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            category: category.into(),
        }
    }

    /// Ingredients joined for display, e.g. `"pasta, tomatoes, basil"`.
    pub fn ingredient_list(&self) -> String {
        self.ingredients.join(", ")
    }
}
