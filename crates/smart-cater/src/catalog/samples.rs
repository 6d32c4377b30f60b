use crate::model::Meal;

/// The built-in catalog used when no catalog file is given.
pub fn sample_meals() -> Vec<Meal> {
    vec![
        Meal::new(
            "M001",
            "Vegan Pasta",
            ["pasta", "tomatoes", "basil", "olive oil"],
            "vegan",
        ),
        Meal::new(
            "M002",
            "Chicken Curry",
            ["chicken", "curry powder", "coconut milk", "rice"],
            "quick meals",
        ),
        Meal::new(
            "M003",
            "Gluten-Free Salad",
            ["lettuce", "tomatoes", "cucumber", "olive oil"],
            "gluten-free",
        ),
        Meal::new(
            "M004",
            "Beef Steak",
            ["beef", "potatoes", "green beans", "butter"],
            "general",
        ),
        Meal::new(
            "M005",
            "Vegetable Stir Fry",
            ["broccoli", "carrots", "soy sauce", "ginger"],
            "vegan",
        ),
    ]
}
