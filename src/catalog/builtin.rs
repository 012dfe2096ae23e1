use std::sync::LazyLock;

use crate::catalog::{CatalogCategory, CatalogFood};

fn food(name: &str, calories: f64, unit: &str, default_quantity: f64, glyph: &str) -> CatalogFood {
    CatalogFood {
        name: name.to_string(),
        calories_per_unit: calories,
        unit: unit.to_string(),
        default_quantity,
        glyph: glyph.to_string(),
    }
}

fn category(key: &str, name: &str, foods: Vec<CatalogFood>) -> CatalogCategory {
    CatalogCategory {
        key: key.to_string(),
        name: name.to_string(),
        foods,
    }
}

/// Default catalog shipped with the binary. Calories are per unit.
pub static BUILTIN_CATEGORIES: LazyLock<Vec<CatalogCategory>> = LazyLock::new(|| {
    vec![
        category(
            "staples",
            "🍚 Staples",
            vec![
                food("White rice", 116.0, "bowl", 1.0, "🍚"),
                food("Brown rice", 100.0, "bowl", 1.0, "🍚"),
                food("Noodles", 138.0, "bowl", 1.0, "🍜"),
                food("Wholewheat noodles", 124.0, "bowl", 1.0, "🍜"),
                food("Steamed bun", 223.0, "piece", 1.0, "🥟"),
                food("White bread", 80.0, "slice", 2.0, "🍞"),
                food("Wholemeal bread", 74.0, "slice", 2.0, "🍞"),
                food("Soup dumpling", 47.0, "piece", 6.0, "🥟"),
                food("Boiled dumpling", 25.0, "piece", 10.0, "🥟"),
                food("Fried dough stick", 193.0, "stick", 1.0, "🥖"),
                food("Rice porridge", 46.0, "bowl", 1.0, "🍲"),
                food("Oatmeal", 68.0, "bowl", 1.0, "🥣"),
            ],
        ),
        category(
            "meat",
            "🥩 Meat & eggs",
            vec![
                food("Shredded pork", 143.0, "serving", 1.0, "🥩"),
                food("Pork belly", 518.0, "serving", 0.5, "🥓"),
                food("Shredded beef", 125.0, "serving", 1.0, "🥩"),
                food("Chicken breast", 133.0, "serving", 1.0, "🍗"),
                food("Chicken thigh", 181.0, "serving", 1.0, "🍗"),
                food("Roast duck", 240.0, "serving", 1.0, "🦆"),
                food("Salmon", 208.0, "serving", 1.0, "🐟"),
                food("Shrimp", 87.0, "serving", 1.0, "🦐"),
                food("Egg", 70.0, "piece", 2.0, "🥚"),
                food("Salted duck egg", 190.0, "piece", 1.0, "🥚"),
            ],
        ),
        category(
            "vegetables",
            "🥬 Vegetables",
            vec![
                food("Chinese cabbage", 17.0, "serving", 1.0, "🥬"),
                food("Spinach", 28.0, "serving", 1.0, "🥬"),
                food("Broccoli", 34.0, "serving", 1.0, "🥦"),
                food("Carrot", 41.0, "serving", 1.0, "🥕"),
                food("Potato", 77.0, "piece", 1.0, "🥔"),
                food("Sweet potato", 99.0, "piece", 1.0, "🍠"),
                food("Cucumber", 15.0, "piece", 1.0, "🥒"),
                food("Tomato", 19.0, "piece", 1.0, "🍅"),
                food("Eggplant", 21.0, "piece", 0.5, "🍆"),
                food("Lotus root", 70.0, "serving", 1.0, "🪷"),
            ],
        ),
        category(
            "fruits",
            "🍎 Fruit",
            vec![
                food("Apple", 52.0, "piece", 1.0, "🍎"),
                food("Banana", 89.0, "piece", 1.0, "🍌"),
                food("Orange", 47.0, "piece", 1.0, "🍊"),
                food("Grapes", 69.0, "bunch", 0.5, "🍇"),
                food("Watermelon", 25.0, "slice", 2.0, "🍉"),
                food("Strawberry", 30.0, "piece", 5.0, "🍓"),
                food("Blueberries", 57.0, "box", 0.5, "🫐"),
                food("Kiwi", 56.0, "piece", 1.0, "🥝"),
                food("Mango", 67.0, "piece", 1.0, "🥭"),
                food("Lychee", 70.0, "piece", 8.0, "🍇"),
            ],
        ),
        category(
            "dairy",
            "🥛 Dairy & soy",
            vec![
                food("Milk", 126.0, "cup", 1.0, "🥛"),
                food("Yogurt", 118.0, "cup", 1.0, "🥛"),
                food("Greek yogurt", 97.0, "cup", 1.0, "🥛"),
                food("Cheese", 113.0, "slice", 1.0, "🧀"),
                food("Soy milk", 42.0, "cup", 1.0, "🥛"),
                food("Tofu", 81.0, "block", 1.0, "🧈"),
            ],
        ),
        category(
            "nuts",
            "🥜 Nuts",
            vec![
                food("Peanuts", 567.0, "handful", 0.2, "🥜"),
                food("Walnuts", 654.0, "piece", 3.0, "🌰"),
                food("Almonds", 579.0, "handful", 0.2, "🥜"),
                food("Cashews", 553.0, "handful", 0.2, "🥜"),
                food("Pine nuts", 698.0, "handful", 0.1, "🌰"),
                food("Sesame", 565.0, "spoon", 1.0, "🥜"),
            ],
        ),
        category(
            "dishes",
            "🍳 Dishes",
            vec![
                food("Kung pao chicken", 195.0, "serving", 1.0, "🍗"),
                food("Mapo tofu", 164.0, "serving", 1.0, "🧈"),
                food("Braised pork belly", 439.0, "serving", 1.0, "🥩"),
                food("Sweet and sour pork", 306.0, "serving", 1.0, "🥩"),
                food("Tomato and egg stir-fry", 107.0, "serving", 1.0, "🍅"),
                food("Steamed egg custard", 62.0, "serving", 1.0, "🥚"),
                food("Steamed fish", 112.0, "serving", 1.0, "🐟"),
                food("Spicy hot pot", 245.0, "serving", 1.0, "🍲"),
            ],
        ),
        category(
            "snacks",
            "🍪 Snacks",
            vec![
                food("Potato chips", 547.0, "bag", 0.5, "🍟"),
                food("Popcorn", 387.0, "bag", 0.5, "🍿"),
                food("Biscuit", 433.0, "piece", 3.0, "🍪"),
                food("Cake", 347.0, "slice", 1.0, "🍰"),
                food("Chocolate", 546.0, "bar", 0.2, "🍫"),
                food("Ice cream", 207.0, "scoop", 1.0, "🍦"),
                food("Mooncake", 421.0, "piece", 0.5, "🥮"),
            ],
        ),
        category(
            "beverages",
            "🥤 Beverages",
            vec![
                food("Water", 0.0, "cup", 1.0, "💧"),
                food("Green tea", 1.0, "cup", 1.0, "🍵"),
                food("Black coffee", 1.0, "cup", 1.0, "☕"),
                food("Coffee with sugar", 87.0, "cup", 1.0, "☕"),
                food("Cola", 129.0, "bottle", 1.0, "🥤"),
                food("Orange juice", 135.0, "cup", 1.0, "🧃"),
                food("Milk tea", 261.0, "cup", 1.0, "🧋"),
                food("Beer", 96.0, "bottle", 1.0, "🍺"),
                food("Red wine", 125.0, "glass", 1.0, "🍷"),
            ],
        ),
    ]
});
