// Built-in dishes used when the service is unreachable

use super::FoodItem;
use rand::Rng;

struct FallbackDish {
    name: &'static str,
    emoji: &'static str,
    cuisine: &'static str,
    description: &'static str,
    avg_price: u32,
    is_vegetarian: bool,
}

const FALLBACK_DISHES: [FallbackDish; 3] = [
    FallbackDish {
        name: "Loaded Nachos",
        emoji: "🧀",
        cuisine: "fastfood",
        description: "Crispy nachos with cheese",
        avg_price: 200,
        is_vegetarian: true,
    },
    FallbackDish {
        name: "Chicken Biryani",
        emoji: "🍛",
        cuisine: "indian",
        description: "Aromatic spiced rice",
        avg_price: 250,
        is_vegetarian: false,
    },
    FallbackDish {
        name: "Pizza",
        emoji: "🍕",
        cuisine: "fastfood",
        description: "Classic comfort food",
        avg_price: 350,
        is_vegetarian: true,
    },
];

pub fn fallback_foods() -> Vec<FoodItem> {
    FALLBACK_DISHES
        .iter()
        .enumerate()
        .map(|(id, dish)| FoodItem {
            id: id as i64,
            name: dish.name.to_string(),
            emoji: dish.emoji.to_string(),
            cuisine: dish.cuisine.to_string(),
            description: Some(dish.description.to_string()),
            avg_price: dish.avg_price,
            is_vegetarian: dish.is_vegetarian,
        })
        .collect()
}

/// Uniformly random fallback dish
pub fn pick_fallback<R: Rng + ?Sized>(rng: &mut R) -> FoodItem {
    let mut foods = fallback_foods();
    let idx = rng.gen_range(0..foods.len());
    foods.swap_remove(idx)
}
