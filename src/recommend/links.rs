// "Order from..." links for a recommended dish

use reqwest::Url;

const ZOMATO_DISH_BASE: &str = "https://www.zomato.com/bangalore/delivery/dish-";
const SWIGGY_SEARCH: &str = "https://www.swiggy.com/search";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLinks {
    pub zomato: String,
    pub swiggy: String,
}

pub fn order_links(dish_name: &str) -> OrderLinks {
    OrderLinks {
        zomato: zomato_link(dish_name),
        swiggy: swiggy_link(dish_name),
    }
}

/// Lowercased, whitespace runs collapsed to '-'
fn zomato_link(dish_name: &str) -> String {
    let slug = dish_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{}{}", ZOMATO_DISH_BASE, slug)
}

fn swiggy_link(dish_name: &str) -> String {
    Url::parse_with_params(SWIGGY_SEARCH, &[("query", dish_name)])
        .map(String::from)
        .unwrap_or_else(|_| SWIGGY_SEARCH.to_string())
}
