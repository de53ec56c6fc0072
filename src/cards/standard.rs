//! The built-in evolved-ruleset card set.
//!
//! Slug constants for every card the engine wires by name, plus the
//! standard catalog covering the three edition tiers. Costs, activation
//! numbers, and incomes are plain data; special payout behavior is wired
//! separately in the effect table.

use super::catalog::{CardCatalog, CardSpec};

// Starting hand
pub const WHEAT_FIELD: &str = "wheat_field";
pub const BAKERY: &str = "bakery";

// Base-set establishments
pub const RANCH: &str = "ranch";
pub const CAFE: &str = "cafe";
pub const CONVENIENCE_STORE: &str = "convenience_store";
pub const FOREST: &str = "forest";
pub const STADIUM: &str = "stadium";
pub const CHEESE_FACTORY: &str = "cheese_factory";
pub const FURNITURE_FACTORY: &str = "furniture_factory";
pub const MINE: &str = "mine";

// Plus-tier establishments
pub const CORNFIELD: &str = "cornfield";
pub const SUSHI_BAR: &str = "sushi_bar";
pub const FISHING_BOAT: &str = "fishing_boat";
pub const FLOWER_SHOP: &str = "flower_shop";
pub const VINEYARD: &str = "vineyard";
pub const TRAWLER: &str = "trawler";

// Sharp-tier establishments
pub const DEPARTMENT_STORE: &str = "department_store";
pub const BUILDING_DEMOLITION_COMPANY: &str = "building_demolition_company";
pub const WINERY: &str = "winery";
pub const RESTAURANT: &str = "restaurant";
pub const ELITE_BAR: &str = "elite_bar";

// Landmarks
pub const TRAIN_STATION: &str = "train_station";
pub const SHOPPING_MALL: &str = "shopping_mall";
pub const PORT: &str = "port";

/// The landmarks whose completion wins the game, in build-anywhere order.
pub const VICTORY_LANDMARKS: [&str; 3] = [TRAIN_STATION, SHOPPING_MALL, PORT];

#[allow(clippy::too_many_arguments)]
fn spec(
    id: &str,
    name: &str,
    color: &str,
    kind: &str,
    cost: u32,
    activation: &[u8],
    income: u32,
    version: &str,
) -> CardSpec {
    CardSpec {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        kind: kind.to_string(),
        cost,
        activation: activation.to_vec(),
        income,
        version: version.to_string(),
        asset: None,
    }
}

fn standard_specs() -> Vec<CardSpec> {
    vec![
        // Base set
        spec(WHEAT_FIELD, "Wheat Field", "blue", "establishment", 1, &[1], 1, "normal"),
        spec(RANCH, "Ranch", "blue", "establishment", 1, &[2], 1, "normal"),
        spec(BAKERY, "Bakery", "green", "establishment", 1, &[2, 3], 1, "normal"),
        spec(CAFE, "Cafe", "red", "establishment", 2, &[3], 1, "normal"),
        spec(CONVENIENCE_STORE, "Convenience Store", "green", "establishment", 2, &[4], 3, "normal"),
        spec(FOREST, "Forest", "blue", "establishment", 3, &[5], 1, "normal"),
        spec(STADIUM, "Stadium", "purple", "establishment", 6, &[6], 2, "normal"),
        spec(CHEESE_FACTORY, "Cheese Factory", "green", "establishment", 5, &[7], 3, "normal"),
        spec(FURNITURE_FACTORY, "Furniture Factory", "green", "establishment", 3, &[8], 3, "normal"),
        spec(MINE, "Mine", "blue", "establishment", 6, &[9], 5, "normal"),
        // Plus tier
        spec(CORNFIELD, "Cornfield", "blue", "establishment", 2, &[4], 3, "plus"),
        spec(SUSHI_BAR, "Sushi Bar", "red", "establishment", 2, &[1], 3, "plus"),
        spec(FISHING_BOAT, "Fishing Boat", "blue", "establishment", 2, &[8], 3, "plus"),
        spec(FLOWER_SHOP, "Flower Shop", "green", "establishment", 1, &[6], 1, "plus"),
        spec(VINEYARD, "Vineyard", "blue", "establishment", 3, &[7], 3, "plus"),
        spec(TRAWLER, "Trawler", "blue", "establishment", 5, &[12], 0, "plus"),
        // Sharp tier
        spec(DEPARTMENT_STORE, "Department Store", "green", "establishment", 2, &[5], 3, "sharp"),
        spec(BUILDING_DEMOLITION_COMPANY, "Building Demolition Company", "green", "establishment", 2, &[4], 8, "sharp"),
        spec(WINERY, "Winery", "green", "establishment", 3, &[9], 3, "sharp"),
        spec(RESTAURANT, "Restaurant", "red", "establishment", 3, &[9, 10], 3, "sharp"),
        spec(ELITE_BAR, "Elite Bar", "red", "establishment", 4, &[11, 12], 5, "sharp"),
        // Landmarks
        spec(TRAIN_STATION, "Train Station", "yellow", "landmark", 4, &[], 0, "normal"),
        spec(SHOPPING_MALL, "Shopping Mall", "yellow", "landmark", 10, &[], 0, "normal"),
        spec(PORT, "Port", "yellow", "landmark", 2, &[], 0, "normal"),
    ]
}

/// Build the standard catalog.
#[must_use]
pub fn standard_catalog() -> CardCatalog {
    CardCatalog::from_specs(standard_specs()).expect("built-in card set is well-formed")
}
