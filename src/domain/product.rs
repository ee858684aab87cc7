// ==========================================
// Bakery Operations Core - product and recipe domain model
// ==========================================
// A recipe lists the raw ingredients needed to produce one unit
// of a product. Line order carries no meaning.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Product
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub sale_price: f64,
    pub cost_price: f64,
    pub sku: Option<String>,
    pub description: Option<String>,
    /// Absent for resale goods that are not produced in house.
    pub recipe: Option<Recipe>,
}

// ==========================================
// Recipe
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub lines: Vec<RecipeLine>,
}

impl Recipe {
    pub fn new(lines: Vec<RecipeLine>) -> Self {
        Self { lines }
    }
}

// ==========================================
// RecipeLine
// ==========================================
// Invariant: quantity_per_unit > 0. The requirement engine warns
// on violating lines instead of trusting them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeLine {
    pub ingredient_id: String,
    pub name: String,
    pub quantity_per_unit: f64,
    pub unit: String,
}

impl RecipeLine {
    pub fn new(ingredient_id: &str, name: &str, quantity_per_unit: f64, unit: &str) -> Self {
        Self {
            ingredient_id: ingredient_id.to_string(),
            name: name.to_string(),
            quantity_per_unit,
            unit: unit.to_string(),
        }
    }
}
