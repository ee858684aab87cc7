// ==========================================
// Bakery Operations Core - ingredient requirement engine
// ==========================================
// Responsibility: given selected orders and product recipes,
// total the raw-ingredient quantities needed and compare against
// available stock.
// Input: orders + recipe catalog + stock levels (full state)
// Output: requirement lines + data-quality warnings
// Data-quality issues never abort the computation under the
// default policy; partial results stay useful and every skipped
// or suspect line is reported in the warning list.
// ==========================================

use crate::domain::order::Order;
use crate::domain::product::Recipe;
use crate::domain::StockLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::{instrument, warn};

// ==========================================
// Output shapes
// ==========================================

/// Computed requirement for one ingredient across all selected
/// orders. Derived, never persisted; recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementLine {
    pub ingredient_id: String,
    pub name: String,
    pub total_quantity_needed: f64,
    /// First unit seen for this ingredient. If later lines disagree a
    /// warning is raised and the raw numbers are still summed.
    pub unit: String,
    pub available_quantity: f64,
    pub is_sufficient: bool,
}

/// Requirement lines in first-seen ingredient order, plus every
/// data-quality warning raised along the way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequirementReport {
    pub lines: Vec<RequirementLine>,
    pub warnings: Vec<ComputeWarning>,
}

impl RequirementReport {
    /// True when stock covers every requirement line.
    pub fn all_sufficient(&self) -> bool {
        self.lines.iter().all(|line| line.is_sufficient)
    }

    /// The lines stock does not cover.
    pub fn shortfalls(&self) -> Vec<&RequirementLine> {
        self.lines.iter().filter(|line| !line.is_sufficient).collect()
    }
}

// ==========================================
// Warnings
// ==========================================
// Reported in the return value, never thrown: unknown products,
// unit mismatches and bad quantities are expected data-quality
// conditions, not programming errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComputeWarning {
    /// An order line references a product absent from the catalog.
    /// The line was skipped; the rest of the order still counts.
    UnknownProduct { order_id: String, product_id: String },

    /// The same ingredient was accumulated under two unit strings.
    /// The raw numbers were still summed; the total is unreliable.
    InconsistentUnit {
        ingredient_id: String,
        first_unit: String,
        conflicting_unit: String,
    },

    /// A non-positive quantity was supplied. The line contributed
    /// nothing to the totals.
    InvalidQuantity {
        order_id: String,
        product_id: String,
        quantity: f64,
    },
}

impl fmt::Display for ComputeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputeWarning::UnknownProduct {
                order_id,
                product_id,
            } => write!(
                f,
                "unknown product {} on order {}: line skipped",
                product_id, order_id
            ),
            ComputeWarning::InconsistentUnit {
                ingredient_id,
                first_unit,
                conflicting_unit,
            } => write!(
                f,
                "ingredient {} accumulated under mixed units ({} vs {}): total unreliable",
                ingredient_id, first_unit, conflicting_unit
            ),
            ComputeWarning::InvalidQuantity {
                order_id,
                product_id,
                quantity,
            } => write!(
                f,
                "invalid quantity {} for product {} on order {}: line excluded",
                quantity, product_id, order_id
            ),
        }
    }
}

// ==========================================
// Policy
// ==========================================

/// How an unknown product in the input is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownProductPolicy {
    /// Skip the line, keep computing, surface a warning. Default:
    /// partial results remain useful.
    #[default]
    Skip,
    /// Abort the whole computation with `RequirementError`.
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComputePolicy {
    pub on_unknown_product: UnknownProductPolicy,
}

/// Raised only under `UnknownProductPolicy::Abort`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequirementError {
    #[error("unknown product in requirement input: order={order_id} product={product_id}")]
    UnknownProduct {
        order_id: String,
        product_id: String,
    },
}

// ==========================================
// Internal accumulator
// ==========================================
struct Accumulator {
    ingredient_id: String,
    name: String,
    unit: String,
    total: f64,
}

// ==========================================
// RequirementCalculator
// ==========================================
pub struct RequirementCalculator;

impl RequirementCalculator {
    /// Compute requirements under the default skip-and-warn policy.
    ///
    /// Deterministic and stateless: identical inputs yield identical
    /// output, lines appear in first-seen ingredient order.
    pub fn compute(
        orders: &[Order],
        catalog: &HashMap<String, Recipe>,
        stock: &HashMap<String, StockLevel>,
    ) -> RequirementReport {
        match Self::compute_with_policy(orders, catalog, stock, ComputePolicy::default()) {
            Ok(report) => report,
            // The skip policy reports instead of aborting.
            Err(err) => unreachable!("skip policy aborted: {err}"),
        }
    }

    /// Compute requirements under an explicit policy.
    #[instrument(skip_all, fields(orders = orders.len()))]
    pub fn compute_with_policy(
        orders: &[Order],
        catalog: &HashMap<String, Recipe>,
        stock: &HashMap<String, StockLevel>,
        policy: ComputePolicy,
    ) -> Result<RequirementReport, RequirementError> {
        let mut accums: Vec<Accumulator> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut warnings: Vec<ComputeWarning> = Vec::new();

        for order in orders {
            for item in &order.items {
                let recipe = match catalog.get(&item.product_id) {
                    Some(recipe) => recipe,
                    None => {
                        if policy.on_unknown_product == UnknownProductPolicy::Abort {
                            return Err(RequirementError::UnknownProduct {
                                order_id: order.id.clone(),
                                product_id: item.product_id.clone(),
                            });
                        }
                        warn!(
                            order_id = %order.id,
                            product_id = %item.product_id,
                            "unknown product, skipping line"
                        );
                        warnings.push(ComputeWarning::UnknownProduct {
                            order_id: order.id.clone(),
                            product_id: item.product_id.clone(),
                        });
                        continue;
                    }
                };

                // Non-numeric (NaN/infinite) quantities would poison every
                // total they touch; rejected together with negatives.
                if !item.quantity.is_finite() || item.quantity < 0.0 {
                    warn!(
                        order_id = %order.id,
                        product_id = %item.product_id,
                        quantity = item.quantity,
                        "invalid quantity, excluding line"
                    );
                    warnings.push(ComputeWarning::InvalidQuantity {
                        order_id: order.id.clone(),
                        product_id: item.product_id.clone(),
                        quantity: item.quantity,
                    });
                    continue;
                }
                if item.quantity == 0.0 {
                    // Contributes nothing; not a data-quality issue.
                    continue;
                }

                for line in &recipe.lines {
                    // Recipe invariant: quantity_per_unit is finite and > 0.
                    // Violations are surfaced, not trusted.
                    if !line.quantity_per_unit.is_finite() || line.quantity_per_unit <= 0.0 {
                        warnings.push(ComputeWarning::InvalidQuantity {
                            order_id: order.id.clone(),
                            product_id: item.product_id.clone(),
                            quantity: line.quantity_per_unit,
                        });
                        continue;
                    }

                    let needed = line.quantity_per_unit * item.quantity;
                    match index.get(&line.ingredient_id) {
                        Some(&pos) => {
                            let accum = &mut accums[pos];
                            if accum.unit != line.unit {
                                let warning = ComputeWarning::InconsistentUnit {
                                    ingredient_id: line.ingredient_id.clone(),
                                    first_unit: accum.unit.clone(),
                                    conflicting_unit: line.unit.clone(),
                                };
                                if !warnings.contains(&warning) {
                                    warn!(
                                        ingredient_id = %line.ingredient_id,
                                        first_unit = %accum.unit,
                                        conflicting_unit = %line.unit,
                                        "mixed units for ingredient, raw sum kept"
                                    );
                                    warnings.push(warning);
                                }
                            }
                            // Raw numeric sum even across mixed units: a
                            // documented latent defect in the source data
                            // model, surfaced above instead of silently
                            // "fixed" here.
                            accum.total += needed;
                        }
                        None => {
                            index.insert(line.ingredient_id.clone(), accums.len());
                            accums.push(Accumulator {
                                ingredient_id: line.ingredient_id.clone(),
                                name: line.name.clone(),
                                unit: line.unit.clone(),
                                total: needed,
                            });
                        }
                    }
                }
            }
        }

        let lines = accums
            .into_iter()
            .map(|accum| {
                let available = stock
                    .get(&accum.ingredient_id)
                    .map(|level| level.quantity)
                    .unwrap_or(0.0);
                RequirementLine {
                    is_sufficient: available >= accum.total,
                    ingredient_id: accum.ingredient_id,
                    name: accum.name,
                    total_quantity_needed: accum.total,
                    unit: accum.unit,
                    available_quantity: available,
                }
            })
            .collect();

        Ok(RequirementReport { lines, warnings })
    }
}
