// ==========================================
// Bakery Operations Core - inventory transfer flow engine
// ==========================================
// Responsibility: plan transfer items from a requirement report
// and advance transfer items through pending -> picked ->
// transferred, rolling the transfer status up from its items.
// Pure functions: the caller persists the returned transfer.
// ==========================================

use crate::domain::inventory::{
    InventoryTransfer, TransferItem, TransferItemStatus, TransferStatus,
};
use crate::engine::requirement::RequirementReport;
use thiserror::Error;
use tracing::instrument;

// ==========================================
// Transfer errors
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("transfer {transfer_id} has no item for ingredient {ingredient_id}")]
    UnknownItem {
        transfer_id: String,
        ingredient_id: String,
    },

    #[error("invalid transfer item step: ingredient={ingredient_id} from={from} to={to}")]
    InvalidItemStep {
        ingredient_id: String,
        from: TransferItemStatus,
        to: TransferItemStatus,
    },

    #[error("transfer {transfer_id} is completed and cannot be updated")]
    AlreadyCompleted { transfer_id: String },
}

pub type TransferResult<T> = Result<T, TransferError>;

// ==========================================
// TransferFlow
// ==========================================
pub struct TransferFlow;

impl TransferFlow {
    /// Pending transfer items for every requirement line in the
    /// report. This is the "link orders, calculate the items" step of
    /// transfer creation; warnings stay on the report for the caller
    /// to surface.
    pub fn plan_items(report: &RequirementReport) -> Vec<TransferItem> {
        report
            .lines
            .iter()
            .map(|line| TransferItem {
                ingredient_id: line.ingredient_id.clone(),
                name: line.name.clone(),
                quantity: line.total_quantity_needed,
                unit: line.unit.clone(),
                status: TransferItemStatus::Pending,
            })
            .collect()
    }

    /// Mark one item picked. When every item is picked or beyond, the
    /// transfer moves to `in_progress`.
    pub fn mark_item_picked(
        transfer: &InventoryTransfer,
        ingredient_id: &str,
    ) -> TransferResult<InventoryTransfer> {
        Self::step_item(transfer, ingredient_id, TransferItemStatus::Picked)
    }

    /// Mark one item transferred. When every item is transferred, the
    /// transfer moves to `completed`.
    pub fn mark_item_transferred(
        transfer: &InventoryTransfer,
        ingredient_id: &str,
    ) -> TransferResult<InventoryTransfer> {
        Self::step_item(transfer, ingredient_id, TransferItemStatus::Transferred)
    }

    #[instrument(skip(transfer), fields(transfer_id = %transfer.id))]
    fn step_item(
        transfer: &InventoryTransfer,
        ingredient_id: &str,
        target: TransferItemStatus,
    ) -> TransferResult<InventoryTransfer> {
        if transfer.status == TransferStatus::Completed {
            return Err(TransferError::AlreadyCompleted {
                transfer_id: transfer.id.clone(),
            });
        }

        let mut updated = transfer.clone();
        let item = updated
            .items
            .iter_mut()
            .find(|item| item.ingredient_id == ingredient_id)
            .ok_or_else(|| TransferError::UnknownItem {
                transfer_id: transfer.id.clone(),
                ingredient_id: ingredient_id.to_string(),
            })?;

        // Items only step forward, one stage at a time.
        let legal = matches!(
            (item.status, target),
            (TransferItemStatus::Pending, TransferItemStatus::Picked)
                | (TransferItemStatus::Picked, TransferItemStatus::Transferred)
        );
        if !legal {
            return Err(TransferError::InvalidItemStep {
                ingredient_id: ingredient_id.to_string(),
                from: item.status,
                to: target,
            });
        }
        item.status = target;

        updated.status = Self::roll_up(transfer.status, &updated.items);
        Ok(updated)
    }

    // Status only ever upgrades from the item states; a transfer with
    // remaining pending items keeps its current status.
    fn roll_up(current: TransferStatus, items: &[TransferItem]) -> TransferStatus {
        if !items.is_empty()
            && items
                .iter()
                .all(|item| item.status == TransferItemStatus::Transferred)
        {
            TransferStatus::Completed
        } else if !items.is_empty()
            && items
                .iter()
                .all(|item| item.status != TransferItemStatus::Pending)
        {
            TransferStatus::InProgress
        } else {
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn test_transfer(items: Vec<(&str, TransferItemStatus)>) -> InventoryTransfer {
        InventoryTransfer {
            id: "ITR-001".to_string(),
            from_location_id: "loc-001".to_string(),
            from_location_name: "Main Warehouse".to_string(),
            to_location_id: "loc-002".to_string(),
            to_location_name: "Downtown Bakery".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
            status: TransferStatus::Pending,
            items: items
                .into_iter()
                .map(|(id, status)| TransferItem {
                    ingredient_id: id.to_string(),
                    name: id.to_string(),
                    quantity: 10.0,
                    unit: "kg".to_string(),
                    status,
                })
                .collect(),
            orders_linked: vec!["ORD-001".to_string()],
        }
    }

    #[test]
    fn test_picking_last_item_moves_transfer_in_progress() {
        let transfer = test_transfer(vec![
            ("flour", TransferItemStatus::Picked),
            ("sugar", TransferItemStatus::Pending),
        ]);

        let updated = TransferFlow::mark_item_picked(&transfer, "sugar").unwrap();

        assert_eq!(updated.items[1].status, TransferItemStatus::Picked);
        assert_eq!(updated.status, TransferStatus::InProgress);
        // Input untouched.
        assert_eq!(transfer.status, TransferStatus::Pending);
    }

    #[test]
    fn test_partial_pick_keeps_transfer_status() {
        let transfer = test_transfer(vec![
            ("flour", TransferItemStatus::Pending),
            ("sugar", TransferItemStatus::Pending),
        ]);

        let updated = TransferFlow::mark_item_picked(&transfer, "flour").unwrap();
        assert_eq!(updated.status, TransferStatus::Pending);
    }

    #[test]
    fn test_transferring_every_item_completes_transfer() {
        let mut transfer = test_transfer(vec![
            ("flour", TransferItemStatus::Picked),
            ("sugar", TransferItemStatus::Picked),
        ]);
        transfer.status = TransferStatus::InProgress;

        let mid = TransferFlow::mark_item_transferred(&transfer, "flour").unwrap();
        assert_eq!(mid.status, TransferStatus::InProgress);

        let done = TransferFlow::mark_item_transferred(&mid, "sugar").unwrap();
        assert_eq!(done.status, TransferStatus::Completed);
    }

    #[test]
    fn test_item_cannot_skip_picked() {
        let transfer = test_transfer(vec![("flour", TransferItemStatus::Pending)]);
        let err = TransferFlow::mark_item_transferred(&transfer, "flour").unwrap_err();
        assert_eq!(
            err,
            TransferError::InvalidItemStep {
                ingredient_id: "flour".to_string(),
                from: TransferItemStatus::Pending,
                to: TransferItemStatus::Transferred,
            }
        );
    }

    #[test]
    fn test_unknown_item_rejected() {
        let transfer = test_transfer(vec![("flour", TransferItemStatus::Pending)]);
        let err = TransferFlow::mark_item_picked(&transfer, "salt").unwrap_err();
        assert!(matches!(err, TransferError::UnknownItem { .. }));
    }

    #[test]
    fn test_completed_transfer_is_inert() {
        let mut transfer = test_transfer(vec![("flour", TransferItemStatus::Transferred)]);
        transfer.status = TransferStatus::Completed;

        let err = TransferFlow::mark_item_picked(&transfer, "flour").unwrap_err();
        assert_eq!(
            err,
            TransferError::AlreadyCompleted {
                transfer_id: "ITR-001".to_string(),
            }
        );
    }
}
