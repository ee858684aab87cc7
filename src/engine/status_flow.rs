// ==========================================
// Bakery Operations Core - status flow engine
// ==========================================
// Responsibility: encode the directed status graph per entity
// kind, answer "which transitions are legal from here", and
// apply one as a pure function.
// Input: entity kind + current status
// Output: successor set / updated entity value
// The caller persists the returned value; nothing is mutated
// in place and no store is touched here.
// ==========================================

use crate::domain::order::{Order, OrderItem};
use crate::domain::types::{EntityKind, OrderStatus};
use crate::domain::ProductionBatch;
use chrono::{DateTime, Utc};
use thiserror::Error;

// ==========================================
// Flow errors
// ==========================================

/// The only hard failure in the flow engine. It signals that the
/// caller offered an action the graph does not permit, and is
/// always locally recoverable (re-render the successor set).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("invalid status transition: kind={kind} from={from} to={to}")]
    InvalidTransition {
        kind: EntityKind,
        from: OrderStatus,
        to: OrderStatus,
    },
}

/// Result type alias
pub type FlowResult<T> = Result<T, FlowError>;

// ==========================================
// Tracked - entities the flow engine can advance
// ==========================================
pub trait Tracked: Clone {
    fn kind(&self) -> EntityKind;

    fn status(&self) -> OrderStatus;

    /// A copy of the entity with the new status and timestamp.
    /// Must not touch the original.
    fn with_status(&self, status: OrderStatus, now: DateTime<Utc>) -> Self;
}

impl Tracked for Order {
    fn kind(&self) -> EntityKind {
        EntityKind::Order
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    // Order-level only: item statuses are independent and are not
    // cascaded from the parent.
    fn with_status(&self, status: OrderStatus, now: DateTime<Utc>) -> Self {
        let mut updated = self.clone();
        updated.status = status;
        updated.status_updated_at = now;
        updated
    }
}

impl Tracked for OrderItem {
    fn kind(&self) -> EntityKind {
        EntityKind::OrderItem
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn with_status(&self, status: OrderStatus, now: DateTime<Utc>) -> Self {
        let mut updated = self.clone();
        updated.status = status;
        updated.status_updated_at = now;
        updated
    }
}

impl Tracked for ProductionBatch {
    fn kind(&self) -> EntityKind {
        EntityKind::ProductionBatch
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn with_status(&self, status: OrderStatus, now: DateTime<Utc>) -> Self {
        let mut updated = self.clone();
        // completed_at is stamped once, when the batch leaves the oven.
        if self.status == OrderStatus::InProgress && updated.completed_at.is_none() {
            updated.completed_at = Some(now);
        }
        updated.status = status;
        updated.status_updated_at = now;
        updated
    }
}

// ==========================================
// StatusFlow
// ==========================================
pub struct StatusFlow;

impl StatusFlow {
    /// Legal successors of `current` for the given entity kind.
    ///
    /// Forward successors come first, then `cancelled` (reachable
    /// from every non-terminal state). Terminal states return an
    /// empty set.
    pub fn next_states(kind: EntityKind, current: OrderStatus) -> Vec<OrderStatus> {
        if current.is_terminal() {
            return Vec::new();
        }
        let mut next = Self::forward_states(kind, current);
        next.push(OrderStatus::Cancelled);
        next
    }

    /// True iff `transition` from `from` to `to` would succeed.
    pub fn can_transition(kind: EntityKind, from: OrderStatus, to: OrderStatus) -> bool {
        Self::next_states(kind, from).contains(&to)
    }

    /// Apply one transition, returning the updated entity value.
    ///
    /// Pure: the input is left untouched; on success the copy carries
    /// `status = target` and `status_updated_at = now`. The caller
    /// supplies the clock so calls stay deterministic.
    pub fn transition<T: Tracked>(
        entity: &T,
        target: OrderStatus,
        now: DateTime<Utc>,
    ) -> FlowResult<T> {
        let kind = entity.kind();
        let from = entity.status();
        if !Self::can_transition(kind, from, target) {
            return Err(FlowError::InvalidTransition {
                kind,
                from,
                to: target,
            });
        }
        Ok(entity.with_status(target, now))
    }

    // Forward edges per kind. Off-graph non-terminal tokens have no
    // forward successor (only the cancel edge applies to them).
    fn forward_states(kind: EntityKind, current: OrderStatus) -> Vec<OrderStatus> {
        use OrderStatus::*;
        let next = match kind {
            // Full chain: intake through delivery.
            EntityKind::Order => match current {
                Pending => Some(Confirmed),
                Confirmed => Some(InProgress),
                InProgress => Some(Baked),
                Baked => Some(ReadyForDelivery),
                ReadyForDelivery => Some(Bagged),
                Bagged => Some(Labeled),
                Labeled => Some(Loaded),
                Loaded => Some(InTransit),
                InTransit => Some(Delivered),
                _ => None,
            },
            // Line items skip confirmation and the in-transit leg.
            EntityKind::OrderItem => match current {
                Pending => Some(InProgress),
                InProgress => Some(Baked),
                Baked => Some(ReadyForDelivery),
                ReadyForDelivery => Some(Bagged),
                Bagged => Some(Labeled),
                Labeled => Some(Loaded),
                Loaded => Some(Delivered),
                _ => None,
            },
            // Bakery floor plus the forward bagging cycle. The second
            // ready_for_delivery ("ready to ship") reuses the token;
            // see BaggingStage for the disambiguated stage enum.
            EntityKind::ProductionBatch => match current {
                InProgress => Some(Baked),
                Baked => Some(ReadyForDelivery),
                ReadyForDelivery => Some(Bagged),
                Bagged => Some(Labeled),
                Labeled => Some(ReadyForDelivery),
                _ => None,
            },
        };
        next.into_iter().collect()
    }
}
