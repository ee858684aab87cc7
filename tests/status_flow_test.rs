// ==========================================
// StatusFlow engine integration tests
// ==========================================
// Test target: the directed status graph per entity kind.
// Coverage: full transition grid, terminal states, cancel edge,
// purity of transition application.
// ==========================================

mod test_helpers;

use bakery_ops::{EntityKind, FlowError, OrderStatus, StatusFlow, Tracked};
use test_helpers::{batch, fixed_now, order, order_item};

// ==========================================
// Full grid: transition succeeds iff next_states allows it
// ==========================================

#[test]
fn transition_matches_next_states_for_every_kind_and_pair() {
    let now = fixed_now();
    for kind in EntityKind::ALL {
        for from in OrderStatus::ALL {
            let allowed = StatusFlow::next_states(kind, from);
            for to in OrderStatus::ALL {
                let expected = allowed.contains(&to);
                let actual = match kind {
                    EntityKind::Order => {
                        let mut entity = order("ORD-100", "Cafe Sunrise", vec![]);
                        entity.status = from;
                        StatusFlow::transition(&entity, to, now).is_ok()
                    }
                    EntityKind::OrderItem => {
                        let mut entity = order_item("prod-001", "Sourdough Bread", 10.0, 4.99);
                        entity.status = from;
                        StatusFlow::transition(&entity, to, now).is_ok()
                    }
                    EntityKind::ProductionBatch => {
                        let mut entity = batch("batch-100", "prod-001", "Sourdough Bread", 24.0);
                        entity.status = from;
                        StatusFlow::transition(&entity, to, now).is_ok()
                    }
                };
                assert_eq!(actual, expected, "kind={} from={} to={}", kind, from, to);
            }
        }
    }
}

#[test]
fn terminal_states_have_empty_successor_sets() {
    for kind in EntityKind::ALL {
        assert!(StatusFlow::next_states(kind, OrderStatus::Delivered).is_empty());
        assert!(StatusFlow::next_states(kind, OrderStatus::Cancelled).is_empty());
    }
}

#[test]
fn cancelled_is_reachable_from_every_non_terminal_state() {
    for kind in EntityKind::ALL {
        for status in OrderStatus::ALL {
            if status.is_terminal() {
                continue;
            }
            assert!(
                StatusFlow::next_states(kind, status).contains(&OrderStatus::Cancelled),
                "kind={} status={}",
                kind,
                status
            );
        }
    }
}

// ==========================================
// Purity and failure semantics
// ==========================================

#[test]
fn transition_from_delivered_fails_and_leaves_input_unchanged() {
    let mut delivered = order("ORD-101", "The Morning Bakery", vec![]);
    delivered.status = OrderStatus::Delivered;
    let snapshot = delivered.clone();

    for target in OrderStatus::ALL {
        let result = StatusFlow::transition(&delivered, target, fixed_now());
        assert!(matches!(result, Err(FlowError::InvalidTransition { .. })));
    }
    assert_eq!(delivered.status, snapshot.status);
    assert_eq!(delivered.status_updated_at, snapshot.status_updated_at);
}

#[test]
fn order_transition_does_not_cascade_to_items() {
    let entity = order(
        "ORD-102",
        "Cafe Sunrise",
        vec![
            order_item("prod-001", "Sourdough Bread", 20.0, 4.99),
            order_item("prod-002", "Croissants", 40.0, 1.99),
        ],
    );

    let confirmed = StatusFlow::transition(&entity, OrderStatus::InProgress, fixed_now()).unwrap();

    assert_eq!(confirmed.status, OrderStatus::InProgress);
    // Item statuses stay independent; aggregation is the caller's call.
    for item in &confirmed.items {
        assert_eq!(item.status, OrderStatus::Pending);
    }
}

#[test]
fn item_statuses_advance_independently_of_the_order() {
    let entity = order(
        "ORD-103",
        "Cafe Sunrise",
        vec![order_item("prod-001", "Sourdough Bread", 20.0, 4.99)],
    );

    let item = StatusFlow::transition(&entity.items[0], OrderStatus::InProgress, fixed_now()).unwrap();
    assert_eq!(item.status, OrderStatus::InProgress);
    assert_eq!(entity.status, OrderStatus::Confirmed);
    assert_eq!(item.kind(), EntityKind::OrderItem);
}

// ==========================================
// Batch lifecycle
// ==========================================

#[test]
fn batch_walks_the_floor_and_bagging_cycle() {
    use OrderStatus::*;
    let now = fixed_now();
    let mut entity = batch("batch-101", "prod-002", "Croissants", 48.0);
    assert_eq!(entity.status, InProgress);

    for target in [Baked, ReadyForDelivery, Bagged, Labeled, ReadyForDelivery] {
        entity = StatusFlow::transition(&entity, target, now).unwrap();
        assert_eq!(entity.status, target);
    }
    // Leaving the oven stamped completion exactly once.
    assert_eq!(entity.completed_at, Some(now));
}

#[test]
fn batch_cannot_reach_delivery_leg() {
    let entity = batch("batch-102", "prod-003", "Baguette", 36.0);
    for target in [OrderStatus::Loaded, OrderStatus::InTransit, OrderStatus::Delivered] {
        assert!(!StatusFlow::can_transition(
            EntityKind::ProductionBatch,
            entity.status,
            target
        ));
    }
}
