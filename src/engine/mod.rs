// ==========================================
// Bakery Operations Core - engine layer
// ==========================================
// Responsibility: business rules as pure, synchronous functions.
// Engines take full state as input and return new state as
// output; they never touch a store, never hold globals, and may
// be called concurrently without locking.
// ==========================================

pub mod requirement;
pub mod status_flow;
pub mod transfer;

// Re-export core engines
pub use requirement::{
    ComputePolicy, ComputeWarning, RequirementCalculator, RequirementError, RequirementLine,
    RequirementReport, UnknownProductPolicy,
};
pub use status_flow::{FlowError, FlowResult, StatusFlow, Tracked};
pub use transfer::{TransferError, TransferFlow, TransferResult};
