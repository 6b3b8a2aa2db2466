pub mod priority_queue;
pub mod ripple_arena;
pub mod visit_ledger;

pub use priority_queue::DistanceQueue;
pub use ripple_arena::{Ripple, RippleArena, RippleId};
pub use visit_ledger::VisitLedger;
