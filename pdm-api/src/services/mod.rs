//! Service layer: sheet sources and the cached domain services

pub mod goals;
pub mod secretariats;
pub mod sheets;

pub use goals::GoalService;
pub use secretariats::SecretariatService;
pub use sheets::{SheetClient, SheetSource};
