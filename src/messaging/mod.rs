pub mod event;
pub mod registry;

pub use event::EventKind;
pub use registry::{Subscription, SubscriptionRegistry};
