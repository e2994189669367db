pub mod account;
pub mod arbitration;
pub mod lifecycle;
pub mod notify;
pub mod reviews;
pub mod verification;

pub use lifecycle::ActorSide;
