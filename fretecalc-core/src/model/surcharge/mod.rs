mod empty_leg;
pub mod surcharge_ops;

pub use empty_leg::EmptyLeg;
