pub mod money_ops;
pub mod parse_ops;
