pub mod commands;
pub mod pricing;
pub mod telegram;
