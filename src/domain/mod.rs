pub mod board;
pub mod coordinate;
pub mod models;
pub mod rules;
pub mod services;
