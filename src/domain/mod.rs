// Domain layer - Value types and pure rules of the simulated terminal
pub mod command;
pub mod console;
pub mod metrics;
pub mod seed;
pub mod series;
pub mod snapshot;
