// Application layer - Engine, scheduling and collaborator seams
pub mod clock;
pub mod engine;
pub mod log_cue;
pub mod schedule;
pub mod terminal;
