// Application state for HTTP handlers
use crate::application::engine::SimulationEngine;

#[derive(Clone)]
pub struct AppState {
    pub engine: SimulationEngine,
}
