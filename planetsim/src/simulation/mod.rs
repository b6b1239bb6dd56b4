pub mod states;
pub mod trajectory;
pub mod params;
pub mod forces;
pub mod frame;
pub mod integrator;
pub mod diagnostics;
pub mod engine;
pub mod scenario;
