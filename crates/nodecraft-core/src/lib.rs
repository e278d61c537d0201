pub mod constants;
pub mod cursor;
pub mod form;
pub mod frame;
pub mod gallery;
pub mod hero;
pub mod host;
pub mod loading;
pub mod nav;
pub mod notify;
pub mod particles;
pub mod state;

pub use cursor::CursorTracker;
pub use frame::{FrameDriver, FrameTask, LoopHandle};
pub use host::{ElementFinder, Glow, HostEnv, Indicator, Surface};
pub use particles::{Particle, ParticleField, ParticleSet};
pub use state::AppState;
