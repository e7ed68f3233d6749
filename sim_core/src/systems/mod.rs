pub mod contact;
pub mod motion;
pub mod physics;
pub mod scoring;
pub mod session;
pub mod tracking;

pub use contact::*;
pub use motion::*;
pub use physics::*;
pub use scoring::*;
pub use session::*;
pub use tracking::*;
