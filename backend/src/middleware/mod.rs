//! Request correlation and the login gate.

pub mod gate;
pub mod trace;

pub use gate::AuthGate;
pub use trace::Trace;
