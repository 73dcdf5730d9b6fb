//! Hand-combination detection and classification.

pub mod classify;
pub mod detect;

pub use classify::{classify, ClassifierState};
pub use detect::{detect, Detection};
