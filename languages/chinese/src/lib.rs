pub mod frequency;
pub mod loader;

pub use frequency::{CharFrequency, morphemic_freedom};
pub use loader::{DicLoader, LoadSummary};
