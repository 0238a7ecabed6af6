pub mod profile;
pub mod report;

pub use profile::*;
pub use report::*;
