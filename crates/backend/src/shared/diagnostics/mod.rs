pub mod faults;
pub mod probe;

pub use probe::Prober;
