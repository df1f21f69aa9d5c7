pub mod package_managers;

pub use package_managers::*;
