pub mod axis;
pub mod registry;
