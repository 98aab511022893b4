pub mod doc;
pub mod model;
