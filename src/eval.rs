pub mod banner;
pub mod resolver;
pub mod subtitle;
