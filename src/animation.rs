pub mod ease;
pub mod interp;
