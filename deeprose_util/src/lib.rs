pub mod bwrite;
pub mod constants;
pub mod io;
