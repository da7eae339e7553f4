pub mod parser;
pub mod solomon;
