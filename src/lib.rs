pub mod diag;
pub mod errors;
pub mod job;
pub mod output;
pub mod pipeline;
pub mod table;
