pub mod assemble_output;
pub mod explanation;
