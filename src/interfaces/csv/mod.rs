pub mod session_reader;
pub mod statement_writer;
