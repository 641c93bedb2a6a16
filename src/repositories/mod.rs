pub mod identifier_log;

pub use identifier_log::IdentifierLog;
