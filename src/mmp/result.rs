use crate::ParseError;

/// Convenience type to make error mapping cleaner
pub type Result<T = ()> = anyhow::Result<T>;

/// Outcome of parsing a single message
pub type ParseResult<T> = std::result::Result<T, ParseError>;
