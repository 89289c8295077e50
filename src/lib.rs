//! Dooray project management exposed as Model Context Protocol tools.

pub mod dooray;
pub mod mcp;
pub mod runtime;

#[cfg(test)]
mod test_support;
