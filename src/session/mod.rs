pub(crate) mod claims;
pub(crate) mod core;

mod publish;
