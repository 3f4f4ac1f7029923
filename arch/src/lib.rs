pub mod fmt;
pub mod inst;
pub mod op;
pub mod reg;
