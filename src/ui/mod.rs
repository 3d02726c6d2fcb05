/// UI module exports
pub mod components;
