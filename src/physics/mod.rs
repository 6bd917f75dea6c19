pub mod bodies;
pub mod pointer;
pub mod setup;
