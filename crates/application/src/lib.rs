//! merge-dns application layer: ports implemented by adapters and the use
//! cases built on top of them.
pub mod ports;
pub mod use_cases;
