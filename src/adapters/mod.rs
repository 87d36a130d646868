// Adapters layer: concrete implementations for external systems (upstream http, sqlite storage).

pub mod http;
pub mod storage;
