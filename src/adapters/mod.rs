// Adapters layer: concrete implementations for external systems (http, filesystem).

pub mod coingecko;
pub mod storage;
