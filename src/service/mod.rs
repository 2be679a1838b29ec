pub mod alert_flow;
pub mod digest;
pub mod normalizer;
