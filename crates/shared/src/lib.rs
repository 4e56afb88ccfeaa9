pub mod ethrpc;
pub mod network;
pub mod tracing;
