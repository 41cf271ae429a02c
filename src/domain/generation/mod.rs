pub mod service;

pub use service::{BankGenerator, BankSummary, GenerationSummary};
