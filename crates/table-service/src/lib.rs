//! # table-service
//!
//! Application layer containing the chat typing debounce engine.

pub mod services;

pub use services::{
    ReconcileOutcome, ServiceContext, ServiceError, ServiceResult, TypingService, TypingTransition,
};
