/// Request models for API calls
pub mod requests;
/// Response models and envelope unwrapping
pub mod responses;
