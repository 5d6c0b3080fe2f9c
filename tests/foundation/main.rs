//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: ScaleMode, Conversion, Rejection, and Error.

mod conversions;
mod serialization;
