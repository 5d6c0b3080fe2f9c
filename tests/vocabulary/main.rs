//! Integration tests for Layer 1: Vocabulary
//!
//! Tests for vocabulary building, lookup, and word classification.
