//! Tests for the contact SMS service
