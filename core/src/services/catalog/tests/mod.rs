//! Tests for the item catalog service
