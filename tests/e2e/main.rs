//! End-to-end tests for the catalog store.
