//! Filesystem-backed tests for the resolution pipeline.

mod edge_cases;
