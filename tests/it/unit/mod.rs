//! Unit tests for timegrid-creation.

mod controller_api_tests;
