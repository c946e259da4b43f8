// src/candidates/tests/mod.rs

mod services_tests;
