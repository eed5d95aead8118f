//! Integration test modules.

mod play_session_test;
