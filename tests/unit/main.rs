//! Unit test modules.

mod camera_test;
mod save_test;
mod skybox_test;
mod weather_test;
