// Integration tests for eatnow
// This file serves as the main entry point for integration tests

mod common;

#[path = "integration/quiz_flow.rs"]
mod quiz_flow;

#[path = "integration/recommend_client.rs"]
mod recommend_client;

#[path = "integration/config_file.rs"]
mod config_file;

#[path = "integration/tui_render.rs"]
mod tui_render;
