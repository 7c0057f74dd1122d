#[path = "data/tools.rs"]
mod tools;
