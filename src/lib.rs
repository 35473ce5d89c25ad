pub mod app;
pub mod audio;
pub mod engine;
pub mod mnemonic;
pub mod model;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
