pub mod narrator;
pub mod openrouter;
pub mod prompt;
