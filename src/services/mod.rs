pub mod gemini_service;
pub mod prompt_builder;
