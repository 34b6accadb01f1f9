pub mod openai;
pub mod relay;
