pub mod document;
pub mod sample_content;
pub mod template;
