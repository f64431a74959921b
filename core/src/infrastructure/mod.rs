pub mod llm;
pub mod media;
pub mod storage;
