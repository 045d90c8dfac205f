//! 服务层模块

mod prompt_service;
mod question_service;
mod sanitizer;

pub use question_service::QuestionService;
