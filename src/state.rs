//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。

use std::sync::Arc;

use crate::llm::CompletionBackend;
use crate::services::QuestionService;

/// 应用共享状态
///
/// 启动后只读，无需加锁即可在并发请求之间共享
#[derive(Clone)]
pub struct AppState {
    /// 出题服务
    pub questions: Arc<QuestionService>,
}

impl AppState {
    /// 使用给定的补全后端创建应用状态
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            questions: Arc::new(QuestionService::new(backend)),
        }
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state(backend: Arc<dyn CompletionBackend>) -> Arc<AppState> {
    Arc::new(AppState::new(backend))
}
