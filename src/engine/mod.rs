// ==========================================
// BOM 工时展开工具 - 引擎层
// ==========================================
// 职责: 展开（Expander）→ 清洗（Cleaner）
// ==========================================

pub mod cleaner;
pub mod expander;
pub mod processor;

pub use cleaner::Cleaner;
pub use expander::Expander;
pub use processor::{transform, BomProcessor, ProcessOutcome, ProcessStats};
