// ==========================================
// BOM 工时展开工具 - 领域层
// ==========================================
// 职责: 订单行 / 参考工时表 / 输出行 的类型定义
// ==========================================

pub mod order;
pub mod output;
pub mod reference;

// 重导出核心类型
pub use order::OrderRow;
pub use output::{format_number, OutputRow, OUTPUT_HEADERS};
pub use reference::{
    ReferenceRecord, ReferenceTable, TimeKind, WorkcenterColumns, WorkcenterMap, WorkcenterTimes,
};
