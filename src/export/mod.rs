// ==========================================
// BOM 工时展开工具 - 导出层
// ==========================================
// 职责: Excel 导出 / 文本预览
// ==========================================

pub mod error;
pub mod excel_writer;
pub mod preview;

pub use error::{ExportError, ExportResult};
pub use excel_writer::{column_widths, ExcelWriter};
pub use preview::{preview_output, preview_raw, render_table};
