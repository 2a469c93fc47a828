// ==========================================
// BOM 工时展开工具 - 导入层
// ==========================================
// 职责: 外部文件导入,生成领域数据
// 支持: Excel（订单）, CSV（参考工时表）
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod order_importer;
pub mod reference_loader;

// 重导出核心类型
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_parser::{CsvParser, ExcelParser, RawRow, RawTable};
pub use order_importer::OrderImporterImpl;
pub use reference_loader::{discover_workcenters, ReferenceLoader};

// 重导出 Trait 接口
pub use importer_trait::{DataCleaner, FieldMapper, FileParser, OrderImport, OrderImporter};
