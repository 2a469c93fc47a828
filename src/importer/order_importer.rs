// ==========================================
// BOM 工时展开工具 - 订单导入器实现
// ==========================================
// 流程: 解析 → 映射（任一行失败即整体失败）
// ==========================================

use crate::config::InputColumns;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper as FieldMapperImpl;
use crate::importer::file_parser::ExcelParser;
use crate::importer::importer_trait::{FieldMapper, FileParser, OrderImport, OrderImporter};
use std::path::Path;
use tracing::{debug, error, info, instrument};

// ==========================================
// OrderImporterImpl - 订单导入器实现
// ==========================================
pub struct OrderImporterImpl {
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
}

impl OrderImporterImpl {
    pub fn new(file_parser: Box<dyn FileParser>, field_mapper: Box<dyn FieldMapper>) -> Self {
        Self {
            file_parser,
            field_mapper,
        }
    }

    /// Excel 上传文件 + 按列位置映射
    pub fn excel(columns: InputColumns) -> Self {
        Self::new(Box::new(ExcelParser), Box::new(FieldMapperImpl::new(columns)))
    }
}

impl OrderImporter for OrderImporterImpl {
    #[instrument(skip(self, file_path), fields(file_path = %file_path.display()))]
    fn import_orders(&self, file_path: &Path) -> ImportResult<OrderImport> {
        // === 步骤 1: 解析文件 ===
        debug!("步骤 1: 解析文件");
        let raw = self.file_parser.parse_to_raw_table(file_path).map_err(|e| {
            error!(error = %e, "文件解析失败");
            e
        })?;
        info!(total_rows = raw.len(), "文件解析完成");

        // === 步骤 2: 字段映射 ===
        debug!("步骤 2: 字段映射");
        let orders = raw
            .rows
            .iter()
            .map(|row| self.field_mapper.map_to_order_row(row))
            .collect::<ImportResult<Vec<_>>>()
            .map_err(|e| {
                error!(error = %e, "字段映射失败");
                e
            })?;
        info!(orders = orders.len(), "字段映射完成");

        Ok(OrderImport { raw, orders })
    }
}
