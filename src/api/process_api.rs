// ==========================================
// BOM 工时展开工具 - 处理API
// ==========================================
// 职责: 一次上传 → 一次完整处理 → 预览 / 导出
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ProcessConfig;
use crate::domain::OutputRow;
use crate::engine::{BomProcessor, ProcessOutcome, ProcessStats};
use crate::export::{preview_output, preview_raw, ExcelWriter, ExportError};
use crate::importer::{OrderImporterImpl, RawTable, ReferenceLoader};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// 处理API响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// 运行ID
    pub run_id: String,
    /// 上传文件
    pub input_file: String,
    /// 参考工时表
    pub reference_file: String,
    /// 运行统计
    pub stats: ProcessStats,
    /// 处理结果
    pub rows: Vec<OutputRow>,
    /// 处理耗时（毫秒）
    pub elapsed_ms: i64,
    /// 本次运行的有效配置（写入报告,保证结果可追溯）
    pub config: ProcessConfig,
    /// 上传原始表格（仅预览用,不写入报告）
    #[serde(skip)]
    pub raw_input: RawTable,
}

/// 处理API
pub struct ProcessApi {
    config: ProcessConfig,
}

impl ProcessApi {
    pub fn new(config: ProcessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    fn create_processor(&self) -> BomProcessor {
        BomProcessor::new(
            Box::new(OrderImporterImpl::excel(self.config.input_columns.clone())),
            ReferenceLoader::new(self.config.part_key_column.clone()),
            self.config.reference_path.clone(),
        )
    }

    fn create_writer(&self) -> ExcelWriter {
        ExcelWriter::new(self.config.sheet_name.clone(), self.config.column_padding)
    }

    /// 处理上传文件
    ///
    /// # 返回
    /// - Ok(ProcessResponse): 处理结果
    /// - Err(ApiError): 任一步失败,无部分结果
    pub fn process_upload(&self, input_path: &Path) -> ApiResult<ProcessResponse> {
        let start = Instant::now();
        let processor = self.create_processor();

        let ProcessOutcome {
            run_id,
            raw_input,
            rows,
            stats,
        } = processor.process(input_path)?;

        Ok(ProcessResponse {
            run_id,
            input_file: input_path.display().to_string(),
            reference_file: processor.reference_path().display().to_string(),
            stats,
            rows,
            elapsed_ms: start.elapsed().as_millis() as i64,
            config: self.config.clone(),
            raw_input,
        })
    }

    /// 导出到文件
    pub fn export(&self, response: &ProcessResponse, output_path: &Path) -> ApiResult<()> {
        self.create_writer()
            .write_to_path(&response.rows, output_path)?;
        Ok(())
    }

    /// 导出到内存（下载内容）
    pub fn export_bytes(&self, response: &ProcessResponse) -> ApiResult<Vec<u8>> {
        Ok(self.create_writer().to_bytes(&response.rows)?)
    }

    /// 写出运行报告（JSON）
    pub fn write_report(&self, response: &ProcessResponse, report_path: &Path) -> ApiResult<()> {
        let json = serde_json::to_string_pretty(response).map_err(ExportError::from)?;
        fs::write(report_path, json).map_err(|e| {
            ApiError::from(ExportError::WriteError {
                path: report_path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        Ok(())
    }

    /// 上传数据预览
    pub fn input_preview(&self, response: &ProcessResponse) -> String {
        preview_raw(&response.raw_input, self.config.input_preview_rows)
    }

    /// 处理结果预览
    pub fn output_preview(&self, response: &ProcessResponse) -> String {
        preview_output(&response.rows, self.config.output_preview_rows)
    }
}
