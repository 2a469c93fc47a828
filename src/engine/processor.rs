// ==========================================
// BOM 工时展开工具 - 处理编排器
// ==========================================
// 流程: 上传解析 → 参考表加载 → 展开 → 清洗
// 红线: 同步单线程；参考表每次运行重新加载；任一错误整体失败
// ==========================================

use crate::domain::{OrderRow, OutputRow, ReferenceTable};
use crate::engine::{Cleaner, Expander};
use crate::importer::{ImportResult, OrderImporter, RawTable, ReferenceLoader};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

// ==========================================
// ProcessStats - 运行统计
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    pub input_rows: usize,                // 上传订单行数
    pub unknown_parts: usize,             // 参考表中不存在零件号的订单行数
    pub expanded_rows: usize,             // 展开行数（清洗前）
    pub cleaned_rows: usize,              // 输出行数（清洗后）
    pub reference_parts: usize,           // 参考表零件数
    pub duplicate_reference_parts: usize, // 参考表重复零件行数（已忽略）
    pub workcenters: Vec<String>,         // 识别到的工作中心（列顺序）
}

// ==========================================
// ProcessOutcome - 运行结果
// ==========================================
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub run_id: String,
    pub raw_input: RawTable, // 上传原始表格（预览用）
    pub rows: Vec<OutputRow>,
    pub stats: ProcessStats,
}

/// 展开 + 清洗（纯函数,不读文件）
pub fn transform(orders: &[OrderRow], reference: &ReferenceTable) -> (Vec<OutputRow>, ProcessStats) {
    let expander = Expander::new(reference);

    let unknown_parts = orders
        .iter()
        .filter(|order| !expander.is_known(&order.part_number))
        .count();

    let expanded: Vec<OutputRow> = expander.expand(orders).collect();
    let expanded_rows = expanded.len();
    debug!(expanded_rows, "展开完成");

    let rows = Cleaner.clean(expanded);
    debug!(cleaned_rows = rows.len(), "清洗完成");

    let stats = ProcessStats {
        input_rows: orders.len(),
        unknown_parts,
        expanded_rows,
        cleaned_rows: rows.len(),
        reference_parts: reference.len(),
        duplicate_reference_parts: reference.duplicate_parts(),
        workcenters: reference
            .workcenters()
            .ids()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };

    (rows, stats)
}

// ==========================================
// BomProcessor - 处理编排器
// ==========================================
pub struct BomProcessor {
    importer: Box<dyn OrderImporter>,
    reference_loader: ReferenceLoader,
    reference_path: PathBuf,
}

impl BomProcessor {
    pub fn new(
        importer: Box<dyn OrderImporter>,
        reference_loader: ReferenceLoader,
        reference_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            importer,
            reference_loader,
            reference_path: reference_path.into(),
        }
    }

    pub fn reference_path(&self) -> &Path {
        &self.reference_path
    }

    /// 处理一次上传
    pub fn process(&self, input_path: &Path) -> ImportResult<ProcessOutcome> {
        let run_id = Uuid::new_v4().to_string();
        let span = info_span!("process", run_id = %run_id);
        let _guard = span.enter();

        info!(input = %input_path.display(), "开始处理上传文件");

        // === 步骤 1: 上传文件解析 + 映射 ===
        let import = self.importer.import_orders(input_path)?;

        // === 步骤 2: 参考表加载（每次重新读取）===
        let reference = self.reference_loader.load(&self.reference_path)?;

        // === 步骤 3/4: 展开 + 清洗 ===
        let (rows, stats) = transform(&import.orders, &reference);

        if stats.unknown_parts > 0 {
            warn!(unknown_parts = stats.unknown_parts, "部分订单零件号不在参考表中");
        }
        info!(
            input_rows = stats.input_rows,
            expanded_rows = stats.expanded_rows,
            cleaned_rows = stats.cleaned_rows,
            "处理完成"
        );

        Ok(ProcessOutcome {
            run_id,
            raw_input: import.raw,
            rows,
            stats,
        })
    }
}
