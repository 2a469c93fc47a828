// ==========================================
// BOM 工时展开工具 - 参考工时表领域模型
// ==========================================
// 来源: 固定路径的参考 CSV（Top_Material + "<编号> <Setup|Machine|Labour>" 列）
// 用途: 每次运行加载一次,只读
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ==========================================
// TimeKind - 工时类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeKind {
    Setup,   // 准备工时
    Machine, // 机器工时
    Labour,  // 人工工时
}

impl TimeKind {
    pub const ALL: [TimeKind; 3] = [TimeKind::Setup, TimeKind::Machine, TimeKind::Labour];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeKind::Setup => "Setup",
            TimeKind::Machine => "Machine",
            TimeKind::Labour => "Labour",
        }
    }

    /// 从列名后缀解析（大小写敏感，与参考表列名一致）
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Setup" => Some(TimeKind::Setup),
            "Machine" => Some(TimeKind::Machine),
            "Labour" => Some(TimeKind::Labour),
            _ => None,
        }
    }
}

impl fmt::Display for TimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// WorkcenterColumns - 单个工作中心的三列位置
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkcenterColumns {
    pub setup: Option<usize>,   // "<id> Setup" 列下标
    pub machine: Option<usize>, // "<id> Machine" 列下标
    pub labour: Option<usize>,  // "<id> Labour" 列下标
}

impl WorkcenterColumns {
    pub fn get(&self, kind: TimeKind) -> Option<usize> {
        match kind {
            TimeKind::Setup => self.setup,
            TimeKind::Machine => self.machine,
            TimeKind::Labour => self.labour,
        }
    }

    /// 设置列下标,返回被覆盖的旧下标
    pub fn set(&mut self, kind: TimeKind, column: usize) -> Option<usize> {
        let slot = match kind {
            TimeKind::Setup => &mut self.setup,
            TimeKind::Machine => &mut self.machine,
            TimeKind::Labour => &mut self.labour,
        };
        slot.replace(column)
    }
}

// ==========================================
// WorkcenterMap - 工作中心映射
// ==========================================
// 顺序: 按参考表中首次出现的列顺序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkcenterMap {
    entries: Vec<(String, WorkcenterColumns)>,
}

impl WorkcenterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记 (工作中心, 工时类型) → 列下标
    ///
    /// 同一组合重复出现时后者覆盖前者,返回被覆盖的列下标
    pub fn insert(&mut self, workcenter_id: &str, kind: TimeKind, column: usize) -> Option<usize> {
        match self.entries.iter_mut().find(|(id, _)| id == workcenter_id) {
            Some((_, columns)) => columns.set(kind, column),
            None => {
                let mut columns = WorkcenterColumns::default();
                columns.set(kind, column);
                self.entries.push((workcenter_id.to_string(), columns));
                None
            }
        }
    }

    pub fn get(&self, workcenter_id: &str) -> Option<&WorkcenterColumns> {
        self.entries
            .iter()
            .find(|(id, _)| id == workcenter_id)
            .map(|(_, columns)| columns)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WorkcenterColumns)> {
        self.entries.iter().map(|(id, columns)| (id.as_str(), columns))
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==========================================
// WorkcenterTimes - 单个工作中心的单件工时
// ==========================================
// None: 单元格为空或非数值（展开时按 0 处理）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkcenterTimes {
    pub setup: Option<f64>,
    pub machine: Option<f64>,
    pub labour: Option<f64>,
}

impl WorkcenterTimes {
    pub fn get(&self, kind: TimeKind) -> Option<f64> {
        match kind {
            TimeKind::Setup => self.setup,
            TimeKind::Machine => self.machine,
            TimeKind::Labour => self.labour,
        }
    }

    pub fn set(&mut self, kind: TimeKind, value: Option<f64>) {
        match kind {
            TimeKind::Setup => self.setup = value,
            TimeKind::Machine => self.machine = value,
            TimeKind::Labour => self.labour = value,
        }
    }

    /// 按数量放大: [setup, machine, labour]
    pub fn scaled(&self, quantity: f64) -> [f64; 3] {
        TimeKind::ALL.map(|kind| self.get(kind).unwrap_or(0.0) * quantity)
    }
}

// ==========================================
// ReferenceRecord - 参考工时记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    pub part_number: String,         // 零件号（Top_Material）
    pub times: Vec<WorkcenterTimes>, // 与 WorkcenterMap 顺序一一对应
    pub row_number: usize,           // 参考表行号（1-based，含表头行）
}

// ==========================================
// ReferenceTable - 参考工时表
// ==========================================
// 重复零件号规则: 先到先得,后续重复行仅计数
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    workcenters: WorkcenterMap,
    records: Vec<ReferenceRecord>,
    index: HashMap<String, usize>,
    duplicate_parts: usize,
}

impl ReferenceTable {
    pub fn new(workcenters: WorkcenterMap) -> Self {
        Self {
            workcenters,
            ..Self::default()
        }
    }

    /// 写入记录
    ///
    /// # 返回
    /// - true: 新零件号,已写入
    /// - false: 零件号已存在,本行被忽略
    pub fn insert(&mut self, record: ReferenceRecord) -> bool {
        if self.index.contains_key(&record.part_number) {
            self.duplicate_parts += 1;
            return false;
        }
        self.index
            .insert(record.part_number.clone(), self.records.len());
        self.records.push(record);
        true
    }

    /// 精确匹配零件号
    pub fn lookup(&self, part_number: &str) -> Option<&ReferenceRecord> {
        self.index.get(part_number).map(|&idx| &self.records[idx])
    }

    pub fn workcenters(&self) -> &WorkcenterMap {
        &self.workcenters
    }

    pub fn duplicate_parts(&self) -> usize {
        self.duplicate_parts
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
