// ============================================================
// history.rs — 本地上传记录
// ============================================================
// uploaded_files.json 格式：
//   { "files": [ { text, filename, size, upload_timestamp }, ... ] }
//
// 每次运行整体读入 → 追加一条 → 整体写回。
// 文件缺失和内容损坏同等对待：从空记录重新开始。
// 能解析的文件里的其他字段原样保留。
// 没有加锁，两个进程同时写时后写者覆盖先写者。
// ============================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// 一次成功上传的记录，写入后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub text: String,
    pub filename: String,
    #[serde(default)]
    pub size: u64,
    pub upload_timestamp: String,
}

impl UploadRecord {
    /// 以当前本地时间创建记录，文件名为 `<stem>.jpg`
    pub fn new(text: impl Into<String>, stem: &str, size: u64) -> Self {
        Self {
            text: text.into(),
            filename: format!("{stem}.jpg"),
            size,
            upload_timestamp: timestamp_now(),
        }
    }
}

/// 记录文件的完整内容。
///
/// 条目和顶层的其他字段按原样保留，写回时不丢失旧版本或手工加入的内容。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogFile {
    pub files: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LogFile {
    /// 能按当前格式解析的记录（跳过字段不全的旧条目）
    pub fn records(&self) -> Vec<UploadRecord> {
        self.files
            .iter()
            .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
            .collect()
    }
}

/// ISO-8601 本地时间，微秒精度，不带时区
fn timestamp_now() -> String {
    chrono::Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// 读取记录文件。
///
/// 文件不存在、不是合法 JSON、或没有 `files` 数组时返回空记录。
pub fn read_log(path: &Path) -> LogFile {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("{} 内容无法解析，重新开始记录: {e}", path.display());
            LogFile::default()
        }),
        Err(_) => LogFile::default(),
    }
}

/// 追加一条记录并整体写回，返回记录文件路径。
pub fn append_log(record: UploadRecord, path: &Path) -> Result<PathBuf> {
    let mut log_file = read_log(path);
    log_file.files.push(serde_json::to_value(record)?);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&log_file)?;
    fs::write(path, json)?;

    log::info!(
        "已写入上传记录 {}（共 {} 条）",
        path.display(),
        log_file.files.len()
    );
    Ok(path.to_path_buf())
}
