// ============================================================
// pipeline.rs — 上传流程协调器
// ============================================================
// 固定顺序，任一步失败即中止，之前的步骤不回滚：
//   Fetch → FolderEnsure → Upload → SizeQuery → LogAppend → Report
//
// 通过回调函数 (callback) 向调用方报告当前步骤。
// ============================================================

use std::path::PathBuf;

use crate::cataas;
use crate::config::Settings;
use crate::disk::{self, Credential};
use crate::error::Result;
use crate::history::{self, UploadRecord};
use crate::http::Transport;

/// 流程中的一个步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Fetch,
    FolderEnsure,
    Upload,
    SizeQuery,
    LogAppend,
    Report,
}

/// 进度信息，传给调用方显示。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub step: Step,
    pub message: String,
}

impl Progress {
    pub fn new(step: Step, message: impl Into<String>) -> Self {
        Self {
            step,
            message: message.into(),
        }
    }
}

/// 一次成功运行的汇总
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub folder: String,
    pub filename: String,
    pub size: u64,
    pub log_path: PathBuf,
    pub total_records: usize,
}

pub enum RunOutcome {
    Completed(RunSummary),
    /// 配文为空（去掉首尾空白后），什么都没做
    EmptyCaption,
}

/// 由配文得到文件名主干：去掉首尾空白，空格换成下划线。
///
/// 不做其他处理，斜杠和标点会原样进入远程路径。
pub fn derive_filename_stem(caption: &str) -> String {
    caption.trim().replace(' ', "_")
}

/// 执行一次完整的上传流程。
pub fn run(
    transport: &dyn Transport,
    settings: &Settings,
    credential: &Credential,
    caption: &str,
    on_progress: &dyn Fn(Progress),
) -> Result<RunOutcome> {
    let caption = caption.trim();
    if caption.is_empty() {
        log::info!("配文为空，跳过");
        return Ok(RunOutcome::EmptyCaption);
    }

    let folder = settings.folder.as_str();
    let api = settings.storage_api_url.as_str();
    let stem = derive_filename_stem(caption);

    // ── 1. 获取图片 ──
    on_progress(Progress::new(Step::Fetch, "正在获取猫图..."));
    let image = cataas::fetch_image(transport, &settings.image_base_url, caption)?;

    // ── 2. 确保文件夹存在 ──
    on_progress(Progress::new(
        Step::FolderEnsure,
        format!("正在检查文件夹 '{folder}'..."),
    ));
    disk::ensure_folder(transport, api, credential, folder)?;

    // ── 3. 上传 ──
    on_progress(Progress::new(Step::Upload, format!("正在上传 '{stem}.jpg'...")));
    disk::upload(transport, api, credential, folder, &stem, &image)?;

    // ── 4. 查询大小 ──
    on_progress(Progress::new(Step::SizeQuery, "正在查询文件大小..."));
    let size = disk::get_size(transport, api, credential, folder, &stem)?;

    // ── 5. 写入本地记录 ──
    on_progress(Progress::new(Step::LogAppend, "正在写入上传记录..."));
    let record = UploadRecord::new(caption, &stem, size);
    let filename = record.filename.clone();
    let log_path = history::append_log(record, &settings.log_file)?;
    let total_records = history::read_log(&log_path).files.len();

    on_progress(Progress::new(Step::Report, "上传完成"));

    Ok(RunOutcome::Completed(RunSummary {
        folder: folder.to_string(),
        filename,
        size,
        log_path,
        total_records,
    }))
}
