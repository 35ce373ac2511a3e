// ============================================================
// config.rs — 配置常量 + 可选配置文件
// ============================================================
// 集中管理所有服务地址、远程文件夹和本地文件名。
// 工作目录下存在 cat-uploader.json 时，其中的字段覆盖默认值；
// 文件缺失或格式错误时一律使用默认值。
// ============================================================

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

// ── 远程服务 ──

/// cataas 图片接口（后接配文）
pub const IMAGE_BASE_URL: &str = "https://cataas.com/cat/says";

/// Yandex Disk 资源接口
pub const STORAGE_API_URL: &str = "https://cloud-api.yandex.net/v1/disk/resources";

/// 远程文件夹名称（所有图片都上传到这里）
pub const GROUP_FOLDER: &str = "PD-140";

// ── 本地文件（相对于工作目录） ──

/// 上传记录日志
pub const LOG_FILE: &str = "uploaded_files.json";

/// 可选的配置文件
pub const SETTINGS_FILE: &str = "cat-uploader.json";

// ── 超时 ──

/// 单次 HTTP 请求的总超时
pub const HTTP_TIMEOUT_SECS: u64 = 60;

/// 一次运行使用的全部配置。
///
/// 显式传给每个操作，不存放在全局状态里。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub image_base_url: String,
    pub storage_api_url: String,
    pub folder: String,
    pub log_file: PathBuf,
    pub http_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            image_base_url: IMAGE_BASE_URL.to_string(),
            storage_api_url: STORAGE_API_URL.to_string(),
            folder: GROUP_FOLDER.to_string(),
            log_file: PathBuf::from(LOG_FILE),
            http_timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// 读取 `dir` 下的配置文件。文件不存在或无法解析时返回默认值。
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(SETTINGS_FILE);
        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("配置文件 {} 解析失败，使用默认配置: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{ "folder": "backup", "http_timeout_secs": 5 }"#,
        )
        .unwrap();

        let settings = Settings::load(dir.path());
        assert_eq!(settings.folder, "backup");
        assert_eq!(settings.http_timeout_secs, 5);
        assert_eq!(settings.image_base_url, IMAGE_BASE_URL);
        assert_eq!(settings.log_file, PathBuf::from(LOG_FILE));
    }

    #[test]
    fn broken_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }
}
