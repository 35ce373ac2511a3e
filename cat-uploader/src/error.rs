// ============================================================
// error.rs — 流程错误类型
// ============================================================
// 每个 HTTP 步骤各有一种错误，携带服务端返回的状态码。
// 调用方在入口处统一 match / 打印，不做重试。
// ============================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("获取图片失败: HTTP {status}")]
    ImageFetch { status: u16 },

    #[error("创建文件夹失败: HTTP {status}")]
    FolderCreate { status: u16 },

    #[error("获取上传链接失败: HTTP {status}")]
    UploadLink { status: u16 },

    #[error("上传文件失败: HTTP {status}")]
    Upload { status: u16 },

    #[error("存储服务响应无法解析: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    #[error("网络请求失败: {0}")]
    Transport(#[from] ureq::Error),

    #[error("读写文件失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化上传记录失败: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 失败请求的 HTTP 状态码（非 HTTP 错误返回 None）
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ImageFetch { status }
            | Self::FolderCreate { status }
            | Self::UploadLink { status }
            | Self::Upload { status } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
