// ============================================================
// disk.rs — Yandex Disk 存储接口
// ============================================================
// 三个操作，全部带 `Authorization: OAuth <token>` 请求头：
//   1. ensure_folder  PUT  {api}?path=/<folder>
//   2. upload         GET  {api}/upload?path=...&overwrite=true
//                     PUT  <href>（原始字节，不带认证头）
//   3. get_size       GET  {api}?path=/<folder>/<file>.jpg
// ============================================================

use serde::Deserialize;
use std::fmt;

use crate::error::{Error, Result};
use crate::http::{Request, Transport};

/// 用户输入的访问令牌。Debug 输出不暴露内容，避免写进日志文件。
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    fn authorization(&self) -> String {
        format!("OAuth {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// 上传链接接口的响应
#[derive(Debug, Deserialize)]
struct UploadLink {
    href: String,
}

/// 资源元数据，只关心大小
#[derive(Debug, Deserialize)]
struct ResourceMeta {
    #[serde(default)]
    size: u64,
}

/// 远程文件路径: /<folder>/<stem>.jpg
pub fn remote_path(folder: &str, stem: &str) -> String {
    format!("/{folder}/{stem}.jpg")
}

fn authorized(request: Request, credential: &Credential) -> Request {
    request.header("Authorization", credential.authorization())
}

/// 确保远程文件夹存在。201（新建）和 409（已存在）都算成功。
pub fn ensure_folder(
    transport: &dyn Transport,
    api_url: &str,
    credential: &Credential,
    folder: &str,
) -> Result<()> {
    let request = authorized(Request::put(api_url), credential).query("path", format!("/{folder}"));
    let response = transport.send(&request)?;

    match response.status {
        201 => log::info!("已创建文件夹 /{folder}"),
        409 => log::info!("文件夹 /{folder} 已存在"),
        status => return Err(Error::FolderCreate { status }),
    }
    Ok(())
}

/// 两步上传：先取上传链接（总是覆盖同名文件），再 PUT 原始字节。
pub fn upload(
    transport: &dyn Transport,
    api_url: &str,
    credential: &Credential,
    folder: &str,
    stem: &str,
    bytes: &[u8],
) -> Result<()> {
    // 1. 获取上传链接
    let request = authorized(Request::get(format!("{api_url}/upload")), credential)
        .query("path", remote_path(folder, stem))
        .query("overwrite", "true");
    let response = transport.send(&request)?;

    if response.status != 200 {
        return Err(Error::UploadLink {
            status: response.status,
        });
    }

    let link: UploadLink =
        serde_json::from_slice(&response.body).map_err(Error::InvalidResponse)?;

    // 2. 上传文件
    let response = transport.send(&Request::put(link.href).body(bytes.to_vec()))?;

    if response.status != 201 {
        return Err(Error::Upload {
            status: response.status,
        });
    }

    log::info!("上传完成: {} ({} 字节)", remote_path(folder, stem), bytes.len());
    Ok(())
}

/// 查询已上传文件的大小。
///
/// 非 200 或响应无法解析时返回 0，不视为错误；只有网络层失败才返回 Err。
/// 200 但响应体不是 JSON 时也按 0 处理，不中止流程（旧版脚本在这里会直接报错退出）。
pub fn get_size(
    transport: &dyn Transport,
    api_url: &str,
    credential: &Credential,
    folder: &str,
    stem: &str,
) -> Result<u64> {
    let path = remote_path(folder, stem);
    let request = authorized(Request::get(api_url), credential).query("path", path.as_str());
    let response = transport.send(&request)?;

    if response.status != 200 {
        log::warn!("查询 {path} 大小失败: HTTP {}，按 0 处理", response.status);
        return Ok(0);
    }

    match serde_json::from_slice::<ResourceMeta>(&response.body) {
        Ok(meta) => Ok(meta.size),
        Err(e) => {
            log::warn!("解析 {path} 元数据失败，按 0 处理: {e}");
            Ok(0)
        }
    }
}
