// ============================================================
// cataas.rs — 猫图获取
// ============================================================
// GET {base}/{配文} → 200 时响应体即 JPEG 图片。
// ============================================================

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::error::{Error, Result};
use crate::http::{Request, Transport};

/// 路径段中必须转义的字符。`/` 保持原样，配文里的斜杠会进入路径。
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^');

/// 拼出带配文的图片地址
pub fn image_url(base_url: &str, caption: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        utf8_percent_encode(caption, PATH_SEGMENT)
    )
}

/// 获取写有配文的猫图。只接受 HTTP 200。
pub fn fetch_image(transport: &dyn Transport, base_url: &str, caption: &str) -> Result<Vec<u8>> {
    let response = transport.send(&Request::get(image_url(base_url, caption)))?;

    if response.status != 200 {
        return Err(Error::ImageFetch {
            status: response.status,
        });
    }

    log::info!("获取图片成功: {} 字节", response.body.len());
    Ok(response.body)
}
