// ============================================================
// http.rs — HTTP 传输层
// ============================================================
// 流程代码只依赖 Transport trait：给出方法、地址、请求头、
// 查询参数和请求体，拿回状态码和响应体。
// 生产环境用 ureq 实现；测试用记录请求的假实现。
//
// 注意：非 2xx 状态码不是传输错误，由调用方自行判断。
// ============================================================

use std::io::Read;
use std::time::Duration;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
}

/// 一次 HTTP 请求的完整描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// 执行 HTTP 请求的能力。
pub trait Transport {
    fn send(&self, request: &Request) -> Result<Response>;
}

/// 基于 ureq 的阻塞式实现。
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout_secs: u64) -> Self {
        // 关闭 "状态码即错误"，让 201/409 等状态码交给流程判断
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(timeout_secs)))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &Request) -> Result<Response> {
        log::debug!("{:?} {}", request.method, request.url);

        let mut response = match request.method {
            Method::Get => {
                let mut builder = self.agent.get(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                for (key, value) in &request.query {
                    builder = builder.query(key, value);
                }
                builder.call()?
            }
            Method::Put => {
                let mut builder = self.agent.put(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                for (key, value) in &request.query {
                    builder = builder.query(key, value);
                }
                match &request.body {
                    Some(body) => builder.send(&body[..])?,
                    None => builder.send_empty()?,
                }
            }
        };

        let status = response.status().as_u16();
        // 图片可能超过 ureq 默认的 10MB 读取上限，直接读到底
        let mut body = Vec::new();
        response
            .body_mut()
            .as_reader()
            .read_to_end(&mut body)?;

        log::debug!("{:?} {} -> {}", request.method, request.url, status);
        Ok(Response::new(status, body))
    }
}

#[cfg(test)]
impl Request {
    /// 查询参数取值（按名称取第一个）
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 请求头取值（名称不区分大小写）
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
pub mod testing {
    //! 测试用的假传输层：按顺序记录请求，按顺序回放预设响应。

    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Default)]
    pub struct FakeTransport {
        responses: RefCell<VecDeque<Response>>,
        requests: RefCell<Vec<Request>>,
    }

    impl FakeTransport {
        pub fn new(responses: impl IntoIterator<Item = Response>) -> Self {
            Self {
                responses: RefCell::new(responses.into_iter().collect()),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn requests(&self) -> Vec<Request> {
            self.requests.borrow().clone()
        }
    }

    impl Transport for FakeTransport {
        fn send(&self, request: &Request) -> Result<Response> {
            self.requests.borrow_mut().push(request.clone());
            let response = self
                .responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| panic!("没有为 {} 预设响应", request.url));
            Ok(response)
        }
    }
}
