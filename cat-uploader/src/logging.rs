// ============================================================
// logging.rs — 文件日志模块
// ============================================================
// 通过 log 门面记录运行过程，env_logger 负责把日志写入
// 系统临时目录下的文件。控制台只留给用户提示信息。
//
// 日志文件路径: %TEMP%/cat-uploader.log
// 默认级别 info，可用 RUST_LOG 调整。
// ============================================================

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

/// 全局日志文件路径（初始化后不可变）
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// 初始化日志。
///
/// 在系统临时目录创建（或清空）日志文件，并把它设为 env_logger 的输出目标。
/// 应在程序启动时调用一次；文件无法创建时静默跳过，不影响主流程。
pub fn init() {
    let path = std::env::temp_dir().join("cat-uploader.log");
    let Ok(file) = File::create(&path) else {
        return;
    };

    let result = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        LOG_PATH.set(path).ok();
    }
}

/// 获取日志文件路径。
pub fn path() -> Option<&'static PathBuf> {
    LOG_PATH.get()
}
