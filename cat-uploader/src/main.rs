// ============================================================
// main.rs — 程序入口
// ============================================================
// 职责：
//   1. 初始化日志、读取配置
//   2. 依次询问访问令牌和配文
//   3. 执行上传流程并打印汇总
//
// 流程中的任何错误只在这里打印一次，进程正常退出。
// ============================================================

mod cataas;
mod config;
mod disk;
mod error;
mod history;
mod http;
mod logging;
mod pipeline;

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::config::Settings;
use crate::disk::Credential;
use crate::http::UreqTransport;
use crate::pipeline::{Progress, RunOutcome, RunSummary};

fn main() {
    logging::init();

    if let Err(e) = run_interactive() {
        log::error!("{e:#}");
        println!("错误: {e:#}");
    }
}

fn run_interactive() -> Result<()> {
    let settings = Settings::load(Path::new("."));
    log::info!("配置: {settings:?}");

    let token = prompt("请输入 Yandex Disk 访问令牌: ")?;
    if token.is_empty() {
        println!("令牌不能为空！");
        return Ok(());
    }
    let credential = Credential::new(token);

    let caption = prompt("请输入图片上的文字: ")?;

    let transport = UreqTransport::new(settings.http_timeout_secs);
    let outcome = pipeline::run(&transport, &settings, &credential, &caption, &|p: Progress| {
        log::info!("[{:?}] {}", p.step, p.message);
        println!("{}", p.message);
    });

    match outcome {
        Ok(RunOutcome::Completed(summary)) => print_summary(&summary),
        Ok(RunOutcome::EmptyCaption) => println!("文字不能为空！"),
        Err(e) => {
            log::error!("上传流程失败 (HTTP 状态码: {:?}): {e}", e.status());
            println!("错误: {e}");
            if let Some(path) = logging::path() {
                println!("详细日志: {}", path.display());
            }
        }
    }

    Ok(())
}

/// 打印提示并读取一行输入（去掉首尾空白）
fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("刷新标准输出失败")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("读取输入失败")?;
    Ok(line.trim().to_string())
}

fn print_summary(summary: &RunSummary) {
    let rule = "=".repeat(50);
    println!();
    println!("{rule}");
    println!("文件已上传！");
    println!("{rule}");
    println!("远程文件夹: {}", summary.folder);
    println!("文件: {}", summary.filename);
    println!("大小: {} 字节", summary.size);
    println!("记录文件: {}", summary.log_path.display());
    println!("记录总数: {}", summary.total_records);
    println!("{rule}");
}
