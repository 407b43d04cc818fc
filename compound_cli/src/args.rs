use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// 命令行参数。
#[derive(Debug, Parser)]
#[command(name = "compound_cli", version)]
#[command(about = "Find the longest word that is a concatenation of other words in the list", long_about = None)]
pub struct Args {
    /// 词表文件（每行一个词）；缺省为当前目录的 words.txt，再缺省为内置示例
    pub words: Option<PathBuf>,

    /// TOML 配置文件
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 单次搜索最多创建的状态数
    #[arg(long)]
    pub max_states: Option<usize>,

    /// 关闭状态去重
    #[arg(long)]
    pub no_dedup: bool,

    /// 同时输出切分段
    #[arg(long)]
    pub segments: bool,

    /// 输出搜索状态计数
    #[arg(long)]
    pub stats: bool,

    /// 日志更详细（-v debug，-vv trace）
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
