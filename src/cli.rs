use beer_catalog_common::BeerId;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "beer-catalog")]
#[command(about = "ビールカタログ閲覧・レビュー編集ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// ストアURL（環境変数 BEER_CATALOG_URL・設定ファイルより優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 一覧と選択中アイテムの詳細を表示
    List,

    /// アイテムの詳細を表示
    Show {
        /// アイテムID
        id: BeerId,
    },

    /// 説明文を置換
    Describe {
        /// アイテムID
        id: BeerId,

        /// 新しい説明文
        text: String,
    },

    /// レビューの追加・削除
    Review {
        #[command(subcommand)]
        action: ReviewCommand,
    },

    /// 対話的に閲覧・編集
    Browse,

    /// 設定を表示/編集
    Config {
        /// ストアURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum ReviewCommand {
    /// レビューを末尾に追加
    Add {
        /// アイテムID
        id: BeerId,

        /// レビュー本文
        text: String,
    },

    /// 位置を指定してレビューを削除
    Rm {
        /// アイテムID
        id: BeerId,

        /// レビューの位置（0始まり、表示時の番号）
        index: usize,
    },
}
