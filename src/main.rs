use beer_catalog::{browse, cli, config, error, logging, progress, render, store};
use beer_catalog_common::{BeerId, CatalogController, ViewState};
use clap::Parser;
use cli::{Cli, Commands, ReviewCommand};
use config::Config;
use error::Result;
use progress::with_spinner;
use store::HttpStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Config { set_base_url, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ ストアURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  ストアURL: {}", config.resolve_base_url(cli.base_url.as_deref()));
                println!("  初期表示ID: {}", config.initial_beer_id);
                match config.timeout_seconds {
                    Some(secs) => println!("  タイムアウト: {}秒", secs),
                    None => println!("  タイムアウト: なし"),
                }
            }
        }

        command => {
            let base_url = config.resolve_base_url(cli.base_url.as_deref());
            let store = HttpStore::new(base_url, config.timeout())?;
            tracing::debug!(base_url = store.base_url(), "store configured");
            let controller = CatalogController::new(store);

            run(&controller, command, config.initial_beer_id).await?;
        }
    }

    Ok(())
}

async fn run(
    controller: &CatalogController<HttpStore>,
    command: Commands,
    initial_beer_id: BeerId,
) -> Result<()> {
    match command {
        Commands::List => {
            let state = ViewState::new(initial_beer_id);
            let state = with_spinner("一覧を取得中...", controller.load_list(state)).await;
            print!("{}", render::render_state(&state));
        }

        Commands::Show { id } => {
            let state = open(controller, id).await;
            print_detail(&state, id);
        }

        Commands::Describe { id, text } => {
            let state = open(controller, id).await;
            let state = with_spinner("更新中...", controller.submit_description(state, text)).await;
            print_detail(&state, id);
        }

        Commands::Review { action } => match action {
            ReviewCommand::Add { id, text } => {
                let state = open(controller, id).await;
                let state = with_spinner("更新中...", controller.submit_review(state, text)).await;
                print_detail(&state, id);
            }
            ReviewCommand::Rm { id, index } => {
                let state = open(controller, id).await;
                let state = with_spinner("更新中...", controller.delete_review(state, index)).await;
                print_detail(&state, id);
            }
        },

        Commands::Browse => {
            println!("🍺 beer-catalog - ブラウズ\n");
            browse::run_browse(controller, ViewState::new(initial_beer_id)).await?;
            println!("\n✅ 終了");
        }

        // mainで処理済み
        Commands::Config { .. } => {}
    }

    Ok(())
}

/// 指定IDを選択した状態を作る
async fn open(controller: &CatalogController<HttpStore>, id: BeerId) -> ViewState {
    with_spinner("詳細を取得中...", controller.select(ViewState::new(id), id)).await
}

fn print_detail(state: &ViewState, id: BeerId) {
    match state.detail() {
        Some(detail) => print!("{}", render::render_detail(detail)),
        None => println!("⚠ ID {} の詳細を取得できませんでした", id),
    }
}
