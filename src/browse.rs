//! 対話式ブラウズモジュール
//!
//! 一覧から選ぶ → 詳細を表示 → 説明の編集・レビューの追加/削除、を繰り返す。
//! 状態は`ViewState`として各操作に渡し、戻り値で更新する。

use crate::error::{CatalogError, Result};
use crate::progress::with_spinner;
use crate::render::{render_detail, render_list};
use beer_catalog_common::{CatalogController, CatalogStore, UserAction, ViewState};
use dialoguer::{Input, Select};

/// 詳細画面の操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailChoice {
    EditDescription,
    AddReview,
    DeleteReview,
    Back,
    Quit,
}

impl DetailChoice {
    pub fn label(&self) -> &'static str {
        match self {
            DetailChoice::EditDescription => "説明を編集",
            DetailChoice::AddReview => "レビューを追加",
            DetailChoice::DeleteReview => "レビューを削除",
            DetailChoice::Back => "一覧に戻る",
            DetailChoice::Quit => "終了",
        }
    }
}

/// 詳細画面のメニュー（レビューがなければ削除は出さない）
pub fn detail_menu(has_reviews: bool) -> Vec<DetailChoice> {
    let mut menu = vec![DetailChoice::EditDescription, DetailChoice::AddReview];
    if has_reviews {
        menu.push(DetailChoice::DeleteReview);
    }
    menu.push(DetailChoice::Back);
    menu.push(DetailChoice::Quit);
    menu
}

/// 一覧の選択肢（末尾に「終了」）
pub fn list_items(state: &ViewState) -> Vec<String> {
    state
        .list()
        .iter()
        .map(|entry| format!("{}: {}", entry.id, entry.name))
        .chain(std::iter::once(DetailChoice::Quit.label().to_string()))
        .collect()
}

/// 一覧が空なら選択肢を出さずに表示する文言（取得失敗はログ側に出ている）
pub fn empty_catalog_notice(state: &ViewState) -> Option<String> {
    state.list().is_empty().then(|| render_list(state))
}

enum Flow {
    Back,
    Quit,
}

fn prompt_error(e: dialoguer::Error) -> CatalogError {
    CatalogError::Prompt(e.to_string())
}

/// 対話ループ
pub async fn run_browse<S: CatalogStore>(
    controller: &CatalogController<S>,
    state: ViewState,
) -> Result<ViewState> {
    let mut state = with_spinner("一覧を取得中...", controller.load_list(state)).await;

    loop {
        if let Some(notice) = empty_catalog_notice(&state) {
            print!("{}", notice);
            return Ok(state);
        }

        println!("\n{}", render_list(&state));

        let items = list_items(&state);
        let default = state
            .list()
            .iter()
            .position(|entry| entry.id == state.selection())
            .unwrap_or(0);

        let picked = Select::new()
            .with_prompt("ビールを選択")
            .items(&items)
            .default(default)
            .interact_opt()
            .map_err(prompt_error)?;

        let Some(id) = picked.and_then(|pos| state.list().get(pos)).map(|entry| entry.id) else {
            return Ok(state);
        };

        state = with_spinner("詳細を取得中...", controller.select(state, id)).await;

        match detail_loop(controller, state).await? {
            (next, Flow::Back) => state = next,
            (next, Flow::Quit) => return Ok(next),
        }
    }
}

async fn detail_loop<S: CatalogStore>(
    controller: &CatalogController<S>,
    mut state: ViewState,
) -> Result<(ViewState, Flow)> {
    loop {
        let Some(detail) = state.detail().filter(|d| d.id() == state.selection()) else {
            println!("⚠ ID {} の詳細を取得できませんでした", state.selection());
            return Ok((state, Flow::Back));
        };

        println!("\n{}", render_detail(detail));

        let menu = detail_menu(!detail.beer().reviews.is_empty());
        let labels: Vec<&str> = menu.iter().map(|c| c.label()).collect();
        let choice = Select::new()
            .with_prompt("操作")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;

        let action = match choice.map(|i| menu[i]) {
            None | Some(DetailChoice::Back) => return Ok((state, Flow::Back)),
            Some(DetailChoice::Quit) => return Ok((state, Flow::Quit)),
            Some(DetailChoice::EditDescription) => {
                let text: String = Input::new()
                    .with_prompt("新しい説明")
                    .with_initial_text(detail.beer().description.clone())
                    .allow_empty(true)
                    .interact_text()
                    .map_err(prompt_error)?;
                UserAction::EditDescription(text)
            }
            Some(DetailChoice::AddReview) => {
                let text: String = Input::new()
                    .with_prompt("レビュー")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(prompt_error)?;
                UserAction::AddReview(text)
            }
            Some(DetailChoice::DeleteReview) => {
                let reviews: Vec<&str> = detail.reviews().map(|r| r.text).collect();
                let picked = Select::new()
                    .with_prompt("削除するレビュー")
                    .items(&reviews)
                    .default(0)
                    .interact_opt()
                    .map_err(prompt_error)?;
                match picked {
                    Some(index) => UserAction::DeleteReview(index),
                    None => continue,
                }
            }
        };

        state = with_spinner("更新中...", controller.dispatch(state, action)).await;
    }
}
