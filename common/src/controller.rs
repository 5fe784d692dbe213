//! カタログUIコントローラ
//!
//! 一覧取得 → 一覧描画 → 選択中アイテムの詳細取得 → 詳細描画 → 編集 → PATCH → 一覧再取得
//! のサイクルを回す。失敗はすべてその場でログに出して握りつぶし、
//! 受け取った`ViewState`をそのまま返す（リトライなし）。

use crate::edit::{append_review, remove_review};
use crate::error::Error;
use crate::store::CatalogStore;
use crate::types::{BeerId, BeerPatch};
use crate::view::ViewState;

/// ユーザー操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// 一覧の項目をクリック
    Select(BeerId),
    /// 説明文フォームを送信
    EditDescription(String),
    /// レビューフォームを送信
    AddReview(String),
    /// 描画済みレビューをクリック（描画時の位置）
    DeleteReview(usize),
}

#[derive(Clone)]
pub struct CatalogController<S> {
    store: S,
}

impl<S: CatalogStore> CatalogController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 一覧を取得して描画し、続けて選択中アイテムの詳細を読み込む
    pub async fn load_list(&self, state: ViewState) -> ViewState {
        tracing::debug!("fetching beer list");
        match self.store.list_beers().await {
            Ok(beers) => {
                tracing::debug!(count = beers.len(), "beer list fetched");
                let state = state.with_list(&beers);
                let selection = state.selection();
                self.load_detail(state, selection).await
            }
            Err(e) => {
                log_failure(&e);
                state
            }
        }
    }

    /// 1件取得して詳細ペインを描画
    pub async fn load_detail(&self, state: ViewState, id: BeerId) -> ViewState {
        tracing::debug!(beer_id = id, "fetching beer details");
        match self.store.get_beer(id).await {
            Ok(beer) => state.with_detail(beer),
            Err(e) => {
                log_failure(&e);
                state
            }
        }
    }

    /// 部分更新を送信し、成功したら一覧から再描画
    pub async fn submit_update(&self, state: ViewState, id: BeerId, patch: BeerPatch) -> ViewState {
        tracing::debug!(beer_id = id, ?patch, "updating beer");
        match self.store.update_beer(id, &patch).await {
            Ok(()) => self.load_list(state.with_selection(id)).await,
            Err(e) => {
                log_failure(&e);
                state
            }
        }
    }

    /// 一覧クリック: 選択を変えて詳細を読み込む
    pub async fn select(&self, state: ViewState, id: BeerId) -> ViewState {
        self.load_detail(state.with_selection(id), id).await
    }

    /// 説明文を置換
    pub async fn submit_description(&self, state: ViewState, text: String) -> ViewState {
        let Some(id) = state.detail().map(|d| d.id()) else {
            tracing::warn!("description submitted with no beer rendered");
            return state;
        };
        self.submit_update(state, id, BeerPatch::description(text)).await
    }

    /// 描画中のレビュー列の末尾に追加
    pub async fn submit_review(&self, state: ViewState, text: String) -> ViewState {
        let Some((id, reviews)) = state
            .detail()
            .map(|d| (d.id(), append_review(&d.beer().reviews, text)))
        else {
            tracing::warn!("review submitted with no beer rendered");
            return state;
        };
        self.submit_update(state, id, BeerPatch::reviews(reviews)).await
    }

    /// 描画中のレビュー列から`index`番目を削除
    pub async fn delete_review(&self, state: ViewState, index: usize) -> ViewState {
        let Some((id, reviews)) = state
            .detail()
            .map(|d| (d.id(), remove_review(&d.beer().reviews, index)))
        else {
            tracing::warn!(index, "review deleted with no beer rendered");
            return state;
        };
        self.submit_update(state, id, BeerPatch::reviews(reviews)).await
    }

    pub async fn dispatch(&self, state: ViewState, action: UserAction) -> ViewState {
        match action {
            UserAction::Select(id) => self.select(state, id).await,
            UserAction::EditDescription(text) => self.submit_description(state, text).await,
            UserAction::AddReview(text) => self.submit_review(state, text).await,
            UserAction::DeleteReview(index) => self.delete_review(state, index).await,
        }
    }
}

fn log_failure(error: &Error) {
    let operation = error.operation();
    tracing::error!(
        beer_id = ?operation.beer_id(),
        cause = %error.cause(),
        "Error: {}",
        operation
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Cause, Operation, Result};
    use crate::types::Beer;
    use std::cell::{Cell, RefCell};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        List,
        Get(BeerId),
        Update(BeerId, BeerPatch),
    }

    /// 呼び出しを記録するインメモリストア
    #[derive(Default)]
    struct MemoryStore {
        beers: RefCell<Vec<Beer>>,
        calls: RefCell<Vec<Call>>,
        fail_list: Cell<bool>,
        fail_update: Cell<bool>,
    }

    impl MemoryStore {
        fn with_beers(beers: Vec<Beer>) -> Self {
            Self {
                beers: RefCell::new(beers),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn clear_calls(&self) {
            self.calls.borrow_mut().clear();
        }
    }

    impl CatalogStore for MemoryStore {
        async fn list_beers(&self) -> Result<Vec<Beer>> {
            self.calls.borrow_mut().push(Call::List);
            if self.fail_list.get() {
                return Err(Error::request_failed(Operation::ListBeers, Cause::Status(500)));
            }
            Ok(self.beers.borrow().clone())
        }

        async fn get_beer(&self, id: BeerId) -> Result<Beer> {
            self.calls.borrow_mut().push(Call::Get(id));
            self.beers
                .borrow()
                .iter()
                .find(|b| b.id == id)
                .cloned()
                .ok_or_else(|| Error::request_failed(Operation::GetBeer(id), Cause::Status(404)))
        }

        async fn update_beer(&self, id: BeerId, patch: &BeerPatch) -> Result<()> {
            self.calls.borrow_mut().push(Call::Update(id, patch.clone()));
            if self.fail_update.get() {
                return Err(Error::request_failed(Operation::UpdateBeer(id), Cause::Status(500)));
            }
            let mut beers = self.beers.borrow_mut();
            let beer = beers
                .iter_mut()
                .find(|b| b.id == id)
                .ok_or_else(|| Error::request_failed(Operation::UpdateBeer(id), Cause::Status(404)))?;
            if let Some(description) = &patch.description {
                beer.description = description.clone();
            }
            if let Some(reviews) = &patch.reviews {
                beer.reviews = reviews.clone();
            }
            Ok(())
        }
    }

    fn beer(id: BeerId, name: &str, reviews: &[&str]) -> Beer {
        Beer {
            id,
            name: name.to_string(),
            image_url: format!("https://example.com/{}.png", id),
            description: format!("{} description", name),
            reviews: reviews.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn catalog() -> CatalogController<MemoryStore> {
        CatalogController::new(MemoryStore::with_beers(vec![
            beer(1, "Birra Moretti", &["A", "B"]),
            beer(2, "Hofbräu", &["A", "B", "C"]),
        ]))
    }

    /// 初回ロード後の状態
    async fn loaded(controller: &CatalogController<MemoryStore>) -> ViewState {
        let state = controller.load_list(ViewState::default()).await;
        controller.store().clear_calls();
        state
    }

    // =============================================
    // 一覧・詳細
    // =============================================

    #[tokio::test]
    async fn test_initial_load_renders_list_and_current_detail() {
        let controller = catalog();
        let state = controller.load_list(ViewState::default()).await;

        assert_eq!(state.list().len(), 2);
        assert_eq!(state.detail().map(|d| d.id()), Some(1));
        assert_eq!(controller.store().calls(), vec![Call::List, Call::Get(1)]);
    }

    #[tokio::test]
    async fn test_list_entries_match_returned_items() {
        let controller = CatalogController::new(MemoryStore::with_beers(
            (1..=5).map(|i| beer(i, &format!("Beer {}", i), &[])).collect(),
        ));
        let state = controller.load_list(ViewState::default()).await;
        assert_eq!(state.list().len(), 5);
        assert_eq!(state.list()[4].name, "Beer 5");
    }

    #[tokio::test]
    async fn test_failed_list_keeps_previous_state() {
        let controller = catalog();
        let before = loaded(&controller).await;

        controller.store().fail_list.set(true);
        let after = controller.load_list(before.clone()).await;

        assert_eq!(after, before);
        // 一覧失敗時は詳細も取りに行かない
        assert_eq!(controller.store().calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn test_select_issues_one_detail_request() {
        let controller = catalog();
        let state = loaded(&controller).await;

        let state = controller.dispatch(state, UserAction::Select(2)).await;

        assert_eq!(state.selection(), 2);
        assert_eq!(state.detail().map(|d| d.id()), Some(2));
        assert_eq!(controller.store().calls(), vec![Call::Get(2)]);
    }

    #[tokio::test]
    async fn test_failed_detail_keeps_previous_pane() {
        let controller = catalog();
        let state = loaded(&controller).await;

        let state = controller.select(state, 99).await;

        // 選択は変わるが詳細ペインは前のまま
        assert_eq!(state.selection(), 99);
        assert_eq!(state.detail().map(|d| d.id()), Some(1));
    }

    #[tokio::test]
    async fn test_missing_initial_selection_renders_list_only() {
        let controller = catalog();
        let state = controller.load_list(ViewState::new(42)).await;
        assert_eq!(state.list().len(), 2);
        assert!(state.detail().is_none());
    }

    // =============================================
    // 編集
    // =============================================

    #[tokio::test]
    async fn test_add_review_appends_to_rendered_sequence() {
        let controller = catalog();
        let state = loaded(&controller).await;

        let state = controller
            .dispatch(state, UserAction::AddReview("Great!".to_string()))
            .await;

        let calls = controller.store().calls();
        assert_eq!(
            calls[0],
            Call::Update(
                1,
                BeerPatch::reviews(vec!["A".into(), "B".into(), "Great!".into()])
            )
        );
        // 成功後は一覧から再描画
        assert_eq!(&calls[1..], &[Call::List, Call::Get(1)]);
        let rendered: Vec<_> = state.detail().expect("詳細がない").reviews().map(|r| r.text.to_string()).collect();
        assert_eq!(rendered, vec!["A", "B", "Great!"]);
    }

    #[tokio::test]
    async fn test_delete_review_by_position() {
        let controller = catalog();
        let state = loaded(&controller).await;
        let state = controller.select(state, 2).await;
        controller.store().clear_calls();

        let state = controller.dispatch(state, UserAction::DeleteReview(1)).await;

        assert_eq!(
            controller.store().calls()[0],
            Call::Update(2, BeerPatch::reviews(vec!["A".into(), "C".into()]))
        );
        assert_eq!(state.selection(), 2);
        assert_eq!(state.detail().map(|d| d.beer().reviews.len()), Some(2));
    }

    #[tokio::test]
    async fn test_edit_description_sends_description_only() {
        let controller = catalog();
        let state = loaded(&controller).await;

        let state = controller
            .dispatch(state, UserAction::EditDescription("New text".to_string()))
            .await;

        assert_eq!(
            controller.store().calls()[0],
            Call::Update(1, BeerPatch::description("New text"))
        );
        assert_eq!(state.detail().map(|d| d.beer().description.as_str()), Some("New text"));
    }

    #[tokio::test]
    async fn test_failed_update_keeps_state_and_skips_refresh() {
        let controller = catalog();
        let before = loaded(&controller).await;

        controller.store().fail_update.set(true);
        let after = controller
            .submit_description(before.clone(), "ignored".to_string())
            .await;

        assert_eq!(after, before);
        assert_eq!(controller.store().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_edit_without_detail_is_ignored() {
        let controller = catalog();
        let state = ViewState::default();

        let state = controller.submit_review(state, "lost".to_string()).await;
        let state = controller.delete_review(state, 0).await;

        assert!(controller.store().calls().is_empty());
        assert_eq!(state, ViewState::default());
    }

    #[tokio::test]
    async fn test_edit_targets_rendered_beer() {
        let controller = catalog();
        let state = loaded(&controller).await;
        // 選択は変わったが詳細取得に失敗 → 描画中は1のまま
        let state = controller.select(state, 99).await;
        controller.store().clear_calls();

        let state = controller.submit_review(state, "x".to_string()).await;

        assert!(matches!(controller.store().calls()[0], Call::Update(1, _)));
        // 更新成功で選択は更新対象に戻る
        assert_eq!(state.selection(), 1);
    }

    #[tokio::test]
    async fn test_delete_out_of_range_submits_unchanged_sequence() {
        let controller = catalog();
        let state = loaded(&controller).await;

        controller.delete_review(state, 10).await;

        assert_eq!(
            controller.store().calls()[0],
            Call::Update(1, BeerPatch::reviews(vec!["A".into(), "B".into()]))
        );
    }

    // =============================================
    // ログ
    // =============================================

    /// fmtサブスクライバの出力先
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn error_lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8_lossy(&bytes)
                .lines()
                .filter(|line| line.contains("ERROR"))
                .map(str::to_string)
                .collect()
        }
    }

    fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        (buffer, tracing::subscriber::set_default(subscriber))
    }

    #[tokio::test]
    async fn test_failed_list_logs_error() {
        let controller = catalog();
        let before = loaded(&controller).await;
        let (logs, _guard) = capture_logs();

        controller.store().fail_list.set(true);
        controller.load_list(before).await;

        let lines = logs.error_lines();
        assert_eq!(lines.len(), 1, "{:?}", lines);
        assert!(lines[0].contains("Error fetching beers"), "{}", lines[0]);
        assert!(lines[0].contains("HTTP status 500"), "{}", lines[0]);
    }

    #[tokio::test]
    async fn test_failed_detail_logs_error_with_id() {
        let controller = catalog();
        let state = loaded(&controller).await;
        let (logs, _guard) = capture_logs();

        controller.select(state, 99).await;

        let lines = logs.error_lines();
        assert_eq!(lines.len(), 1, "{:?}", lines);
        assert!(lines[0].contains("Error fetching beer details for ID 99"), "{}", lines[0]);
        assert!(lines[0].contains("beer_id=Some(99)"), "{}", lines[0]);
    }

    #[tokio::test]
    async fn test_failed_update_logs_error_with_id() {
        let controller = catalog();
        let state = loaded(&controller).await;
        let (logs, _guard) = capture_logs();

        controller.store().fail_update.set(true);
        controller.submit_description(state, "ignored".to_string()).await;

        let lines = logs.error_lines();
        assert_eq!(lines.len(), 1, "{:?}", lines);
        assert!(lines[0].contains("Error updating beer with ID 1"), "{}", lines[0]);
    }

    #[tokio::test]
    async fn test_successful_cycle_logs_no_error() {
        let controller = catalog();
        let (logs, _guard) = capture_logs();

        let state = controller.load_list(ViewState::default()).await;
        controller.submit_review(state, "Great!".to_string()).await;

        assert!(logs.error_lines().is_empty());
    }
}
