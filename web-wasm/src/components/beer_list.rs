//! 一覧コンポーネント

use beer_catalog_common::{BeerId, ListEntry};
use leptos::prelude::*;

#[component]
pub fn BeerList<F>(
    #[prop(into)] entries: Signal<Vec<ListEntry>>,
    #[prop(into)] selection: Signal<BeerId>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(BeerId) + 'static + Clone + Send + Sync,
{
    view! {
        <ul id="beer-list">
            <For
                each=move || entries.get()
                key=|entry| entry.clone()
                children=move |entry| {
                    let on_select = on_select.clone();
                    let id = entry.id;
                    view! {
                        <li
                            class:selected=move || selection.get() == id
                            on:click=move |_| on_select(id)
                        >
                            {entry.name}
                        </li>
                    }
                }
            />
        </ul>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use crate::testing::{container, find, find_all, Recorder};
    use beer_catalog_common::UserAction;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn entries() -> Vec<ListEntry> {
        vec![
            ListEntry { id: 1, name: "Birra Moretti".to_string() },
            ListEntry { id: 2, name: "Hofbräu".to_string() },
            ListEntry { id: 5, name: "Hofbräu".to_string() },
        ]
    }

    #[wasm_bindgen_test]
    fn one_item_per_entry() {
        let root = container();
        let _handle = leptos::mount::mount_to(root.clone(), move || {
            view! {
                <BeerList
                    entries=Signal::derive(entries)
                    selection=Signal::derive(|| 2)
                    on_select=|_: BeerId| {}
                />
            }
        });

        let items = find_all(&root, "#beer-list li");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].text_content().as_deref(), Some("Birra Moretti"));

        let selected = find_all(&root, "#beer-list li.selected");
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].text_content().as_deref(), Some("Hofbräu"));
        assert!(items[1].get_attribute("class").unwrap_or_default().contains("selected"));
    }

    #[wasm_bindgen_test]
    fn click_selects_entry_id() {
        let root = container();
        let actions = Recorder::new();
        let on_select = {
            let actions = actions.clone();
            move |id: BeerId| actions.push(UserAction::Select(id))
        };
        let _handle = leptos::mount::mount_to(root.clone(), move || {
            view! {
                <BeerList
                    entries=Signal::derive(entries)
                    selection=Signal::derive(|| 1)
                    on_select=on_select
                />
            }
        });

        find(&root, "#beer-list li:nth-child(3)").click();

        assert_eq!(actions.values(), vec![UserAction::Select(5)]);
    }
}
