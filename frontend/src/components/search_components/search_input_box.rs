use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::routes::Route;


/// Text box that navigates to the results page on Enter or on the search button.
#[component]
pub fn SearchInputBox(initial_term: ReadSignal<String>, compact: ReadSignal<bool>) -> Element {
    let mut modified_term = use_signal(|| initial_term.read().clone());
    // when url changes (the read signal given to us), we need to update the signal, as it is not reset by navigation.
    use_effect(move || {
        let new_term = initial_term.read().clone();
        modified_term.set(new_term);
    });
    let term_has_changed = use_memo(move || modified_term.read().trim() != initial_term.read().trim());
    let search_button_color = use_memo(move || if term_has_changed() { "#F97316" } else { "#6B7280" });
    let width = if compact() { "420px" } else { "100%" };
    let height = if compact() { "36px" } else { "42px" };

    let trigger_search = move |_: ()| {
        let term = modified_term.read().trim().to_string();
        if term.is_empty() {
            return;
        }
        navigator().push(Route::search_page_from_term(term));
    };

    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 6px 14px;
                height: {height};
                width: {width};
                box-sizing: border-box;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
            ",
            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    trigger_search(())
                },
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Search trademarks by name, owner or number",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 16px;
                    font-weight: 400;
                ",
                value: "{modified_term}",
                oninput: move |e: Event<FormData>| {
                    modified_term.set(e.value());
                },
                onkeydown: move |e: Event<KeyboardData>| {
                    if e.key() == Key::Enter {
                        trigger_search(());
                    }
                },
            }
        }
    }
}
