//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdHome;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::search_components::search_input_box::SearchInputBox;
use crate::routes::Route;


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();
    let current_term = match &route {
        Route::SearchPage { term } => term.0.clone(),
        _ => String::new(),
    };
    let on_search_page = matches!(route, Route::SearchPage { .. });

    rsx! {
        div {
            id:"x-nav-container",
            style:"
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",

            div {
                id:"x-nav-topbar",
                style:"
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    height: 64px;
                    width: 100%;
                    background-color: #1C212D;
                    padding: 0px 16px;
                    box-sizing: border-box;
                    flex-shrink: 0;
                ",

                NavbarBrand {},
                IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }

                if on_search_page {
                    SearchInputBox { initial_term: current_term, compact: true }
                }
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-height: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarBrand() -> Element {
    rsx! {
        Link {
            to: Route::HomePage { },
            span {
                style: "color: white; font-size: 22px; font-weight: 600; letter-spacing: -0.01em;",
                "Trademark"
                span { style: "color:#F97316;", "Search" }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "color:white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
