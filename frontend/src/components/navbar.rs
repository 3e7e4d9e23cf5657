//! Side navigation bar shared by every page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdViewList};
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            div {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 24px;
                    width: 38px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                    align-items: center;
                ",
                IconLink { to: Route::HomePage { }, icon: MdHome, label: "Query builder" }
                IconLink { to: Route::TasksPage { }, icon: MdViewList, label: "Tasks" }
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
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
