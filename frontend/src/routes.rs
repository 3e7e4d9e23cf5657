use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::home_page::HomePage;
use crate::pages::tasks_page::TasksPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/tasks")]
    TasksPage {},

}
