use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/search/:term")]
    SearchPage {
        term: UrlParam<String>,
    },

}

impl Route {
    pub fn search_page_from_term(term: impl Into<String>) -> Self {
        Self::SearchPage {
            term: UrlParam::from(term.into()),
        }
    }
}
