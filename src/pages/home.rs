//! The single-page portfolio: every section in scroll order.

use dioxus::prelude::*;

use crate::components::{About, Contact, Hero, Navbar, Projects, Resume, Skills};

#[component]
pub fn Home() -> Element {
    rsx! {
        Navbar {}
        main {
            Hero {}
            About {}
            Projects {}
            Skills {}
            Contact {}
            Resume {}
        }
    }
}
