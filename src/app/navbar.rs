use leptos::prelude::*;

use super::dom::scroll_to;
use crate::{
    motion::SECTION_CHILDREN,
    scroll::{ScrollState, Section},
};

#[component]
pub fn Navbar(initials: (String, String), #[prop(into)] state: Signal<ScrollState>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (first, second) = initials;

    let nav_items = Section::NAV
        .into_iter()
        .map(|section| {
            let number = section.nav_number().unwrap_or_default();
            view! {
                <li class="nav-item" style=SECTION_CHILDREN.style(0, number)>
                    <a
                        href=section.href()
                        class=move || {
                            if state.get().active_section == section { "active" } else { "" }
                        }
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to(section);
                            set_menu_open(false);
                        }
                    >
                        <span class="nav-number">{format!("{number:02}.")}</span>
                        " "
                        {section.label()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class=move || if state.get().scrolled { "navbar scrolled" } else { "navbar" }>
            <div class="nav-container">
                <a
                    href=Section::Hero.href()
                    class="logo"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to(Section::Hero);
                        set_menu_open(false);
                    }
                >
                    <span class="logo-text">{first}</span>
                    <span class="logo-accent">{second}</span>
                </a>
                <ul class=move || if menu_open() { "nav-links active" } else { "nav-links" }>
                    {nav_items}
                </ul>
                <button
                    type="button"
                    aria-label="Toggle navigation"
                    class=move || if menu_open() { "hamburger active" } else { "hamburger" }
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}
