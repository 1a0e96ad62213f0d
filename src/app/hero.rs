use leptos::prelude::*;

use super::dom::scroll_to;
use crate::{
    content::PersonalInfo,
    motion::{hero_style, hint_style},
    scroll::Section,
};

#[component]
pub fn Hero(personal: PersonalInfo, tagline: String, #[prop(into)] offset: Signal<f64>) -> impl IntoView {
    let name_words = personal
        .name
        .split_whitespace()
        .map(|word| view! { <span class="name-word">{word.to_string()} " "</span> })
        .collect_view();
    let cta = |section: Section, class: &'static str, text: &'static str| {
        view! {
            <a
                href=section.href()
                class=class
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to(section);
                }
            >
                {text}
            </a>
        }
    };

    view! {
        <section id=Section::Hero.id() class="hero">
            <div class="hero-bg" aria-hidden="true">
                <div class="gradient-orb orb-1"></div>
                <div class="gradient-orb orb-2"></div>
                <div class="gradient-orb orb-3"></div>
                <div class="grid-pattern"></div>
            </div>
            <div class="hero-content" style=move || hero_style(offset.get())>
                <span class="hero-label enter enter-1">
                    <span class="label-line"></span>
                    "Hi, my name is"
                </span>
                <h1 class="hero-name enter enter-2">{name_words}</h1>
                <h2 class="hero-title enter enter-3">
                    <span class="title-accent">{personal.title.clone()}</span>
                </h2>
                <p class="hero-description enter enter-4">{tagline}</p>
                <div class="hero-cta enter enter-5">
                    {cta(Section::Projects, "cta-primary", "View My Work")}
                    {cta(Section::Contact, "cta-secondary", "Get In Touch")}
                </div>
                <div class="hero-contact-bar enter enter-6">
                    <a href=personal.mailto()>
                        <i class="extra-email"></i>
                        {personal.email.clone()}
                    </a>
                    <a href=personal.tel()>
                        <i class="extra-phone"></i>
                        {personal.phone.clone()}
                    </a>
                    <a href=personal.linkedin.clone() target="_blank" rel="noopener noreferrer">
                        <i class="devicon-linkedin-plain"></i>
                        "LinkedIn"
                    </a>
                </div>
            </div>
            <div class="scroll-hint enter enter-7" style=move || hint_style(offset.get())>
                <span>"Scroll to explore"</span>
            </div>
        </section>
    }
}
