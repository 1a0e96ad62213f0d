mod contact;
mod dom;
mod footer;
mod hero;
mod navbar;
mod sections;

pub use contact::ContactSink;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{self, Portfolio};
use contact::ContactSection;
use dom::{use_scroll_tracking, ScrollTracking};
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use sections::{AboutSection, EducationSection, ExperienceSection, ProjectsSection, SkillsSection};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // swap in a real delivery mechanism here
    provide_context(ContactSink::default());

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    match content::portfolio() {
        Ok(portfolio) => Either::Left(view! { <PortfolioView portfolio /> }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(
                view! {
                    <Title text="Unavailable" />
                    <main class="content-error">
                        <h1>"Content unavailable"</h1>
                        <pre>{e.to_string()}</pre>
                    </main>
                },
            )
        }
    }
}

#[component]
fn PortfolioView(portfolio: Portfolio) -> impl IntoView {
    let ScrollTracking { offset, state } = use_scroll_tracking();
    let Portfolio {
        personal,
        tagline,
        about,
        experience,
        projects,
        skills,
        education,
        contact_intro,
    } = portfolio;
    let page_title = format!("{} - {}", personal.name, personal.title);
    let description = tagline.clone();
    let initials = personal.initials();
    let name = personal.name.clone();

    view! {
        <Title text=page_title />
        <Meta name="description" content=description />
        <div class="app">
            <Navbar initials state />
            <main>
                <Hero personal=personal.clone() tagline offset />
                <AboutSection about />
                <ExperienceSection experience />
                <ProjectsSection projects />
                <SkillsSection skills />
                <EducationSection education />
                <ContactSection personal intro=contact_intro />
            </main>
            <Footer name />
        </div>
    }
}
