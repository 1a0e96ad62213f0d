use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

// Taken from the build so the server render and hydration agree.
fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Footer(name: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-content">
                <p>"Designed & Built by " <span class="footer-name">{name}</span></p>
                <p class="copyright">{format!("© {} All Rights Reserved", copyright_year())}</p>
            </div>
        </footer>
    }
}
