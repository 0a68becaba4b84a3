use yew::prelude::*;
use web_sys::MouseEvent;
use log::info;

use crate::components::lead_form::LeadCaptureForm;
use crate::components::navbar::Navbar;
use crate::components::reveal::RevealSection;
use crate::config;
use crate::content;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let sections = content::sections();
    debug_assert!(
        content::ids_are_unique(sections),
        "section ids must be unique; anchor navigation depends on it"
    );
    info!("Rendering landing page with {} sections", sections.len());

    let get_started = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .location()
                .set_href(&format!("#{}", content::LEAD_CAPTURE_ID));
        }
    });

    let open_github = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(config::github_url(), "_blank");
        }
    });

    html! {
        <div class="landing-container">
            <style>{PAGE_CSS}</style>
            <Navbar />

            <header class="hero">
                <div class="hero-content">
                    <h1>{"Your Finances, "}<span class="highlight">{"Mastered."}</span></h1>
                    <p>
                        {"The all-in-one platform for tracking net worth, equity, and future \
                          projections with AI-powered insights."}
                    </p>
                    <div class="hero-buttons">
                        <button class="btn-primary" onclick={get_started}>
                            {"Get Started for Free"}
                        </button>
                        <button class="btn-ghost" onclick={open_github}>
                            <i class="fa-brands fa-github"></i>
                            {" View on GitHub"}
                        </button>
                    </div>
                </div>
                <div class="hero-visual">
                    <div class="hero-image-container">
                        <img src="/assets/hero.png" alt="Financial Data Visualization" />
                    </div>
                </div>
            </header>

            {
                for sections.iter().map(|descriptor| html! {
                    <RevealSection key={descriptor.id} descriptor={descriptor.clone()} />
                })
            }

            <LeadCaptureForm />

            <footer class="footer">
                <p>{"© 2026 Lune Capital. All rights reserved."}</p>
                <div class="footer-links">
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms of Service"}</a>
                    <a href="#">{"Documentation"}</a>
                </div>
            </footer>
        </div>
    }
}

const PAGE_CSS: &str = r#"
:root {
    --primary: #7EB2FF;
    --bg: #0a0f1e;
    --glass: rgba(255, 255, 255, 0.04);
    --glass-border: rgba(255, 255, 255, 0.12);
    --text: #f2f5fb;
    --text-dim: #8b94a9;
}
body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: 'Inter', system-ui, sans-serif;
}
.landing-container {
    overflow-x: hidden;
}
.navbar {
    position: sticky;
    top: 0;
    z-index: 10;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 3rem;
    background: rgba(10, 15, 30, 0.85);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--glass-border);
}
.navbar .logo {
    font-weight: 700;
    letter-spacing: 0.2em;
}
.nav-links {
    display: flex;
    align-items: center;
    gap: 2rem;
}
.nav-links a {
    color: var(--text-dim);
    text-decoration: none;
    font-size: 0.95rem;
}
.nav-links a:hover {
    color: var(--text);
}
.btn-primary {
    background: var(--primary);
    color: #0a0f1e;
    border: none;
    border-radius: 9999px;
    padding: 0.6rem 1.5rem;
    font-weight: 600;
    cursor: pointer;
}
.btn-ghost {
    background: transparent;
    color: var(--text);
    border: 1px solid var(--glass-border);
    border-radius: 9999px;
    padding: 0.8rem 2rem;
    cursor: pointer;
}
.hero {
    display: grid;
    grid-template-columns: 1.1fr 1fr;
    align-items: center;
    gap: 3rem;
    padding: 6rem 3rem;
    max-width: 1200px;
    margin: 0 auto;
}
.hero h1 {
    font-size: 3.2rem;
    margin: 0 0 1rem;
}
.hero-buttons {
    display: flex;
    gap: 1rem;
}
.hero-buttons .btn-primary {
    padding: 0.8rem 2rem;
    font-size: 1rem;
}
.highlight {
    background: linear-gradient(45deg, var(--primary), #b890ff);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.hero-image-container img,
.reveal-image-container img {
    width: 100%;
    border-radius: 1rem;
    border: 1px solid var(--glass-border);
}
.reveal-section {
    opacity: 0;
    transform: translateY(40px);
    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    padding: 5rem 3rem;
}
.reveal-section.revealed {
    opacity: 1;
    transform: none;
}
.reveal-columns {
    display: grid;
    grid-template-columns: 1fr 1fr;
    align-items: center;
    gap: 4rem;
    max-width: 1200px;
    margin: 0 auto;
}
.section-tag {
    color: var(--primary);
    text-transform: uppercase;
    letter-spacing: 0.15em;
    font-size: 0.8rem;
    font-weight: 600;
}
.reveal-text h2 {
    font-size: 2.4rem;
    margin: 0.5rem 0 1rem;
}
.reveal-text > p {
    color: var(--text-dim);
    line-height: 1.7;
}
.features-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
    margin-top: 2rem;
}
.feature-card {
    background: var(--glass);
    border: 1px solid var(--glass-border);
    border-radius: 1rem;
    padding: 1.5rem;
}
.feature-card.tax-highlight {
    border-color: var(--primary);
}
.feature-card h3 {
    margin: 0.8rem 0 0.5rem;
    font-size: 1.05rem;
}
.feature-card p {
    color: var(--text-dim);
    font-size: 0.9rem;
    margin: 0;
}
.feature-icon i,
.privacy-point-icon i {
    color: var(--primary);
    font-size: 1.4rem;
}
.privacy-points {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
    margin-top: 2rem;
}
.privacy-point h4 {
    margin: 0.5rem 0;
}
.privacy-point p {
    font-size: 0.9rem;
    color: var(--text-dim);
    margin: 0;
}
.request-access {
    text-align: center;
    padding: 6rem 3rem;
}
.request-access > p {
    color: var(--text-dim);
}
.access-form {
    max-width: 480px;
    margin: 2.5rem auto 0;
    display: flex;
    flex-direction: column;
    gap: 1.2rem;
    text-align: left;
}
.form-group {
    display: flex;
    flex-direction: column;
    gap: 0.4rem;
}
.form-group label {
    font-size: 0.85rem;
    color: var(--text-dim);
}
.form-group input,
.form-group textarea {
    background: var(--glass);
    border: 1px solid var(--glass-border);
    border-radius: 0.6rem;
    padding: 0.8rem 1rem;
    color: var(--text);
    font: inherit;
    resize: vertical;
}
.access-form .btn-primary {
    padding: 1rem;
}
.footer {
    text-align: center;
    padding: 3rem;
    border-top: 1px solid var(--glass-border);
    color: var(--text-dim);
}
.footer-links {
    margin-top: 1rem;
    display: flex;
    justify-content: center;
    gap: 2rem;
}
.footer-links a {
    color: var(--text-dim);
    text-decoration: none;
}
@media (max-width: 900px) {
    .hero,
    .reveal-columns {
        grid-template-columns: 1fr;
    }
    .reveal-section.reversed .reveal-visual {
        order: -1;
    }
    .features-grid {
        grid-template-columns: 1fr;
    }
}
"#;
