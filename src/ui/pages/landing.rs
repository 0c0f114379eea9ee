//! Landing page component
//!
//! Static markup for the Pollen studio page:
//! - Hero with the particle background and entrance animation
//! - Features, portfolio and testimonial cards revealed on scroll
//! - Contact form
//!
//! Everything beyond the markup is installed by [`crate::ui::enhance`] once the
//! page has hydrated.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::contact_form::ContactForm;
use crate::ui::navigation::Navbar;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::ui::config::use_page_config;
        use crate::ui::enhance::{self, Enhancements};

        let config = use_page_config();
        let enhancements = StoredValue::new_local(None::<Enhancements>);

        // Runs once, after the markup is attached
        Effect::new(move |_| {
            if enhancements.with_value(Option::is_none) {
                enhancements.set_value(Some(enhance::install(&config)));
            }
        });

        on_cleanup(move || {
            enhancements.with_value(|installed| {
                if let Some(installed) = installed {
                    installed.teardown();
                }
            });
        });
    }

    view! {
        <SeoMeta />

        <Navbar />

        <main>
            <section id="home" class="hero">
                <div class="hero-background" aria-hidden="true"></div>
                <div id="heroParticles" class="hero-particles" aria-hidden="true"></div>

                <div class="hero-content">
                    <h1 class="hero-title">
                        <span class="title-line" data-delay="0">"We grow brands"</span>
                        <span class="title-line" data-delay="0.2">"that people remember"</span>
                    </h1>
                    <p class="hero-subtitle">
                        "Pollen is a small design and development studio. We build fast, \
                         thoughtful websites and identities for teams that care about craft."
                    </p>
                    <div class="hero-cta">
                        <a href="#portfolio" class="btn btn-primary">"See our work"</a>
                        <a href="#contact" class="btn btn-secondary">"Start a project"</a>
                    </div>
                </div>
            </section>

            <section id="features" class="section features">
                <div class="container">
                    <SectionHeader
                        title="What we do"
                        subtitle="Strategy, design and engineering under one roof."
                    />
                    <div class="features-grid">
                        {FEATURES
                            .iter()
                            .enumerate()
                            .map(|(i, (title, description))| {
                                view! {
                                    <article class="feature-card" data-animate="fade-up" data-delay=stagger(i)>
                                        <div class="feature-icon" aria-hidden="true">{i + 1}</div>
                                        <h3>{*title}</h3>
                                        <p>{*description}</p>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="portfolio" class="section portfolio">
                <div class="container">
                    <SectionHeader title="Selected work" subtitle="A few projects we are proud of." />
                    <div class="portfolio-grid">
                        {PROJECTS
                            .iter()
                            .enumerate()
                            .map(|(i, project)| view! { <PortfolioItem project=*project index=i /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="testimonials" class="section testimonials">
                <div class="container">
                    <SectionHeader title="Kind words" subtitle="From the people we work with." />
                    <div class="testimonials-grid">
                        {TESTIMONIALS
                            .iter()
                            .enumerate()
                            .map(|(i, (quote, author, role))| {
                                let intent = if i % 2 == 0 { "fade-left" } else { "fade-right" };
                                view! {
                                    <blockquote class="testimonial-card" data-animate=intent data-delay=stagger(i)>
                                        <p class="testimonial-quote">{*quote}</p>
                                        <footer>
                                            <strong>{*author}</strong>
                                            <span>{*role}</span>
                                        </footer>
                                    </blockquote>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="contact" class="section contact">
                <div class="container contact-container">
                    <SectionHeader
                        title="Let's talk"
                        subtitle="Tell us about your project and we will get back to you within a day."
                    />
                    <div data-animate="fade-in">
                        <ContactForm />
                    </div>
                </div>
            </section>
        </main>

        <Footer />

        <LandingStyles />
    }
}

const FEATURES: &[(&str, &str)] = &[
    ("Brand identity", "Logos, type and colour systems that hold up from favicon to billboard."),
    ("Web design", "Layouts that guide the eye and read well on every screen size."),
    ("Development", "Fast, accessible sites built on a modern stack and easy to maintain."),
    ("Motion", "Subtle animation that gives a page rhythm without getting in the way."),
];

#[derive(Clone, Copy)]
struct Project {
    title: &'static str,
    category: &'static str,
    image: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Meadow Coffee",
        category: "Identity",
        image: "/images/work-meadow.svg",
    },
    Project {
        title: "Northwind Atlas",
        category: "Web app",
        image: "/images/work-atlas.svg",
    },
    Project {
        title: "Hive Conference",
        category: "Event site",
        image: "/images/work-hive.svg",
    },
];

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "Pollen understood what we wanted before we could put it into words.",
        "Ana Ribeiro",
        "Founder, Meadow Coffee",
    ),
    (
        "The new site loads in a blink and our sign-ups doubled in a month.",
        "Tom Becker",
        "Product Lead, Northwind",
    ),
];

/// Placeholder shown until the real image is loaded
const IMAGE_PLACEHOLDER: &str =
    "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 4 3'/%3E";

/// `data-delay` for the i-th card in a row
fn stagger(index: usize) -> String {
    format!("{:.1}", index as f64 * 0.1)
}

/// Section title and subtitle, revealed on scroll
#[component]
fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-header" data-animate="fade-up">
            <h2 class="section-title">{title}</h2>
            <p class="section-subtitle">{subtitle}</p>
        </div>
    }
}

/// Portfolio card with a lazily loaded image
#[component]
fn PortfolioItem(project: Project, index: usize) -> impl IntoView {
    view! {
        <figure class="portfolio-item" data-animate="fade-up" data-delay=stagger(index)>
            <img src=IMAGE_PLACEHOLDER data-src=project.image alt=project.title width="400" height="300" />
            <figcaption>
                <span class="portfolio-category">{project.category}</span>
                <h3>{project.title}</h3>
            </figcaption>
        </figure>
    }
}

/// SEO meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Pollen - Design & Development Studio" />
        <Meta name="description" content="Pollen is a design and development studio building brands and websites people remember." />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Pollen - Design & Development Studio" />
        <Meta property="og:description" content="Brand identity, web design and development from a small, focused team." />
        <Meta name="theme-color" content="#0b0b12" />
        <Link rel="icon" href="/favicon.svg" />
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-content">
                <a href="#home" class="nav-logo">"Pollen"</a>
                <p>"© 2025 Pollen Studio. Made with care."</p>
                <ul class="footer-links">
                    <li><a href="#features">"Services"</a></li>
                    <li><a href="#portfolio">"Work"</a></li>
                    <li><a href="#contact">"Contact"</a></li>
                </ul>
            </div>
        </footer>
    }
}

/// Page stylesheet
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            :root {
                --bg: #0b0b12;
                --surface: #14141f;
                --text: #f4f4f8;
                --muted: #a1a1b5;
                --accent: #f5b942;
                --accent-strong: #e89b16;
                --border: rgba(255, 255, 255, 0.08);
            }

            *, *::before, *::after { box-sizing: border-box; }

            body {
                margin: 0;
                font-family: "Inter", system-ui, -apple-system, sans-serif;
                background: var(--bg);
                color: var(--text);
                line-height: 1.6;
                overflow-x: hidden;
            }

            a { color: inherit; text-decoration: none; }

            .container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }

            /* Navigation */
            .navbar {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 100;
                padding: 1.5rem 0;
                transition: background 0.3s, padding 0.3s, box-shadow 0.3s;
            }
            .navbar.scrolled {
                padding: 0.75rem 0;
                background: rgba(11, 11, 18, 0.85);
                backdrop-filter: blur(12px);
                box-shadow: 0 1px 0 var(--border);
            }
            .nav-container {
                max-width: 1200px;
                margin: 0 auto;
                padding: 0 1.5rem;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }
            .nav-logo { font-size: 1.5rem; font-weight: 700; color: var(--accent); }
            .nav-menu { display: flex; gap: 2rem; list-style: none; margin: 0; padding: 0; }
            .nav-link { color: var(--muted); font-weight: 500; transition: color 0.2s; }
            .nav-link:hover { color: var(--text); }

            .nav-toggle {
                display: none;
                flex-direction: column;
                gap: 5px;
                background: none;
                border: 0;
                padding: 0.5rem;
                cursor: pointer;
            }
            .nav-toggle-bar {
                width: 24px;
                height: 2px;
                background: var(--text);
                transition: transform 0.3s, opacity 0.3s;
            }
            .nav-toggle.active .nav-toggle-bar:nth-child(1) { transform: translateY(7px) rotate(45deg); }
            .nav-toggle.active .nav-toggle-bar:nth-child(2) { opacity: 0; }
            .nav-toggle.active .nav-toggle-bar:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

            /* Hero */
            .hero {
                position: relative;
                min-height: 100vh;
                display: flex;
                align-items: center;
                justify-content: center;
                overflow: hidden;
                text-align: center;
            }
            .hero-background {
                position: absolute;
                inset: -20% 0 0 0;
                background:
                    radial-gradient(circle at 25% 30%, rgba(245, 185, 66, 0.18), transparent 45%),
                    radial-gradient(circle at 75% 70%, rgba(232, 155, 22, 0.12), transparent 50%);
                z-index: 0;
            }
            .hero-particles { position: absolute; inset: 0; z-index: 1; pointer-events: none; }
            .hero-particles canvas { width: 100%; height: 100%; display: block; }
            .hero-content { position: relative; z-index: 2; max-width: 800px; padding: 0 1.5rem; }
            .hero-title { font-size: clamp(2.5rem, 6vw, 4.5rem); line-height: 1.1; margin: 0 0 1.5rem; }
            .title-line { display: block; }
            .hero-subtitle { font-size: 1.25rem; color: var(--muted); margin: 0 0 2.5rem; }
            .hero-cta { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }

            /* Buttons */
            .btn {
                display: inline-block;
                padding: 0.875rem 1.75rem;
                border-radius: 0.75rem;
                font-weight: 600;
                border: 2px solid transparent;
                cursor: pointer;
                font-size: 1rem;
                transition: background 0.2s, border-color 0.2s;
            }
            .btn-primary { background: var(--accent); color: var(--bg); }
            .btn-primary:hover { background: var(--accent-strong); }
            .btn-primary:disabled { opacity: 0.6; cursor: wait; }
            .btn-secondary { border-color: var(--border); color: var(--text); }
            .btn-secondary:hover { border-color: var(--accent); }

            /* Sections */
            .section { padding: 6rem 0; position: relative; }
            .section-header { text-align: center; margin-bottom: 3.5rem; }
            .section-title { font-size: clamp(2rem, 4vw, 2.75rem); margin: 0 0 0.75rem; }
            .section-subtitle { color: var(--muted); margin: 0; }

            .features-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                gap: 1.5rem;
            }
            .feature-card, .testimonial-card, .portfolio-item {
                background: var(--surface);
                border: 1px solid var(--border);
                border-radius: 1rem;
            }
            .feature-card { padding: 2rem; }
            .feature-card h3 { margin: 1rem 0 0.5rem; }
            .feature-card p { margin: 0; color: var(--muted); }
            .feature-icon {
                width: 3rem;
                height: 3rem;
                border-radius: 0.75rem;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(245, 185, 66, 0.12);
                color: var(--accent);
                font-weight: 700;
            }

            .portfolio-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                gap: 1.5rem;
            }
            .portfolio-item { margin: 0; overflow: hidden; }
            .portfolio-item img { width: 100%; height: auto; display: block; background: #1c1c2a; }
            .portfolio-item figcaption { padding: 1.25rem 1.5rem; }
            .portfolio-item h3 { margin: 0.25rem 0 0; }
            .portfolio-category { color: var(--accent); font-size: 0.875rem; font-weight: 600; }

            .testimonials-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                gap: 1.5rem;
            }
            .testimonial-card { margin: 0; padding: 2rem; }
            .testimonial-quote { font-size: 1.125rem; margin: 0 0 1.5rem; }
            .testimonial-card footer { display: flex; flex-direction: column; }
            .testimonial-card footer span { color: var(--muted); font-size: 0.875rem; }

            /* Contact */
            .contact-container { max-width: 640px; }
            .contact-form { display: flex; flex-direction: column; gap: 1.25rem; }
            .form-group { display: flex; flex-direction: column; gap: 0.5rem; }
            .form-group label { font-weight: 500; }
            .form-group input {
                padding: 0.875rem 1rem;
                border-radius: 0.75rem;
                border: 1px solid var(--border);
                background: var(--surface);
                color: var(--text);
                font-size: 1rem;
            }
            .form-group input:focus { outline: none; border-color: var(--accent); }

            @keyframes fadeIn {
                from { opacity: 0; transform: translateY(-10px); }
                to { opacity: 1; transform: translateY(0); }
            }
            @keyframes fadeOut {
                from { opacity: 1; transform: translateY(0); }
                to { opacity: 0; transform: translateY(-10px); }
            }

            /* Footer */
            .footer { padding: 3rem 0; border-top: 1px solid var(--border); }
            .footer-content {
                display: flex;
                align-items: center;
                justify-content: space-between;
                flex-wrap: wrap;
                gap: 1rem;
                color: var(--muted);
            }
            .footer-content p { margin: 0; }
            .footer-links { display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0; }
            .footer-links a:hover { color: var(--text); }

            /* Mobile */
            @media (max-width: 768px) {
                .nav-toggle { display: flex; }
                .nav-menu {
                    position: fixed;
                    top: 0;
                    right: 0;
                    height: 100vh;
                    width: 75%;
                    max-width: 320px;
                    flex-direction: column;
                    justify-content: center;
                    padding: 2rem;
                    background: var(--surface);
                    transform: translateX(100%);
                    transition: transform 0.3s ease;
                }
                .nav-menu.active { transform: translateX(0); }
                .nav-toggle { position: relative; z-index: 101; }
                .hero-subtitle { font-size: 1.05rem; }
                .section { padding: 4rem 0; }
                .footer-content { flex-direction: column; text-align: center; }
            }
            "#
        </style>
    }
}
