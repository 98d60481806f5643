use yew::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::faq::Faq;
use crate::components::reveal::Reveal;
use crate::config::WidgetConfig;
use crate::content::PageContent;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: PageContent,
    #[prop_or_default]
    pub config: WidgetConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let LandingProps { content, config } = props;

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

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <header class="hero">
                <h1>{"Spaces designed around the people who live in them"}</h1>
                <p class="hero-subtitle">{"Architecture and interiors studio"}</p>
                <a class="hero-cta" href="#faq">{"How we work"}</a>
            </header>

            <section class="projects">
                <h2>{"Recent projects"}</h2>
                <p>{"Tap a picture to read about the project."}</p>
                <Carousel slides={content.slides.clone()} config={*config} />
            </section>

            <section class="servicos">
                <h2>{"Services"}</h2>
                <div class="servicos-grid">
                    {
                        for content.services.iter().map(|service| html! {
                            <Reveal class="servico-item" config={*config}>
                                <h3>{&service.title}</h3>
                                <p>{&service.text}</p>
                            </Reveal>
                        })
                    }
                </div>
            </section>

            <section class="socias">
                <h2>{"The partners"}</h2>
                <div class="socias-grid">
                    {
                        for content.partners.iter().map(|partner| html! {
                            <Reveal class="socia-item" start_hidden={true} config={*config}>
                                <h3>{&partner.name}</h3>
                                <p>{&partner.role}</p>
                            </Reveal>
                        })
                    }
                </div>
            </section>

            <Faq entries={content.faq.clone()} />

            <footer class="landing-footer">
                <p>{"Get in touch to start your project."}</p>
            </footer>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        font-family: system-ui, sans-serif;
        color: #222;
    }
    .hero {
        padding: 6rem 1.5rem 4rem;
        text-align: center;
    }
    .hero h1 {
        font-size: 2.6rem;
        margin-bottom: 1rem;
    }
    .hero-cta {
        display: inline-block;
        margin-top: 1.5rem;
        padding: 0.8rem 1.6rem;
        border-radius: 999px;
        background: #222;
        color: #fff;
        text-decoration: none;
    }
    .projects, .servicos, .socias {
        max-width: 1200px;
        margin: 0 auto;
        padding: 3rem 1.5rem;
    }
    .servicos-grid, .socias-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 1.5rem;
    }
    .servico-item, .socia-item {
        padding: 1.5rem;
        border-radius: 12px;
        background: #f6f4f1;
    }
    .scroll-animate {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .animate-in {
        opacity: 1;
        transform: translateY(0);
    }
    .landing-footer {
        padding: 3rem 1.5rem;
        text-align: center;
    }
    @media (max-width: 768px) {
        .hero h1 {
            font-size: 2rem;
        }
    }
"#;
