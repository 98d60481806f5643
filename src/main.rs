use log::info;
use yew::prelude::*;

mod config;
mod content;
mod debounce;
mod dom;
mod carousel;
mod components {
    pub mod carousel;
    pub mod faq;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use config::WidgetConfig;
use content::PageContent;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: PageContent,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <Landing content={props.content.clone()} config={WidgetConfig::default()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting application");
    let content = PageContent::load();
    yew::Renderer::<App>::with_props(AppProps { content }).render();
}
