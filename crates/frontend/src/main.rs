mod components;
mod services;
mod site;
mod state;

use yew::prelude::*;

use crate::components::header::Header;
use crate::components::lectures_section::LecturesSection;
use crate::site::SiteConfig;

#[derive(Properties, PartialEq)]
struct AppProps {
    site: SiteConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let site = props.site.clone();

    html! {
        <div id="app">
            <Header site={site.clone()} />
            <main>
                <LecturesSection url={site.lectures_url.clone()} />
            </main>
        </div>
    }
}

fn main() {
    tracing_wasm::set_as_global_default();

    let site = SiteConfig::tjhsst();
    gloo::utils::document().set_title(&site.club_name);

    yew::Renderer::<App>::with_props(AppProps { site }).render();
}
