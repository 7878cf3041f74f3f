use yew::prelude::*;

use crate::site::SiteConfig;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub site: SiteConfig,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let site = &props.site;

    html! {
        <header class="header">
            <h1>{ &*site.club_name }</h1>
            <nav>
                <a href="#lectures">{ "Lectures" }</a>
                <a href={site.discord_url.clone()} target="_blank" rel="noopener noreferrer">
                    { "Discord" }
                </a>
                <a href={site.signup_url.clone()} target="_blank" rel="noopener noreferrer">
                    <strong>{ "Sign up" }</strong>
                </a>
            </nav>
        </header>
    }
}
