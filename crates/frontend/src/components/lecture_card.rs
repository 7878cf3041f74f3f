use lecture_types::{Lecture, LectureLink, LinkKind};
use yew::prelude::*;

fn link_icon(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Slides => "📊",
        LinkKind::Code => "💻",
        LinkKind::Signup => "✍️",
        LinkKind::Other => "🔗",
    }
}

#[derive(Properties, PartialEq)]
pub struct LectureCardProps {
    pub lecture: Lecture,
}

#[function_component(LectureCard)]
pub fn lecture_card(props: &LectureCardProps) -> Html {
    let lecture = &props.lecture;

    html! {
        <div class="lecture-card">
            <h3 class="lecture-title">{ &lecture.title }</h3>
            <p class="lecture-date">{ lecture.date_label() }</p>
            if let Some(desc) = &lecture.description {
                <p class="lecture-description">{ desc }</p>
            }
            if !lecture.links.is_empty() {
                <div class="lecture-links">
                    { for lecture.links.iter().map(link_button) }
                </div>
            }
        </div>
    }
}

fn link_button(link: &LectureLink) -> Html {
    html! {
        <a
            class={classes!("lecture-link", format!("lecture-link-{}", link.kind.as_str()))}
            href={link.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            <span class="lecture-link-icon">{ link_icon(link.kind) }</span>
            { " " }
            { &link.label }
        </a>
    }
}
