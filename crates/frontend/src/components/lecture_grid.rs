use lecture_types::Lecture;
use yew::prelude::*;

use crate::components::lecture_card::LectureCard;

#[derive(Properties, PartialEq)]
pub struct LectureGridProps {
    pub heading: AttrValue,
    pub lectures: Vec<Lecture>,
    pub empty_message: AttrValue,
}

#[function_component(LectureGrid)]
pub fn lecture_grid(props: &LectureGridProps) -> Html {
    html! {
        <section class="lecture-group">
            <h2>{ &*props.heading }</h2>
            if props.lectures.is_empty() {
                <p class="empty-state">{ &*props.empty_message }</p>
            } else {
                <div class="lecture-grid">
                    { for props.lectures.iter().map(|lecture| html! {
                        <LectureCard lecture={lecture.clone()} />
                    })}
                </div>
            }
        </section>
    }
}
