use yew::prelude::*;

use crate::components::lecture_grid::LectureGrid;
use crate::services::lectures::LecturesService;
use crate::state::{FetchGuard, LecturesState};

#[derive(Properties, PartialEq)]
pub struct LecturesSectionProps {
    pub url: AttrValue,
}

#[function_component(LecturesSection)]
pub fn lectures_section(props: &LecturesSectionProps) -> Html {
    let state = use_reducer(LecturesState::default);

    // Fetch once per mount; re-runs only if the url prop changes
    {
        let state = state.clone();
        use_effect_with(props.url.clone(), move |url| {
            let guard = FetchGuard::default();
            {
                let guard = guard.clone();
                let url = url.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let action = LecturesService::load(&url).await;
                    guard.deliver(action, |action| state.dispatch(action));
                });
            }
            move || guard.cancel()
        });
    }

    html! {
        <div id="lectures" class="lectures">
            if state.is_loading() {
                <p class="loading">{ "Loading lectures..." }</p>
            } else {
                <LectureGrid
                    heading="Upcoming Lectures"
                    lectures={state.upcoming().to_vec()}
                    empty_message="No upcoming lectures scheduled yet. Check back soon!"
                />
                <LectureGrid
                    heading="Previous Lectures"
                    lectures={state.previous().to_vec()}
                    empty_message="No previous lectures yet."
                />
            }
        </div>
    }
}
