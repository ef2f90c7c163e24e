//! Lessons list as a single-open accordion.

#[cfg(test)]
#[path = "lessons_test.rs"]
mod lessons_test;

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::hooks::use_lessons;
use crate::net::types::Lesson;

/// Open panel after clicking `clicked` when `open` is showing. Clicking the
/// open panel closes it; clicking another switches to it.
pub fn toggle_panel(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) { None } else { Some(clicked) }
}

pub fn load_failure(message: &str) -> String {
    format!("Failed to load lessons: {message}")
}

#[component]
pub fn LessonsPage() -> impl IntoView {
    let lessons = use_lessons();
    let open = RwSignal::new(None::<usize>);

    let body = move || {
        let state = lessons.get();
        if let Some(err) = &state.error {
            return view! { <p class="page__error">{load_failure(&err.message)}</p> }.into_any();
        }
        match state.data {
            Some(list) => view! { <LessonAccordion lessons=list open=open /> }.into_any(),
            None => view! { <Loading /> }.into_any(),
        }
    };

    view! {
        <section class="page">
            <h1 class="page__title">"Lessons"</h1>
            {body}
        </section>
    }
}

#[component]
fn LessonAccordion(lessons: Vec<Lesson>, open: RwSignal<Option<usize>>) -> impl IntoView {
    let items = lessons
        .into_iter()
        .enumerate()
        .map(|(index, lesson)| {
            let expanded = move || open.get() == Some(index);
            view! {
                <div class="accordion__item">
                    <h2>
                        <button
                            class="accordion__button"
                            type="button"
                            aria-expanded=move || expanded().to_string()
                            on:click=move |_| open.update(|o| *o = toggle_panel(*o, index))
                        >
                            <span class="accordion__title">{lesson.title}</span>
                            <span class="accordion__icon">{move || if expanded() { "−" } else { "+" }}</span>
                        </button>
                    </h2>
                    <div class="accordion__panel" class:accordion__panel--open=expanded>
                        <p class="accordion__description">{lesson.description}</p>
                        <p class="accordion__content">{lesson.content}</p>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="accordion">{items}</div> }
}
