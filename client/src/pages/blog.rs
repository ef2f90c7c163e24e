//! Blog post list.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::hooks::use_blog_posts;
use crate::net::types::BlogPost;
use crate::util::format::format_post_date;

pub const DEFAULT_AUTHOR: &str = "StockLive Team";

/// `author • date` line under a post title.
pub fn byline(post: &BlogPost) -> String {
    let author = post.author.as_deref().filter(|a| !a.trim().is_empty()).unwrap_or(DEFAULT_AUTHOR);
    format!("{author} • {}", format_post_date(post.date_posted.as_deref()))
}

pub fn load_failure(message: &str) -> String {
    format!("Failed to load blog posts: {message}")
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let posts = use_blog_posts();

    let body = move || {
        let state = posts.get();
        if let Some(err) = &state.error {
            return view! { <p class="page__error">{load_failure(&err.message)}</p> }.into_any();
        }
        match state.data {
            Some(list) => list
                .into_iter()
                .map(|post| {
                    let meta = byline(&post);
                    view! {
                        <article class="post-card">
                            <header class="post-card__header">
                                <h2 class="post-card__title">{post.title}</h2>
                                <p class="post-card__meta">{meta}</p>
                            </header>
                            <p class="post-card__body">{post.content}</p>
                        </article>
                    }
                })
                .collect::<Vec<_>>()
                .into_any(),
            None => view! { <Loading /> }.into_any(),
        }
    };

    view! {
        <section class="page">
            <h1 class="page__title">"Blog"</h1>
            {body}
        </section>
    }
}
