//! Icon + title + blurb card used on the home and play pages.

use leptos::prelude::*;

#[component]
pub fn FeatureCard(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="card feature-card">
            <div class="feature-card__icon">{icon}</div>
            <h3 class="feature-card__title">{title}</h3>
            <p class="feature-card__description">{description}</p>
            {children.map(|c| c())}
        </div>
    }
}
