//! Gallery Component
//!
//! Photos newest first, each with its title, capture time and a delete
//! button.

use chrono::Local;
use leptos::prelude::*;

use crate::components::PhotoUploadForm;
use crate::context::PlannerContext;
use crate::store::UiStore;

#[component]
pub fn Gallery(ui: UiStore) -> impl IntoView {
    let ctx = use_context::<PlannerContext>().expect("PlannerContext should be provided");
    let photos = move || ctx.photos.with(|store| store.list().items().to_vec());

    view! {
        <section class="gallery">
            <PhotoUploadForm ui=ui />

            <div class="photo-grid">
                <For
                    each=photos
                    key=|photo| photo.id
                    children=move |photo| {
                        let id = photo.id;
                        let taken = photo
                            .created_at
                            .with_timezone(&Local)
                            .format("%Y-%m-%d %H:%M")
                            .to_string();
                        view! {
                            <figure class="photo-card">
                                <img src=photo.data_url alt=photo.title.clone() />
                                <figcaption>
                                    <span class="photo-title">{photo.title}</span>
                                    <time>{taken}</time>
                                    <button class="delete-btn" on:click=move |_| ctx.delete_photo(id)>"×"</button>
                                </figcaption>
                            </figure>
                        }
                    }
                />
            </div>

            <Show when=move || ctx.photos.with(|store| store.is_empty())>
                <p class="empty-note">"No photos yet"</p>
            </Show>
        </section>
    }
}
