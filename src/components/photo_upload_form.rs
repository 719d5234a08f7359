//! Photo Upload Form Component
//!
//! Title input plus an image file picker. The file is read asynchronously;
//! when the read finishes the photo is stored and the title cleared.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::PlannerContext;
use crate::store::{UiStateStoreFields, UiStore};

#[component]
pub fn PhotoUploadForm(ui: UiStore) -> impl IntoView {
    let ctx = use_context::<PlannerContext>().expect("PlannerContext should be provided");
    let title = ui.photo_title();
    let reads = ui.photo_reads();

    let on_file = move |ev: web_sys::Event| {
        // No file chosen: nothing to do
        let Some(file) = commands::first_selected_file(&ev) else {
            return;
        };
        commands::clear_file_input(&ev);
        reads.update(|r| r.start());

        spawn_local(async move {
            let name = file.name();
            match commands::read_file(file).await {
                Ok(selected) => {
                    ctx.add_photo(&title.get_untracked(), &selected);
                    title.set(String::new());
                }
                Err(e) => log::error!("failed to read {}: {}", name, e),
            }
            reads.update(|r| r.finish());
        });
    };

    view! {
        <div class="photo-upload-form">
            <input
                type="text"
                placeholder="Title (defaults to file name)"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <label class="file-picker">
                "Add photo"
                <input type="file" accept="image/*" on:change=on_file />
            </label>
            <Show when=move || reads.get().is_active()>
                <span class="pending-note">"Reading…"</span>
            </Show>
        </div>
    }
}
