use wasm_bindgen::JsCast;
use web_sys::{HtmlVideoElement, KeyboardEvent};
use yew::prelude::*;

use crate::data::projects::Project;
use crate::utils::listener::EventSubscription;

/// Length of the fade/scale transition in the stylesheet below.
pub const EXIT_TRANSITION_MS: u32 = 300;

/// Which project the overlay shows and whether it is open.
///
/// Closing keeps the selection so the overlay stays mounted, and its video
/// reachable, until the exit transition has played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    selected: Option<u32>,
    open: bool,
}

impl OverlayState {
    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_mounted(&self) -> bool {
        self.selected.is_some()
    }

    pub fn open(self, id: u32) -> Self {
        Self {
            selected: Some(id),
            open: true,
        }
    }

    pub fn close(self) -> Self {
        Self { open: false, ..self }
    }

    /// Drops the selection after the exit transition, unless reopened.
    pub fn exit_finished(self) -> Self {
        if self.open {
            self
        } else {
            Self::default()
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: Option<&'static Project>,
    pub is_open: bool,
    pub on_close: Callback<()>,
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        if let Err(e) = body.style().set_property("overflow", value) {
            log::warn!("Failed to set body overflow: {:?}", e);
        }
    }
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let video_ref = use_node_ref();

    // Escape closes the overlay and the page behind it stops scrolling while open
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |is_open| {
                let subscription = if *is_open {
                    set_body_overflow("hidden");
                    web_sys::window().and_then(|w| w.document()).and_then(|document| {
                        EventSubscription::new(&document, "keydown", move |event: web_sys::Event| {
                            let escape = event
                                .dyn_ref::<KeyboardEvent>()
                                .map(|key| key.key() == "Escape")
                                .unwrap_or(false);
                            if escape {
                                on_close.emit(());
                            }
                        })
                        .map_err(|e| log::warn!("Failed to listen for Escape: {:?}", e))
                        .ok()
                    })
                } else {
                    None
                };
                move || {
                    drop(subscription);
                    set_body_overflow("unset");
                }
            },
            props.is_open,
        );
    }

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |is_open| {
                if !*is_open {
                    if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                        if let Err(e) = video.pause() {
                            log::warn!("Failed to pause project video: {:?}", e);
                        }
                    }
                }
                || ()
            },
            props.is_open,
        );
    }

    let Some(project) = props.project else {
        return html! {};
    };
    let state = props.is_open.then_some("modal-open");

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let detail = |label: &'static str, value: Option<&'static str>| -> Html {
        match value {
            Some(value) => html! {
                <div class="modal-detail glass-card">
                    <p class="modal-detail-label">{label}</p>
                    <p class="modal-detail-value">{value}</p>
                </div>
            },
            None => html! {},
        }
    };

    html! {
        <>
            <div class={classes!("modal-backdrop", state)} onclick={close.clone()}></div>
            <div
                class={classes!("modal-shell", state)}
                role="dialog"
                aria-modal="true"
                aria-hidden={(!props.is_open).to_string()}
                aria-label={project.title}
            >
                <div class="modal-card glass-card">
                    <button class="modal-close glass-card" onclick={close} aria-label="Close">
                        <i class="fas fa-xmark"></i>
                    </button>
                    <div class="modal-scroll">
                        <div class="modal-layout">
                            <div class="modal-media">
                                if let Some(video) = project.video {
                                    <video
                                        ref={video_ref}
                                        src={video}
                                        poster={project.image}
                                        controls=true
                                        autoplay=true
                                    >
                                        {"Your browser does not support the video tag."}
                                    </video>
                                    <div class="modal-media-badge glass-card">
                                        <i class="fas fa-play"></i>
                                        <span>{"Video Project"}</span>
                                    </div>
                                } else {
                                    <img src={project.image} alt={project.title} />
                                    <div class="modal-media-shade"></div>
                                }
                            </div>
                            <div class="modal-content">
                                <div class="modal-heading">
                                    <span class="modal-category">{project.category.label()}</span>
                                    <span class="modal-year">{project.year}</span>
                                </div>
                                <h2>{project.title}</h2>
                                <p class="modal-description">{project.description()}</p>
                                <div class="modal-details">
                                    {detail("Organization", project.organization)}
                                    {detail("Expertise", project.role)}
                                    {detail("Duration", project.duration)}
                                    {detail("Year", Some(project.year))}
                                </div>
                                <p class="modal-tags-label"><i class="fas fa-tag"></i>{" Technologies Used"}</p>
                                <div class="modal-tags">
                                    { for project.tags.iter().map(|tag| html! {
                                        <span class="modal-tag" key={*tag}>{*tag}</span>
                                    }) }
                                </div>
                                <a
                                    class="btn-electric modal-link"
                                    href={project.link}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <span>{"View Full Case Study"}</span>
                                    <i class="fas fa-arrow-up-right-from-square"></i>
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
    .modal-backdrop {
        position: fixed;
        inset: 0;
        z-index: 50;
        background: rgba(7, 8, 12, 0.9);
        backdrop-filter: blur(24px);
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s ease;
    }
    .modal-shell {
        position: fixed;
        inset: 4rem;
        z-index: 51;
        overflow: hidden;
        opacity: 0;
        transform: scale(0.95) translateY(20px);
        pointer-events: none;
        transition: opacity 0.3s ease, transform 0.3s ease;
    }
    .modal-backdrop.modal-open {
        opacity: 1;
        pointer-events: auto;
    }
    .modal-shell.modal-open {
        opacity: 1;
        transform: none;
        pointer-events: auto;
    }
    .modal-card {
        position: relative;
        height: 100%;
        display: flex;
        flex-direction: column;
        overflow: hidden;
    }
    .modal-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        z-index: 2;
        width: 2.5rem;
        height: 2.5rem;
        cursor: pointer;
        color: #fff;
    }
    .modal-scroll {
        flex: 1;
        overflow-y: auto;
    }
    .modal-layout {
        display: grid;
        grid-template-columns: 1fr 1fr;
        min-height: 100%;
    }
    .modal-media {
        position: relative;
        background: #0b0d12;
    }
    .modal-media img, .modal-media video {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .modal-media-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, rgba(7, 8, 12, 0.6), transparent);
    }
    .modal-media-badge {
        position: absolute;
        top: 1rem;
        left: 1rem;
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.375rem 0.75rem;
        font-size: 0.75rem;
    }
    .modal-content {
        padding: 2.5rem;
        display: flex;
        flex-direction: column;
    }
    .modal-heading {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 1rem;
    }
    .modal-category {
        padding: 0.25rem 0.75rem;
        font-size: 0.75rem;
        border-radius: 999px;
        background: rgba(126, 178, 255, 0.1);
        color: #7EB2FF;
    }
    .modal-year {
        font-size: 0.75rem;
        font-family: monospace;
        color: #777;
    }
    .modal-content h2 {
        font-size: 2.25rem;
        margin-bottom: 1rem;
    }
    .modal-description {
        color: #aaa;
        line-height: 1.7;
        margin-bottom: 1.5rem;
    }
    .modal-details {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .modal-detail {
        padding: 1rem;
    }
    .modal-detail-label, .modal-tags-label {
        font-size: 0.75rem;
        color: #777;
        margin-bottom: 0.25rem;
    }
    .modal-tags {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        margin-bottom: 2rem;
    }
    .modal-tag {
        padding: 0.375rem 0.75rem;
        font-size: 0.875rem;
        border-radius: 8px;
        background: rgba(255, 255, 255, 0.06);
    }
    .modal-link {
        margin-top: auto;
        width: 15rem;
    }
    @media (max-width: 968px) {
        .modal-shell {
            inset: 1rem;
        }
        .modal-layout {
            grid-template-columns: 1fr;
        }
        .modal-media {
            height: 16rem;
        }
    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_unmounted() {
        let state = OverlayState::default();
        assert!(!state.is_open());
        assert!(!state.is_mounted());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn closing_keeps_the_project_mounted_until_exit_ends() {
        let closed = OverlayState::default().open(14).close();
        assert!(!closed.is_open());
        assert!(closed.is_mounted());
        assert_eq!(closed.selected(), Some(14));

        let gone = closed.exit_finished();
        assert_eq!(gone, OverlayState::default());
    }

    #[test]
    fn reopening_during_exit_survives_the_late_clear() {
        let reopened = OverlayState::default().open(14).close().open(12);
        let after = reopened.exit_finished();
        assert!(after.is_open());
        assert_eq!(after.selected(), Some(12));
    }

    #[test]
    fn switching_projects_while_open_replaces_selection() {
        let state = OverlayState::default().open(11).open(15);
        assert_eq!(state.selected(), Some(15));
        assert!(state.is_open());
    }
}
