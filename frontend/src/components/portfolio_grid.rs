use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::project_modal::{OverlayState, ProjectModal, EXIT_TRANSITION_MS};
use crate::data::projects::{filter_projects, find_project, CategoryFilter, Project, FILTERS, PROJECTS};
use crate::effects::pointer::use_tilt;

const CARD_TILT_DEGREES: f64 = 10.0;
const CARD_TAG_LIMIT: usize = 3;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    on_open: Callback<u32>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let node = use_node_ref();
    let (tilt, onmousemove, onmouseleave) = use_tilt(node.clone(), CARD_TILT_DEGREES);
    let project = props.project;

    let onclick = {
        let on_open = props.on_open.clone();
        let id = project.id;
        Callback::from(move |_: MouseEvent| on_open.emit(id))
    };

    html! {
        <div
            ref={node}
            class="project-card glass-card"
            {onclick}
            {onmousemove}
            {onmouseleave}
            style={format!("transform: {};", tilt.css())}
        >
            <div class="project-media">
                <img src={project.image} alt={project.title} loading="lazy" />
                <div class="project-media-shade"></div>
                <div class="project-category glass-card">
                    <i class={project.category.icon()}></i>
                </div>
                <div class="project-year glass-card">{project.year}</div>
                if project.has_video() {
                    <div class="project-play"><i class="fas fa-play"></i></div>
                }
            </div>
            <div class="project-body">
                <h3>{project.title}</h3>
                <p>{project.summary}</p>
                <div class="project-tags">
                    { for project.tags.iter().take(CARD_TAG_LIMIT).map(|tag| html! {
                        <span class="project-tag" key={*tag}>{*tag}</span>
                    }) }
                </div>
                <div class="project-hint">
                    <span>{"Click to view details"}</span>
                    if project.has_video() {
                        <span class="project-hint-video"><i class="fas fa-play"></i>{" Watch video"}</span>
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(PortfolioGrid)]
pub fn portfolio_grid() -> Html {
    let active_filter = use_state(CategoryFilter::default);
    let overlay = use_state(OverlayState::default);
    let clear_timer = use_mut_ref(|| None::<Timeout>);

    let visible = filter_projects(*active_filter, PROJECTS);

    let on_open = {
        let overlay = overlay.clone();
        let clear_timer = clear_timer.clone();
        Callback::from(move |id: u32| {
            clear_timer.borrow_mut().take();
            overlay.set((*overlay).open(id));
        })
    };

    let on_close = {
        let overlay = overlay.clone();
        let clear_timer = clear_timer.clone();
        Callback::from(move |_: ()| {
            let closed = (*overlay).close();
            overlay.set(closed);
            let overlay = overlay.clone();
            *clear_timer.borrow_mut() = Some(Timeout::new(EXIT_TRANSITION_MS, move || {
                overlay.set(closed.exit_finished());
            }));
        })
    };

    html! {
        <section class="portfolio-section" id="work">
            <div class="section-header">
                <p class="section-eyebrow">{"Selected Works"}</p>
                <h2>{"Strategic "}<span class="text-gradient">{"Portfolio"}</span></h2>
            </div>
            <div class="portfolio-filters">
                { for FILTERS.iter().map(|filter| {
                    let filter = *filter;
                    let onclick = {
                        let active_filter = active_filter.clone();
                        Callback::from(move |_: MouseEvent| active_filter.set(filter))
                    };
                    html! {
                        <button
                            key={filter.slug()}
                            class={classes!("filter-button", if *active_filter == filter { "active" } else { "glass-card" })}
                            {onclick}
                        >
                            {filter.label()}
                        </button>
                    }
                }) }
            </div>
            <div class="portfolio-grid">
                if visible.is_empty() {
                    <p class="portfolio-empty">{"Nothing here yet."}</p>
                }
                { for visible.into_iter().map(|project| html! {
                    <ProjectCard key={project.id} {project} on_open={on_open.clone()} />
                }) }
            </div>
            <ProjectModal
                project={overlay.selected().and_then(find_project)}
                is_open={overlay.is_open()}
                {on_close}
            />
            <style>
                {r#"
    .portfolio-section {
        padding: 8rem 2rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .portfolio-filters {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 0.75rem;
        margin-bottom: 3rem;
    }
    .filter-button {
        padding: 0.5rem 1.25rem;
        border-radius: 999px;
        font-size: 0.875rem;
        color: #999;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .filter-button:hover {
        color: #fff;
    }
    .filter-button.active {
        background: #7EB2FF;
        border: 1px solid #7EB2FF;
        color: #07080c;
    }
    .portfolio-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
    }
    .portfolio-empty {
        grid-column: 1 / -1;
        text-align: center;
        color: #777;
    }
    .project-card {
        overflow: hidden;
        cursor: pointer;
        transform-style: preserve-3d;
        transition: transform 0.15s ease-out;
    }
    .project-media {
        position: relative;
        height: 12rem;
        overflow: hidden;
    }
    .project-media img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.5s ease;
    }
    .project-card:hover .project-media img {
        transform: scale(1.1);
    }
    .project-media-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, #07080c, rgba(7, 8, 12, 0.5), transparent);
    }
    .project-category {
        position: absolute;
        top: 1rem;
        right: 1rem;
        width: 2.5rem;
        height: 2.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #7EB2FF;
    }
    .project-year {
        position: absolute;
        top: 1rem;
        left: 1rem;
        padding: 0.25rem 0.75rem;
        font-size: 0.75rem;
        font-family: monospace;
        color: #7EB2FF;
    }
    .project-play {
        position: absolute;
        bottom: 1rem;
        right: 1rem;
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        background: rgba(126, 178, 255, 0.9);
        display: flex;
        align-items: center;
        justify-content: center;
        color: #07080c;
        opacity: 0;
        transition: opacity 0.3s ease;
    }
    .project-card:hover .project-play,
    .project-card:hover .project-hint {
        opacity: 1;
    }
    .project-body {
        padding: 1.5rem;
        transform: translateZ(20px);
    }
    .project-body h3 {
        font-size: 1.125rem;
        margin-bottom: 0.5rem;
    }
    .project-body p {
        font-size: 0.875rem;
        color: #999;
        margin-bottom: 1rem;
    }
    .project-tags {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
    }
    .project-tag {
        padding: 0.25rem 0.5rem;
        font-size: 0.75rem;
        border-radius: 6px;
        background: rgba(255, 255, 255, 0.06);
        color: #ccc;
    }
    .project-hint {
        margin-top: 1rem;
        padding-top: 1rem;
        border-top: 1px solid rgba(255, 255, 255, 0.08);
        display: flex;
        justify-content: space-between;
        font-size: 0.75rem;
        color: #777;
        opacity: 0;
        transition: opacity 0.3s ease;
    }
    .project-hint-video {
        color: #7EB2FF;
    }
    @media (max-width: 968px) {
        .portfolio-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 640px) {
        .portfolio-grid {
            grid-template-columns: 1fr;
        }
    }
                "#}
            </style>
        </section>
    }
}
