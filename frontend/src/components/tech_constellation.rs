use yew::prelude::*;

use crate::data::tech_stack::TECH_ICONS;
use crate::effects::pointer::{constellation_offset, use_pointer_position};

const DRIFT_STRENGTH: f64 = 20.0;

#[function_component(TechConstellation)]
pub fn tech_constellation() -> Html {
    let pointer = use_pointer_position();

    html! {
        <section class="constellation-section" id="stack">
            <div class="constellation-glow"></div>
            <div class="section-header">
                <p class="section-eyebrow">{"Tech Stack"}</p>
                <h2>{"Tool "}<span class="text-gradient">{"Constellation"}</span></h2>
            </div>
            <div class="constellation">
                { for TECH_ICONS.iter().enumerate().map(|(index, tech)| {
                    let (dx, dy) = constellation_offset(pointer, index, DRIFT_STRENGTH);
                    html! {
                        <div
                            key={tech.name}
                            class={classes!("constellation-node", tech.float_class)}
                            style={format!(
                                "left: {}%; top: {}%; transform: translate(-50%, -50%) translate({:.1}px, {:.1}px); animation-delay: {}s;",
                                tech.x, tech.y, dx, dy, tech.delay
                            )}
                        >
                            <div class="constellation-badge glass-card">
                                <span class="constellation-abbr">{tech.abbreviation}</span>
                                <span class="constellation-tooltip glass-card">{tech.name}</span>
                            </div>
                        </div>
                    }
                }) }
                <div class="constellation-center">
                    <span class="constellation-core"></span>
                    <span class="constellation-ping"></span>
                </div>
            </div>
            <style>
                {r#"
    .constellation-section {
        position: relative;
        padding: 8rem 2rem;
        overflow: hidden;
    }
    .constellation-glow {
        position: absolute;
        top: 50%;
        left: 50%;
        width: 600px;
        height: 600px;
        transform: translate(-50%, -50%);
        border-radius: 50%;
        background: rgba(126, 178, 255, 0.05);
        filter: blur(100px);
        pointer-events: none;
    }
    .constellation {
        position: relative;
        max-width: 1200px;
        height: 600px;
        margin: 0 auto;
    }
    .constellation-node {
        position: absolute;
        animation: constellation-enter 0.6s both;
        transition: transform 0.2s ease-out;
    }
    .constellation-badge {
        position: relative;
        width: 5rem;
        height: 5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        cursor: pointer;
        transition: transform 0.6s ease;
    }
    .constellation-badge:hover {
        transform: scale(1.2) rotate(360deg);
    }
    .constellation-abbr {
        font-size: 1.5rem;
        font-weight: 700;
        color: #7EB2FF;
    }
    .constellation-tooltip {
        position: absolute;
        bottom: -2.5rem;
        left: 50%;
        transform: translateX(-50%);
        padding: 0.25rem 0.75rem;
        font-size: 0.75rem;
        white-space: nowrap;
        opacity: 0;
        transition: opacity 0.3s ease;
    }
    .constellation-badge:hover .constellation-tooltip {
        opacity: 1;
    }
    .constellation-center {
        position: absolute;
        top: 50%;
        left: 50%;
        transform: translate(-50%, -50%);
    }
    .constellation-core, .constellation-ping {
        display: block;
        width: 1rem;
        height: 1rem;
        border-radius: 50%;
        background: #7EB2FF;
    }
    .constellation-ping {
        position: absolute;
        inset: 0;
        opacity: 0.5;
        animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
    }
    @keyframes constellation-enter {
        from { opacity: 0; scale: 0; }
        to { opacity: 1; scale: 1; }
    }
    @keyframes ping {
        75%, 100% { transform: scale(2); opacity: 0; }
    }
    @media (max-width: 768px) {
        .constellation {
            height: 500px;
        }
        .constellation-badge {
            width: 4rem;
            height: 4rem;
        }
    }
                "#}
            </style>
        </section>
    }
}
