use yew::prelude::*;

use crate::data::services::{ServicePillar, SERVICE_PILLARS};
use crate::effects::pointer::use_tilt;

const CARD_TILT_DEGREES: f64 = 15.0;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    pillar: &'static ServicePillar,
    index: usize,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let node = use_node_ref();
    let (tilt, onmousemove, onmouseleave) = use_tilt(node.clone(), CARD_TILT_DEGREES);
    let pillar = props.pillar;

    html! {
        <div
            ref={node}
            class="service-card glass-card"
            {onmousemove}
            {onmouseleave}
            style={format!(
                "transform: {}; transition-delay: {:.2}s;",
                tilt.css(),
                props.index as f64 * 0.15
            )}
        >
            <div class="service-icon">
                <i class={pillar.icon}></i>
            </div>
            <div class="service-body">
                <p class="service-subtitle">{pillar.subtitle}</p>
                <h3>{pillar.title}</h3>
                <ul>
                    { for pillar.services.iter().map(|item| html! {
                        <li key={*item}><span class="service-dot"></span>{*item}</li>
                    }) }
                </ul>
            </div>
        </div>
    }
}

#[function_component(ServicePillars)]
pub fn service_pillars() -> Html {
    html! {
        <section class="services-section" id="services">
            <div class="section-header">
                <p class="section-eyebrow">{"Core Expertise"}</p>
                <h2>{"Service "}<span class="text-gradient">{"Pillars"}</span></h2>
            </div>
            <div class="services-grid">
                { for SERVICE_PILLARS.iter().enumerate().map(|(index, pillar)| html! {
                    <ServiceCard key={pillar.title} {pillar} {index} />
                }) }
            </div>
            <style>
                {r#"
    .services-section {
        padding: 8rem 2rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .services-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .service-card {
        padding: 2rem;
        cursor: pointer;
        transform-style: preserve-3d;
        transition: transform 0.1s ease-out, border-color 0.5s ease;
    }
    .service-card:hover {
        border-color: rgba(126, 178, 255, 0.3);
    }
    .service-icon {
        width: 3.5rem;
        height: 3.5rem;
        border-radius: 12px;
        background: rgba(126, 178, 255, 0.1);
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1.5rem;
        font-size: 1.5rem;
        color: #7EB2FF;
        transform: translateZ(30px);
    }
    .service-body {
        transform: translateZ(20px);
    }
    .service-subtitle {
        font-size: 0.75rem;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        color: #7EB2FF;
        margin-bottom: 0.5rem;
    }
    .service-body h3 {
        font-size: 1.5rem;
        margin-bottom: 1rem;
    }
    .service-body ul {
        list-style: none;
        padding: 0;
    }
    .service-body li {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        color: #999;
        font-size: 0.875rem;
        margin-bottom: 0.5rem;
    }
    .service-dot {
        width: 4px;
        height: 4px;
        border-radius: 50%;
        background: #7EB2FF;
    }
    @media (max-width: 768px) {
        .services-grid {
            grid-template-columns: 1fr;
        }
    }
                "#}
            </style>
        </section>
    }
}
