use yew::prelude::*;

use crate::components::typewriter::TypewriterText;
use crate::config;
use crate::data::services::TRUST_BADGES;
use crate::effects::local_time::use_local_time;
use crate::effects::phrase_cycler::CyclerTimings;
use crate::effects::pointer::use_pointer_position;
use crate::effects::smooth_scroll::use_smooth_scroll;

const PORTRAIT_PARALLAX: f64 = 40.0;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let pointer = use_pointer_position();
    let local_time = use_local_time(config::DEFAULT_TIMEZONE);
    let scroll_to = use_smooth_scroll();

    let (parallax_x, parallax_y) = pointer.parallax(PORTRAIT_PARALLAX);
    let phrases: Vec<String> = config::HERO_PHRASES.iter().map(|p| p.to_string()).collect();

    let on_start = {
        let scroll_to = scroll_to.clone();
        Callback::from(move |_: MouseEvent| scroll_to.emit("contact"))
    };
    let on_scroll_hint = Callback::from(move |_: MouseEvent| scroll_to.emit("services"));

    html! {
        <section class="hero">
            <div class="hero-grid-pattern"></div>
            <div class="hero-inner">
                <div class="hero-copy">
                    <div class="hero-identity">
                        <h2 class="hero-name">{config::OWNER_NAME}</h2>
                        <p class="hero-origin">{config::OWNER_ORIGIN}</p>
                    </div>
                    <h1 class="hero-title">
                        {"Creative Operations & "}
                        <span class="text-gradient">{"Post-Production"}</span>
                        {" Specialist"}
                    </h1>
                    <div class="hero-typewriter">
                        <TypewriterText phrases={phrases} timings={CyclerTimings::default()} />
                    </div>
                    <p class="hero-subtitle">
                        {"Supporting cinemas, production houses & cultural institutions with structured workflows and cinematic finishing."}
                    </p>
                    <div class="hero-badges">
                        { for TRUST_BADGES.iter().map(|(icon, label)| html! {
                            <div class="hero-badge glass-card" key={*label}>
                                <i class={*icon}></i>
                                <span>{*label}</span>
                            </div>
                        }) }
                    </div>
                    <button class="btn-electric hero-cta" onclick={on_start}>
                        <i class="fas fa-paper-plane"></i>
                        <span>{"Start a Project"}</span>
                    </button>
                </div>
                <div
                    class="hero-portrait"
                    style={format!("transform: translate({:.1}px, {:.1}px);", parallax_x, parallax_y)}
                >
                    <div
                        class="portrait-frame glass-card"
                        style={format!(
                            "transform: perspective(1000px) rotateY({:.2}deg) rotateX({:.2}deg);",
                            parallax_x * 0.1,
                            -parallax_y * 0.1
                        )}
                    >
                        <div class="portrait-image">
                            <img src="/assets/profile-photo.jpg" alt="Creative Director Portrait" />
                        </div>
                        <div class="portrait-status glass-card">
                            <span class="status-pulse"></span>
                            <span class="status-label">{"Remote Ready"}</span>
                            <span class="status-separator">{"|"}</span>
                            <span class="status-time">{local_time}</span>
                        </div>
                    </div>
                    <div class="portrait-glow portrait-glow-top"></div>
                    <div class="portrait-glow portrait-glow-bottom"></div>
                </div>
            </div>
            <button class="scroll-indicator" onclick={on_scroll_hint} aria-label="Scroll down">
                <span class="scroll-dot"></span>
            </button>
            <style>
                {r#"
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        overflow: hidden;
        background: radial-gradient(ellipse at top, #10141f 0%, #07080c 70%);
    }
    .hero-grid-pattern {
        position: absolute;
        inset: 0;
        opacity: 0.02;
        background-image: linear-gradient(#fff 1px, transparent 1px),
                          linear-gradient(90deg, #fff 1px, transparent 1px);
        background-size: 60px 60px;
    }
    .hero-inner {
        position: relative;
        z-index: 2;
        max-width: 1200px;
        margin: 0 auto;
        padding: 5rem 2rem;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 5rem;
        align-items: center;
    }
    .hero-name {
        font-size: 0.875rem;
        letter-spacing: 0.3em;
        color: #999;
        margin-bottom: 0.5rem;
    }
    .hero-origin {
        font-size: 0.75rem;
        letter-spacing: 0.1em;
        color: #666;
        margin-bottom: 2rem;
    }
    .hero-title {
        font-size: 3.5rem;
        line-height: 1.1;
        margin-bottom: 1.5rem;
    }
    .hero-typewriter, .hero-subtitle {
        font-size: 1.4rem;
        font-weight: 300;
        color: #bbb;
        margin-bottom: 2.5rem;
    }
    .hero-subtitle {
        color: #fafafa;
    }
    .hero-badges {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        margin-bottom: 2.5rem;
    }
    .hero-badge {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        font-size: 0.875rem;
        color: #bbb;
    }
    .hero-badge i {
        color: #7EB2FF;
    }
    .hero-portrait {
        display: flex;
        justify-content: flex-end;
        position: relative;
        transition: transform 0.2s ease-out;
    }
    .portrait-frame {
        position: relative;
        padding: 0.75rem;
        transform-style: preserve-3d;
        transition: transform 0.2s ease-out;
    }
    .portrait-image {
        width: 20rem;
        height: 24rem;
        overflow: hidden;
        border-radius: 12px;
    }
    .portrait-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .portrait-status {
        position: absolute;
        bottom: 0;
        right: 1rem;
        height: 34px;
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0 1rem;
        font-size: 0.75rem;
    }
    .status-time {
        color: #7EB2FF;
        font-family: monospace;
    }
    .status-separator {
        color: #666;
    }
    .portrait-glow {
        position: absolute;
        border-radius: 50%;
        filter: blur(48px);
        pointer-events: none;
    }
    .portrait-glow-top {
        top: -2rem;
        right: -2rem;
        width: 8rem;
        height: 8rem;
        background: rgba(126, 178, 255, 0.1);
    }
    .portrait-glow-bottom {
        bottom: -3rem;
        left: -3rem;
        width: 10rem;
        height: 10rem;
        background: rgba(126, 178, 255, 0.05);
    }
    .scroll-indicator {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        width: 1.5rem;
        height: 2.5rem;
        border-radius: 999px;
        border: 2px solid rgba(255, 255, 255, 0.3);
        background: transparent;
        display: flex;
        justify-content: center;
        padding-top: 0.5rem;
        cursor: pointer;
        animation: scroll-bob 1.5s infinite;
    }
    .scroll-dot {
        width: 4px;
        height: 8px;
        border-radius: 999px;
        background: #7EB2FF;
    }
    @keyframes scroll-bob {
        50% { transform: translateX(-50%) translateY(5px); }
    }
    @media (max-width: 968px) {
        .hero-inner {
            grid-template-columns: 1fr;
            gap: 3rem;
        }
        .hero-portrait {
            order: -1;
            justify-content: center;
        }
        .hero-title {
            font-size: 2.5rem;
        }
        .portrait-image {
            width: 16rem;
            height: 20rem;
        }
    }
                "#}
            </style>
        </section>
    }
}
