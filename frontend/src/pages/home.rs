use yew::prelude::*;

use crate::components::contact_section::ContactSection;
use crate::components::hero::HeroSection;
use crate::components::portfolio_grid::PortfolioGrid;
use crate::components::service_pillars::ServicePillars;
use crate::components::tech_constellation::TechConstellation;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <HeroSection />
            <div class="section-divider"></div>
            <ServicePillars />
            <div class="section-divider"></div>
            <PortfolioGrid />
            <div class="section-divider"></div>
            <TechConstellation />
            <div class="section-divider"></div>
            <ContactSection />
            <style>
                {r#"
    html, body {
        margin: 0;
        padding: 0;
        background: #07080c;
        color: #fff;
        font-family: 'Inter', system-ui, -apple-system, sans-serif;
        -webkit-font-smoothing: antialiased;
    }
    * {
        box-sizing: border-box;
    }
    .home {
        position: relative;
        overflow-x: hidden;
    }
    .glass-card {
        background: rgba(255, 255, 255, 0.03);
        border: 1px solid rgba(255, 255, 255, 0.08);
        border-radius: 16px;
        backdrop-filter: blur(20px);
        -webkit-backdrop-filter: blur(20px);
    }
    .text-gradient {
        background: linear-gradient(135deg, #7EB2FF 0%, #c3dcff 50%, #7EB2FF 100%);
        -webkit-background-clip: text;
        background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .section-divider {
        height: 1px;
        max-width: 1200px;
        margin: 0 auto;
        background: linear-gradient(90deg, transparent, rgba(126, 178, 255, 0.3), transparent);
    }
    .section-header {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-eyebrow {
        font-size: 0.875rem;
        text-transform: uppercase;
        letter-spacing: 0.3em;
        color: #7EB2FF;
        margin-bottom: 1rem;
    }
    .section-header h2 {
        font-size: 3rem;
        font-weight: 700;
        margin: 0;
    }
    .btn-electric {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 1rem 2rem;
        border: none;
        border-radius: 12px;
        background: linear-gradient(135deg, #7EB2FF, #5a8fd9);
        color: #07080c;
        font-weight: 600;
        text-decoration: none;
        cursor: pointer;
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .btn-electric:hover {
        transform: translateY(-2px);
        box-shadow: 0 10px 40px rgba(126, 178, 255, 0.3);
    }
    .status-pulse {
        display: inline-block;
        width: 8px;
        height: 8px;
        border-radius: 50%;
        background: #22c55e;
        animation: status-pulse 2s ease-in-out infinite;
    }
    .float-slow {
        animation: float 8s ease-in-out infinite;
    }
    .float-medium {
        animation: float 6s ease-in-out infinite;
    }
    .float-fast {
        animation: float 4s ease-in-out infinite;
    }
    @keyframes status-pulse {
        0%, 100% { box-shadow: 0 0 0 0 rgba(34, 197, 94, 0.6); }
        50% { box-shadow: 0 0 0 6px rgba(34, 197, 94, 0); }
    }
    @keyframes float {
        0%, 100% { translate: 0 0; }
        50% { translate: 0 -12px; }
    }
    @media (max-width: 768px) {
        .section-header h2 {
            font-size: 2.25rem;
        }
    }
                "#}
            </style>
        </main>
    }
}
