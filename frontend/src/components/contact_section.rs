use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::draft::{ContactField, ORGANIZATION_OPTIONS};
use crate::contact::form::{ContactSession, SubmitStatus, SUCCESS_MESSAGE};
use crate::contact::transport::HttpContactTransport;
use crate::error::SubmitRejected;

const SOCIAL_LINKS: [(&str, &str); 2] = [("fab fa-linkedin", "LinkedIn"), ("fab fa-vimeo-v", "Vimeo")];

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let redraw = use_force_update();
    let session = use_state(move || Rc::new(ContactSession::new(move || redraw.force_update())));
    let session: Rc<ContactSession> = (*session).clone();

    // Late answers after unmount are dropped
    {
        let session = session.clone();
        use_effect_with_deps(move |_| move || session.detach(), ());
    }

    let onsubmit = {
        let session = session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let session = session.clone();
            spawn_local(async move {
                let transport = HttpContactTransport::default();
                match session.submit(&transport).await {
                    Ok(outcome) => log::debug!("Contact submission finished: {:?}", outcome),
                    Err(SubmitRejected::AlreadySending) => {}
                    Err(rejected) => log::warn!("Contact submission rejected: {}", rejected),
                }
            });
        })
    };

    let on_input = |field: ContactField| {
        let session = session.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            session.update(field, input.value());
        })
    };
    let on_select = {
        let session = session.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            session.update(ContactField::Organization, select.value());
        })
    };
    let on_message = {
        let session = session.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            session.update(ContactField::Message, area.value());
        })
    };

    let form = session.form();
    let draft = form.draft().clone();
    let status = form.status().clone();
    drop(form);
    let sending = status == SubmitStatus::Sending;

    html! {
        <section class="contact-section" id="contact">
            <div class="contact-glow contact-glow-left"></div>
            <div class="contact-glow contact-glow-right"></div>
            <div class="contact-inner">
                <div class="section-header">
                    <p class="section-eyebrow">{"Let's Connect"}</p>
                    <h2>{"Initiate "}<span class="text-gradient">{"Collaboration"}</span></h2>
                    <p class="contact-lead">
                        {"Ready to elevate your production workflow? Let's discuss how we can bring your creative vision to life."}
                    </p>
                </div>
                <form class="contact-form glass-card" {onsubmit}>
                    <div class="contact-row">
                        <div class="contact-field">
                            <label for="contact-name">{ContactField::Name.label()}</label>
                            <input
                                id="contact-name"
                                type="text"
                                name="name"
                                placeholder="John Doe"
                                class="glass-input"
                                value={draft.name.clone()}
                                oninput={on_input(ContactField::Name)}
                                required=true
                            />
                        </div>
                        <div class="contact-field">
                            <label for="contact-email">{ContactField::Email.label()}</label>
                            <input
                                id="contact-email"
                                type="email"
                                name="email"
                                placeholder="john@email.com"
                                class="glass-input"
                                value={draft.email.clone()}
                                oninput={on_input(ContactField::Email)}
                                required=true
                            />
                        </div>
                        <div class="contact-field">
                            <label for="contact-organization">{ContactField::Organization.label()}</label>
                            <select
                                id="contact-organization"
                                name="organization"
                                class="glass-input"
                                onchange={on_select}
                                required=true
                            >
                                <option value="" selected={draft.organization.is_empty()}>{"Select type..."}</option>
                                { for ORGANIZATION_OPTIONS.iter().map(|(value, label)| html! {
                                    <option key={*value} value={*value} selected={draft.organization == *value}>{*label}</option>
                                }) }
                            </select>
                        </div>
                    </div>
                    <div class="contact-field">
                        <label for="contact-project-type">{ContactField::ProjectType.label()}</label>
                        <input
                            id="contact-project-type"
                            type="text"
                            name="projectType"
                            placeholder="e.g., Documentary Post-Production, Archive Digitization..."
                            class="glass-input"
                            value={draft.project_type.clone()}
                            oninput={on_input(ContactField::ProjectType)}
                            required=true
                        />
                    </div>
                    <div class="contact-field">
                        <label for="contact-message">{ContactField::Message.label()}</label>
                        <textarea
                            id="contact-message"
                            name="message"
                            rows="4"
                            placeholder="Tell me about your project and how I can help..."
                            class="glass-input"
                            value={draft.message.clone()}
                            oninput={on_message}
                            required=true
                        />
                    </div>
                    <button type="submit" class="btn-electric contact-submit" disabled={sending}>
                        <i class="fas fa-paper-plane"></i>
                        <span>{if sending { "Sending..." } else { "Send Message" }}</span>
                    </button>
                    {
                        match &status {
                            SubmitStatus::Sent => html! {
                                <p class="contact-feedback contact-success">{SUCCESS_MESSAGE}</p>
                            },
                            SubmitStatus::Failed(message) => html! {
                                <p class="contact-feedback contact-error">{message.clone()}</p>
                            },
                            SubmitStatus::Idle | SubmitStatus::Sending => html! {},
                        }
                    }
                </form>
                <div class="contact-links">
                    <div class="contact-socials">
                        { for SOCIAL_LINKS.iter().map(|(icon, label)| html! {
                            <a key={*label} href="#" class="contact-social glass-card" aria-label={*label}>
                                <i class={*icon}></i>
                            </a>
                        }) }
                    </div>
                    <a href="#" class="contact-call glass-card">
                        <i class="fas fa-calendar"></i>
                        <span>{"Schedule a Call"}</span>
                        <i class="fas fa-arrow-right"></i>
                    </a>
                </div>
            </div>
            <footer class="site-footer">
                <p>{"© 2024 Abdellah Gram. All rights reserved."}</p>
                <p class="footer-status"><span class="status-pulse"></span>{"Available for remote collaboration"}</p>
            </footer>
            <style>
                {r#"
    .contact-section {
        position: relative;
        padding: 8rem 2rem 0;
    }
    .contact-glow {
        position: absolute;
        border-radius: 50%;
        pointer-events: none;
    }
    .contact-glow-left {
        top: 0;
        left: 25%;
        width: 500px;
        height: 500px;
        background: rgba(126, 178, 255, 0.05);
        filter: blur(120px);
    }
    .contact-glow-right {
        bottom: 0;
        right: 25%;
        width: 400px;
        height: 400px;
        background: rgba(126, 178, 255, 0.03);
        filter: blur(100px);
    }
    .contact-inner {
        position: relative;
        max-width: 56rem;
        margin: 0 auto;
    }
    .contact-lead {
        color: #999;
        max-width: 36rem;
        margin: 1.5rem auto 0;
    }
    .contact-form {
        padding: 3rem;
    }
    .contact-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.5rem;
    }
    .contact-field {
        margin-bottom: 1.5rem;
    }
    .contact-field label {
        display: block;
        font-size: 0.875rem;
        color: #999;
        margin-bottom: 0.5rem;
    }
    .glass-input {
        width: 100%;
        padding: 0.75rem 1rem;
        border-radius: 10px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.04);
        color: #fff;
        font: inherit;
    }
    .glass-input:focus {
        outline: none;
        border-color: rgba(126, 178, 255, 0.5);
    }
    textarea.glass-input {
        resize: none;
    }
    .contact-submit:disabled {
        opacity: 0.6;
        cursor: not-allowed;
    }
    .contact-feedback {
        margin-top: 1rem;
        font-size: 0.875rem;
    }
    .contact-success {
        color: #22c55e;
    }
    .contact-error {
        color: #ef4444;
    }
    .contact-links {
        margin-top: 4rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 2rem;
    }
    .contact-socials {
        display: flex;
        gap: 1rem;
    }
    .contact-social {
        width: 3rem;
        height: 3rem;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #999;
    }
    .contact-social:hover, .contact-call:hover {
        color: #7EB2FF;
    }
    .contact-call {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        padding: 0.75rem 1.5rem;
        color: #fff;
        text-decoration: none;
    }
    .site-footer {
        margin-top: 6rem;
        padding: 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.08);
        display: flex;
        justify-content: space-between;
        font-size: 0.875rem;
        color: #777;
    }
    .footer-status {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    @media (max-width: 768px) {
        .contact-row {
            grid-template-columns: 1fr;
        }
        .contact-form {
            padding: 2rem;
        }
        .contact-links, .site-footer {
            flex-direction: column;
        }
    }
                "#}
            </style>
        </section>
    }
}
