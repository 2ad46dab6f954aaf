use std::time::Duration;

use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::effects::phrase_cycler::{CyclerTimings, PhraseCycler};

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub phrases: Vec<String>,
    #[prop_or_default]
    pub timings: CyclerTimings,
}

fn as_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

// Each tick is scheduled only after the previous one has been applied.
async fn run_cycler(mut cycler: PhraseCycler, text: UseStateHandle<String>) {
    let mut delay = cycler.first_delay();
    loop {
        TimeoutFuture::new(as_millis(delay)).await;
        delay = cycler.tick();
        text.set(cycler.text().to_string());
    }
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let text = use_state(String::new);
    {
        let text = text.clone();
        use_effect_with_deps(
            move |(phrases, timings)| {
                text.set(String::new());
                let handle = match PhraseCycler::new(phrases.clone(), *timings) {
                    Ok(cycler) => {
                        let (handle, registration) = AbortHandle::new_pair();
                        spawn_local(async move {
                            let _ = Abortable::new(run_cycler(cycler, text), registration).await;
                        });
                        Some(handle)
                    }
                    Err(e) => {
                        log::error!("Typewriter disabled: {}", e);
                        None
                    }
                };
                move || {
                    if let Some(handle) = handle {
                        handle.abort();
                    }
                }
            },
            (props.phrases.clone(), props.timings),
        );
    }

    html! {
        <span class="typewriter">
            <span class="typewriter-text text-gradient">{ (*text).clone() }</span>
            <span class="typewriter-caret"></span>
            <style>
                {r#"
    .typewriter {
        display: inline-flex;
        align-items: center;
    }
    .typewriter-caret {
        display: inline-block;
        width: 3px;
        height: 1.2em;
        margin-left: 0.25rem;
        background: #7EB2FF;
        animation: caret-blink 1s steps(2, start) infinite;
    }
    @keyframes caret-blink {
        to { visibility: hidden; }
    }
                "#}
            </style>
        </span>
    }
}
