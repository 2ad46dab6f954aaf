use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <p class="section-eyebrow">{"404"}</p>
            <h1>{"This page drifted out of frame."}</h1>
            <Link<Route> to={Route::Home} classes="btn-electric">
                {"Back to the portfolio"}
            </Link<Route>>
            <style>
                {r#"
    .not-found {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        background: #07080c;
        color: #fff;
        text-align: center;
        padding: 2rem;
    }
    .not-found h1 {
        font-size: 2rem;
        margin: 0;
    }
                "#}
            </style>
        </div>
    }
}
