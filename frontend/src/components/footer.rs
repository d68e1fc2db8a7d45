use yew::prelude::*;
use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <div class="site-footer__brand">
                    <span>{"📅"}</span>
                    <span>{config::BRAND_NAME}</span>
                </div>
                <p class="site-footer__legal">
                    {"© 2025 DoJourney. All rights reserved. Built for the future of service businesses."}
                </p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #0f172a;
                    color: white;
                    padding: 3rem 0;
                }
                .site-footer__inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .site-footer__brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .site-footer__legal {
                    color: #94a3b8;
                }
                "#}
            </style>
        </footer>
    }
}
