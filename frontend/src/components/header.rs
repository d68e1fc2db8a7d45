use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::config;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="site-header">
            <div class="site-header__inner">
                <Link<Route> to={Route::Home} classes="brand">
                    <span class="brand__icon">{"📅"}</span>
                    <span class="brand__name">{config::BRAND_NAME}</span>
                </Link<Route>>
                <nav class="site-nav">
                    <a href="#features" class="site-nav__link">{"Features"}</a>
                    <a href="#about" class="site-nav__link">{"About"}</a>
                    <a href="#request-access" class="site-nav__cta">{"Request Access"}</a>
                </nav>
            </div>
            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #e2e8f0;
                }
                .site-header__inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                }
                .brand__icon {
                    font-size: 1.75rem;
                }
                .brand__name {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #0f172a;
                }
                .site-nav {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .site-nav__link {
                    color: #475569;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .site-nav__link:hover {
                    color: #9333ea;
                }
                .site-nav__cta {
                    background: #9333ea;
                    color: white;
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }
                .site-nav__cta:hover {
                    background: #7e22ce;
                }
                @media (max-width: 768px) {
                    .site-nav {
                        display: none;
                    }
                }
                "#}
            </style>
        </header>
    }
}
