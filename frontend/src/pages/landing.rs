use std::rc::Rc;
use yew::prelude::*;
use crate::components::demo_modal::DemoModal;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::modal::{KeyListener, ModalController};
use crate::pages::request_access::RequestAccess;

struct FeatureCard {
    icon: &'static str,
    tint: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [FeatureCard; 3] = [
    FeatureCard {
        icon: "📅",
        tint: "feature-card__icon--purple",
        title: "Smart Scheduling",
        description: "AI-powered scheduling that prevents double bookings and optimizes your calendar for maximum efficiency.",
    },
    FeatureCard {
        icon: "👥",
        tint: "feature-card__icon--teal",
        title: "Client Management",
        description: "Keep detailed client profiles, service history, and preferences all in one organized place.",
    },
    FeatureCard {
        icon: "⏰",
        tint: "feature-card__icon--orange",
        title: "Automated Reminders",
        description: "Reduce no-shows with intelligent SMS and email reminders sent automatically to your clients.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let show_video = use_state(|| false);
    // Owns the key listener; dropped with the component, which detaches it.
    let modal = use_mut_ref(ModalController::<KeyListener>::default);

    {
        let visible = *show_video;
        let show_video = show_video.clone();
        let modal = modal.clone();
        use_effect_with_deps(
            move |visible| {
                if *visible {
                    // The listener lives inside the controller, so it only keeps a weak handle.
                    let controller = Rc::downgrade(&modal);
                    modal.borrow_mut().show(|| {
                        let on_key = Callback::from(move |key: String| {
                            let Some(controller) = controller.upgrade() else {
                                return;
                            };
                            let closed = controller.borrow_mut().on_key(&key);
                            if closed {
                                log::debug!("Demo video closed with {}", key);
                                show_video.set(false);
                            }
                        });
                        match KeyListener::attach(on_key) {
                            Ok(listener) => Some(listener),
                            Err(err) => {
                                log::warn!("Demo video has no Escape shortcut: {}", err);
                                None
                            }
                        }
                    });
                    log::debug!(
                        "Demo video opened (Escape shortcut: {})",
                        modal.borrow().holds_guard()
                    );
                } else if modal.borrow().is_visible() {
                    log::debug!("Closing demo video");
                    modal.borrow_mut().hide();
                }
                || ()
            },
            visible,
        );
    }

    let open_video = {
        let show_video = show_video.clone();
        Callback::from(move |_: MouseEvent| show_video.set(true))
    };

    let close_video = {
        let show_video = show_video.clone();
        Callback::from(move |_| show_video.set(false))
    };

    html! {
        <div class="landing">
            <Header />

            <section class="hero">
                <div class="hero__glow"></div>
                <div class="hero__content">
                    <h1>
                        {"Smart Scheduling for"}
                        <span class="hero__accent">{" Modern Salons"}</span>
                    </h1>
                    <p class="hero__lead">
                        {"Transform your service business with intelligent scheduling, automated reminders, and seamless client management. Join forward-thinking salons already using DoJourney."}
                    </p>
                    <div class="hero__actions">
                        <a href="#request-access" class="hero__primary">{"Request Early Access"}</a>
                        <button class="hero__secondary" onclick={open_video}>{"Watch Demo"}</button>
                        if *show_video {
                            <DemoModal on_close={close_video} />
                        }
                    </div>
                </div>
            </section>

            <section id="features" class="features">
                <div class="section-heading">
                    <h2>{"Everything you need to manage your business"}</h2>
                    <p>
                        {"From appointment booking to client management, DoJourney streamlines every aspect of your service business."}
                    </p>
                </div>
                <div class="features__grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card" key={feature.title}>
                            <div class={classes!("feature-card__icon", feature.tint)}>{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <RequestAccess />

            <Footer />

            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .landing {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #f8fafc, #f1f5f9);
                    color: #0f172a;
                }
                .hero {
                    position: relative;
                    padding: 8rem 2rem;
                    overflow: hidden;
                }
                .hero__glow {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(90deg, rgba(147, 51, 234, 0.1), rgba(13, 148, 136, 0.1));
                }
                .hero__content {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .hero h1 {
                    font-size: 3.75rem;
                    font-weight: 700;
                    line-height: 1.2;
                    margin-bottom: 1.5rem;
                }
                .hero__accent {
                    background: linear-gradient(90deg, #9333ea, #0d9488);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero__lead {
                    font-size: 1.25rem;
                    color: #475569;
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                    line-height: 1.6;
                }
                .hero__actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .hero__primary {
                    background: #9333ea;
                    color: white;
                    padding: 1rem 2rem;
                    border-radius: 12px;
                    font-size: 1.125rem;
                    font-weight: 600;
                    text-decoration: none;
                    box-shadow: 0 10px 15px rgba(147, 51, 234, 0.25);
                    transition: all 0.3s ease;
                }
                .hero__primary:hover {
                    background: #7e22ce;
                    transform: scale(1.05);
                }
                .hero__secondary {
                    background: transparent;
                    border: 2px solid #cbd5e1;
                    color: #334155;
                    padding: 1rem 2rem;
                    border-radius: 12px;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .hero__secondary:hover {
                    border-color: #9333ea;
                    color: #9333ea;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .section-heading p {
                    font-size: 1.25rem;
                    color: #475569;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .features {
                    padding: 5rem 2rem;
                    background: #f8fafc;
                }
                .features__grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .feature-card {
                    background: white;
                    padding: 2rem;
                    border-radius: 1rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.3s ease;
                }
                .feature-card:hover {
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .feature-card__icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 8px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .feature-card__icon--purple { background: #f3e8ff; }
                .feature-card__icon--teal { background: #ccfbf1; }
                .feature-card__icon--orange { background: #ffedd5; }
                .feature-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .feature-card p {
                    color: #475569;
                }
                @media (max-width: 768px) {
                    .hero {
                        padding: 5rem 1rem;
                    }
                    .hero h1 {
                        font-size: 2.25rem;
                    }
                    .features__grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
