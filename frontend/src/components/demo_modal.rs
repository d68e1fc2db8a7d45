use yew::prelude::*;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct DemoModalProps {
    pub on_close: Callback<()>,
}

#[function_component(DemoModal)]
pub fn demo_modal(props: &DemoModalProps) -> Html {
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div class="demo-modal">
            <div class="demo-modal__frame">
                <button class="demo-modal__close" aria-label="Close" {onclick}>
                    {"×"}
                </button>
                <iframe
                    width="100%"
                    height="450"
                    src={config::DEMO_VIDEO_URL}
                    title="YouTube video"
                    frameborder="0"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen={true}
                    class="demo-modal__video"
                />
            </div>
            <style>
                {r#"
                .demo-modal {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.8);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .demo-modal__frame {
                    position: relative;
                    width: 100%;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 1rem;
                }
                .demo-modal__close {
                    position: absolute;
                    top: -1rem;
                    right: -1rem;
                    width: 2.5rem;
                    height: 2.5rem;
                    border: none;
                    border-radius: 50%;
                    background: white;
                    color: black;
                    font-size: 1.5rem;
                    font-weight: 700;
                    cursor: pointer;
                    z-index: 50;
                    transition: all 0.2s ease;
                }
                .demo-modal__close:hover {
                    background: #ef4444;
                    color: white;
                }
                .demo-modal__video {
                    border-radius: 8px;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.25);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_compare_by_close_handler() {
        let on_close = Callback::from(|_| ());
        let props = DemoModalProps { on_close: on_close.clone() };
        assert!(props == DemoModalProps { on_close });
        assert!(props != DemoModalProps { on_close: Callback::from(|_| ()) });
    }

    #[test]
    fn embeds_the_demo_video() {
        assert!(config::DEMO_VIDEO_URL.starts_with("https://www.youtube.com/embed/"));
    }
}
