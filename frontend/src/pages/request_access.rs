use yew::prelude::*;
use crate::access::binder::bind;
use crate::access::deep_link::{access_request_url, open_in_new_tab};
use crate::access::form::{Field, FormAction, FormState, SubmissionStatus, BUSINESS_INDUSTRIES};

#[function_component(RequestAccess)]
pub fn request_access() -> Html {
    let state = use_reducer(FormState::default);

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let url = access_request_url(&state.record);
            log::info!(
                "Sending access request via WhatsApp (industry: {})",
                state.record.business_industry
            );
            if let Err(err) = open_in_new_tab(&url) {
                // The hand-off is fire and forget; status still moves to success.
                log::warn!("Could not open WhatsApp link: {}", err);
            }
            state.dispatch(FormAction::Submitted);
        })
    };

    let record = &state.record;
    let dispatcher = state.dispatcher();
    let is_loading = state.status.is_loading();

    html! {
        <section id="request-access" class="request-access">
            <div class="request-access__inner">
                <div class="section-heading">
                    <h2>{"Request Early Access"}</h2>
                    <p>
                        {"Join our exclusive beta program and be among the first to experience the future of salon management."}
                    </p>
                </div>

                <div class="request-card">
                {
                    if let SubmissionStatus::Success(message) = &state.status {
                        html! {
                            <div class="request-success">
                                <div class="request-success__icon">{"✓"}</div>
                                <h3>{"Request Submitted!"}</h3>
                                <p>{message}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <form class="request-form" {onsubmit}>
                                if let SubmissionStatus::Error(message) = &state.status {
                                    <div class="request-error">
                                        <span class="request-error__icon">{"!"}</span>
                                        <p>{message}</p>
                                    </div>
                                }

                                <div class="form-row">
                                    <div class="form-group">
                                        <label for={Field::FullName.name()}>{"Full Name *"}</label>
                                        <input
                                            type="text"
                                            id={Field::FullName.name()}
                                            name={Field::FullName.name()}
                                            required={true}
                                            value={record.full_name.clone()}
                                            oninput={bind::<InputEvent>(dispatcher.clone(), Field::FullName)}
                                            placeholder="Enter your full name"
                                        />
                                    </div>
                                    <div class="form-group">
                                        <label for={Field::Email.name()}>{"Email Address *"}</label>
                                        <input
                                            type="email"
                                            id={Field::Email.name()}
                                            name={Field::Email.name()}
                                            required={true}
                                            value={record.email.clone()}
                                            oninput={bind::<InputEvent>(dispatcher.clone(), Field::Email)}
                                            placeholder="Enter your email"
                                        />
                                    </div>
                                </div>

                                <div class="form-row">
                                    <div class="form-group">
                                        <label for={Field::BusinessIndustry.name()}>{"Business Industry *"}</label>
                                        <select
                                            id={Field::BusinessIndustry.name()}
                                            name={Field::BusinessIndustry.name()}
                                            required={true}
                                            onchange={bind::<Event>(dispatcher.clone(), Field::BusinessIndustry)}
                                        >
                                            <option value="" selected={record.business_industry.is_empty()}>
                                                {"Select your industry"}
                                            </option>
                                            { for BUSINESS_INDUSTRIES.iter().map(|industry| html! {
                                                <option
                                                    key={*industry}
                                                    value={*industry}
                                                    selected={record.business_industry == *industry}
                                                >
                                                    {*industry}
                                                </option>
                                            }) }
                                        </select>
                                    </div>
                                    <div class="form-group">
                                        <label for={Field::CompanyWebsite.name()}>{"Company Website"}</label>
                                        <input
                                            type="url"
                                            id={Field::CompanyWebsite.name()}
                                            name={Field::CompanyWebsite.name()}
                                            value={record.company_website.clone()}
                                            oninput={bind::<InputEvent>(dispatcher.clone(), Field::CompanyWebsite)}
                                            placeholder="https://yourwebsite.com"
                                        />
                                    </div>
                                </div>

                                <div class="form-group">
                                    <label for={Field::InstagramHandle.name()}>{"Instagram Handle"}</label>
                                    <input
                                        type="text"
                                        id={Field::InstagramHandle.name()}
                                        name={Field::InstagramHandle.name()}
                                        value={record.instagram_handle.clone()}
                                        oninput={bind::<InputEvent>(dispatcher.clone(), Field::InstagramHandle)}
                                        placeholder="@yourbusiness"
                                    />
                                </div>

                                <div class="form-group">
                                    <label for={Field::Message.name()}>{"Message"}</label>
                                    <textarea
                                        id={Field::Message.name()}
                                        name={Field::Message.name()}
                                        rows="4"
                                        value={record.message.clone()}
                                        oninput={bind::<InputEvent>(dispatcher.clone(), Field::Message)}
                                        placeholder="Tell us about your business and why you're interested in DoJourney..."
                                    />
                                </div>

                                <button type="submit" class="request-submit" disabled={is_loading}>
                                    { if is_loading { "Submitting..." } else { "Request Access" } }
                                </button>
                            </form>
                        }
                    }
                }
                </div>
            </div>
            <style>
                {r#"
                .request-access {
                    padding: 5rem 0;
                    background: white;
                }
                .request-access__inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                }
                .request-card {
                    background: #f8fafc;
                    border-radius: 1.5rem;
                    padding: 3rem;
                }
                .request-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .form-group label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #334155;
                    margin-bottom: 0.5rem;
                }
                .form-group input,
                .form-group select,
                .form-group textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border: 1px solid #cbd5e1;
                    border-radius: 8px;
                    font: inherit;
                    background: white;
                    transition: border-color 0.2s ease;
                }
                .form-group textarea {
                    resize: none;
                }
                .form-group input:focus,
                .form-group select:focus,
                .form-group textarea:focus {
                    outline: 2px solid #a855f7;
                    border-color: transparent;
                }
                .request-submit {
                    width: 100%;
                    background: #9333ea;
                    color: white;
                    border: none;
                    padding: 1rem 2rem;
                    border-radius: 8px;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(147, 51, 234, 0.2);
                    transition: all 0.2s ease;
                }
                .request-submit:hover {
                    background: #7e22ce;
                    transform: scale(1.02);
                }
                .request-submit:disabled {
                    background: #c084fc;
                    transform: none;
                    cursor: not-allowed;
                }
                .request-error {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: #fef2f2;
                    border: 1px solid #fecaca;
                    border-radius: 8px;
                    padding: 1rem;
                    color: #b91c1c;
                }
                .request-error__icon {
                    font-weight: 700;
                    color: #ef4444;
                }
                .request-success {
                    text-align: center;
                    padding: 3rem 0;
                }
                .request-success__icon {
                    font-size: 4rem;
                    color: #22c55e;
                    margin-bottom: 1.5rem;
                }
                .request-success h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #0f172a;
                    margin-bottom: 1rem;
                }
                .request-success p {
                    color: #475569;
                    font-size: 1.125rem;
                }
                @media (max-width: 768px) {
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                    .request-card {
                        padding: 2rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
