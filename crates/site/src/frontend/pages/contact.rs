use leptos::*;

use gajanand_contact::{
    dispatch, ContactDetails, ContactForm, FieldKind, FieldSpec, FormCommand, SubmissionPhase,
    FIELDS,
};
use gajanand_core::StateMachine;

use crate::content::contact;
use crate::frontend::app::use_config;
use crate::frontend::browser::BrowserDispatcher;

fn run(form: RwSignal<ContactForm>, command: FormCommand) {
    form.update(|f| {
        if let Err(err) = f.execute(&command) {
            tracing::warn!(error = %err, "contact form command rejected");
        }
    });
}

#[component]
fn FormField(spec: &'static FieldSpec, form: RwSignal<ContactForm>) -> impl IntoView {
    let field = spec.field;
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: ev::Event| {
        run(
            form,
            FormCommand::Edit {
                field,
                value: event_target_value(&ev),
            },
        )
    };
    let has_error = move || form.with(|f| f.error(field).is_some());

    let control = match spec.kind {
        FieldKind::TextArea { rows } => view! {
            <textarea
                id=field.as_str()
                name=field.as_str()
                rows=rows
                placeholder=spec.placeholder
                class="input"
                class:invalid=has_error
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_view(),
        kind => view! {
            <input
                type=kind.input_type().unwrap_or("text")
                id=field.as_str()
                name=field.as_str()
                placeholder=spec.placeholder
                class="input"
                class:invalid=has_error
                prop:value=value
                on:input=on_input
            />
        }
        .into_view(),
    };

    view! {
        <div class="form-group">
            <label for=field.as_str()>{spec.label}" *"</label>
            {control}
            {move || {
                form.with(|f| f.error(field))
                    .map(|err| view! { <p class="field-error">{err.to_string()}</p> })
            }}
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = use_config();
    let compose = config.compose.clone();
    let form = create_rw_signal(ContactForm::new(config.compose));
    let details = ContactDetails::STANDARD;

    let phase = create_memo(move |_| form.with(ContactForm::phase));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(ContactForm::is_submitting) {
            return;
        }

        run(form, FormCommand::Submit);
        let Some(link) = form.with_untracked(|f| f.pending_link().cloned()) else {
            tracing::debug!(
                errors = form.with_untracked(|f| f.errors().len()),
                "contact form rejected by validation"
            );
            return;
        };

        match dispatch(&link, &BrowserDispatcher) {
            Ok(route) => {
                tracing::info!(?route, "contact inquiry handed to mail client");
                set_timeout(
                    move || run(form, FormCommand::Complete { route }),
                    route.settle_delay(&compose),
                );
            }
            Err(err) => {
                tracing::error!(error = %err, "no compose route could be opened");
                run(form, FormCommand::Fail { reason: err.to_string() });
            }
        }
    };

    view! {
        <section class="page-header">
            <div class="container">
                <h1>{contact::TITLE}</h1>
                <p>{contact::SUBTITLE}</p>
            </div>
        </section>

        <section class="container contact-grid">
            <div class="contact-details">
                <h2>{contact::CHANNELS_TITLE}</h2>
                <p>{contact::CHANNELS}</p>

                <div class="detail">
                    <h3>"Email"</h3>
                    <a href=details.mailto_href()>{details.email}</a>
                </div>
                <div class="detail">
                    <h3>"Phone"</h3>
                    <a href=details.tel_href().unwrap_or_default()>{details.phones_display()}</a>
                </div>
                <div class="detail">
                    <h3>"Address"</h3>
                    {details
                        .addresses
                        .iter()
                        .map(|lines| {
                            view! {
                                <address>
                                    {lines.iter().map(|line| view! { <span>{*line}</span><br/> }).collect_view()}
                                </address>
                            }
                        })
                        .collect_view()}
                    <p>{details.region}</p>
                </div>
            </div>

            <form class="contact-form" novalidate=true on:submit=on_submit>
                <h2>{contact::FORM_TITLE}</h2>

                <Show when=move || phase.get() == SubmissionPhase::Success>
                    <div class="banner success">{contact::SUCCESS}</div>
                </Show>
                <Show when=move || phase.get() == SubmissionPhase::Error>
                    <div class="banner error">{contact::ERROR}</div>
                </Show>

                {FIELDS.iter().map(|spec| view! { <FormField spec=spec form=form/> }).collect_view()}

                <button
                    type="submit"
                    class="button primary"
                    disabled=move || phase.get() == SubmissionPhase::Submitting
                >
                    {move || {
                        if phase.get() == SubmissionPhase::Submitting {
                            contact::SUBMITTING
                        } else {
                            contact::SUBMIT
                        }
                    }}
                </button>
            </form>
        </section>
    }
}
