use leptos::{ev::SubmitEvent, prelude::*};
use leptos_meta::Title;

use crate::{
    contact::{ContactError, ContactField, ContactForm},
    content::CATALOG,
    reveal::{Motion, RevealSpec},
};

use super::{
    reveal::{RevealGroup, RevealItem},
    sections::PageHeader,
    toast::use_toasts,
};

const FORM_REVEAL: RevealSpec = RevealSpec::cards(0.8).with_motion(Motion::fade_left(50.0));
const INFO_REVEAL: RevealSpec = RevealSpec::cards(0.8).with_stagger(150);

const WORKING_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday:", "9:00 AM - 6:00 PM EST"),
    ("Saturday:", "10:00 AM - 4:00 PM EST"),
    ("Sunday:", "Closed"),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <PageHeader
            title="Get in"
            highlight="Touch"
            subtitle="Have a project in mind or want to discuss opportunities? Feel free to reach out and I'll get back to you soon."
        />
        <section class="container mx-auto px-4 py-12 grid lg:grid-cols-2 gap-12">
            <RevealGroup spec=FORM_REVEAL>
                <RevealItem class="glass rounded-2xl p-8">
                    <h2 class="text-2xl font-bold mb-6">"Send a Message"</h2>
                    <MessageForm />
                </RevealItem>
            </RevealGroup>
            <RevealGroup spec=INFO_REVEAL class="space-y-6">
                <RevealItem>
                    <h2 class="text-2xl font-bold mb-6">"Contact Information"</h2>
                </RevealItem>
                {CATALOG
                    .site
                    .contact_channels
                    .iter()
                    .enumerate()
                    .map(|(i, channel)| {
                        view! {
                            <RevealItem index=i + 1 class="card p-5">
                                <h3 class="font-semibold mb-1">{channel.title.clone()}</h3>
                                <a
                                    href=channel.link.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-muted-foreground hover:text-primary"
                                >
                                    {channel.value.clone()}
                                </a>
                            </RevealItem>
                        }
                    })
                    .collect_view()}
                <RevealItem index=5 class="glass rounded-2xl p-6">
                    <h3 class="text-xl font-semibold mb-2">"Working Hours"</h3>
                    <p class="text-muted-foreground mb-4">
                        "I'm available for projects and consultations during the following hours:"
                    </p>
                    <dl class="grid grid-cols-2 gap-2 text-sm">
                        {WORKING_HOURS
                            .iter()
                            .map(|(day, hours)| {
                                view! {
                                    <dt>{*day}</dt>
                                    <dd class="text-muted-foreground">{*hours}</dd>
                                }
                            })
                            .collect_view()}
                    </dl>
                </RevealItem>
            </RevealGroup>
        </section>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let toasts = use_toasts();
    let form = RwSignal::new(ContactForm::default());
    let (error, set_error) = signal(None::<ContactError>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(ContactForm::submit) {
            Ok(()) => {
                set_error.set(None);
                form.set(ContactForm::default());
                toasts.success(
                    "Message Sent!",
                    "Thank you for your message. I'll get back to you soon.",
                );
            }
            Err(e) => {
                log::debug!("contact: rejected submission: {e}");
                set_error.set(Some(e));
            }
        }
    };

    view! {
        <form class="space-y-5" novalidate=true on:submit=on_submit>
            <Field label="Name" field=ContactField::Name placeholder="Your name" form />
            <Field
                label="Email"
                field=ContactField::Email
                kind="email"
                placeholder="Your email address"
                form
            />
            <Field
                label="Subject"
                field=ContactField::Subject
                placeholder="Message subject"
                form
            />
            <div>
                <label for="message" class="block text-sm font-medium mb-2">
                    "Message"
                </label>
                <textarea
                    id="message"
                    name="message"
                    rows=5
                    required=true
                    placeholder="Your message"
                    class="input w-full"
                    prop:value=move || form.with(|f| ContactField::Message.value(f).to_string())
                    on:input=move |ev| {
                        form.update(|f| *ContactField::Message.value_mut(f) = event_target_value(&ev))
                    }
                ></textarea>
            </div>
            {move || {
                error
                    .get()
                    .map(|e| view! { <p class="text-sm text-destructive" role="alert">{e.to_string()}</p> })
            }}
            <button type="submit" class="btn btn-primary btn-lg w-full">
                "Send Message"
            </button>
        </form>
    }
}

#[component]
fn Field(
    label: &'static str,
    field: ContactField,
    #[prop(default = "text")] kind: &'static str,
    placeholder: &'static str,
    form: RwSignal<ContactForm>,
) -> impl IntoView {
    let id = field.name();
    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-2">
                {label}
            </label>
            <input
                id=id
                name=id
                type=kind
                required=true
                placeholder=placeholder
                class="input w-full"
                prop:value=move || form.with(|f| field.value(f).to_string())
                on:input=move |ev| form.update(|f| *field.value_mut(f) = event_target_value(&ev))
            />
        </div>
    }
}
