use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use std::{cell::Cell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Storage,
};
use yew::prelude::*;

use crate::content::{
    Project, CONTACT_EMAIL, CONTACT_ENDPOINT, CONTACT_LOCATION, PROJECTS, SKILLS, SOCIAL_LINKS,
};
use crate::sections::{active_section, Reveal, SectionId, HEADER_OFFSET_PX, REVEAL_THRESHOLD};
use crate::theme::{Theme, THEME_PULSE_MS, THEME_STORAGE_KEY};

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn stored_theme() -> Option<Theme> {
    let value = local_storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()?;
    Theme::from_str(&value)
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn resolve_theme() -> Theme {
    stored_theme().unwrap_or_else(|| {
        if system_prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    })
}

fn apply_theme(theme: Theme) {
    let root = window()
        .and_then(|win| win.document())
        .and_then(|document| document.document_element());

    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

#[derive(Clone, PartialEq, Default)]
struct SectionRefs {
    hero: NodeRef,
    about: NodeRef,
    projects: NodeRef,
    contact: NodeRef,
}

impl SectionRefs {
    fn node(&self, id: SectionId) -> &NodeRef {
        match id {
            SectionId::Hero => &self.hero,
            SectionId::About => &self.about,
            SectionId::Projects => &self.projects,
            SectionId::Contact => &self.contact,
        }
    }

    // Sections that are not mounted yet are left out rather than reported
    // with a placeholder offset.
    fn measured_tops(&self) -> Vec<(SectionId, f64)> {
        SectionId::ALL
            .iter()
            .filter_map(|id| {
                self.node(*id)
                    .cast::<HtmlElement>()
                    .map(|element| (*id, f64::from(element.offset_top())))
            })
            .collect()
    }
}

fn scroll_to_section(refs: &SectionRefs, id: SectionId) {
    let Some(element) = refs.node(id).cast::<HtmlElement>() else {
        return;
    };
    let Some(win) = window() else {
        return;
    };

    let target_top = (f64::from(element.offset_top()) - HEADER_OFFSET_PX).max(0.0);
    let options = ScrollToOptions::new();
    options.set_top(target_top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

/// Tracks which section is active for nav highlighting. Scroll events are
/// coalesced to at most one recomputation per animation frame; offsets are
/// re-measured on every recomputation so layout changes stay accounted for.
#[hook]
fn use_active_section(refs: SectionRefs) -> SectionId {
    let active = use_state(|| SectionId::Hero);

    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let last_reported = Rc::new(Cell::new(SectionId::Hero));
            let frame_pending = Rc::new(Cell::new(false));

            let on_frame = {
                let frame_pending = frame_pending.clone();
                let last_reported = last_reported.clone();
                Rc::new(Closure::<dyn FnMut()>::new(move || {
                    frame_pending.set(false);

                    let scroll_y = window()
                        .and_then(|win| win.scroll_y().ok())
                        .unwrap_or(0.0);
                    let next = active_section(scroll_y, &refs.measured_tops());

                    if last_reported.get() != next {
                        last_reported.set(next);
                        active.set(next);
                    }
                }))
            };

            let on_scroll = {
                let frame_pending = frame_pending.clone();
                let on_frame = on_frame.clone();
                Closure::<dyn FnMut()>::new(move || {
                    if frame_pending.get() {
                        return;
                    }

                    let Some(win) = window() else {
                        return;
                    };

                    if win
                        .request_animation_frame((*on_frame).as_ref().unchecked_ref())
                        .is_ok()
                    {
                        frame_pending.set(true);
                    }
                })
            };

            if let Some(win) = window() {
                let _ = win
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }
                drop(on_scroll);
                drop(on_frame);
            }
        });
    }

    *active
}

/// One-shot entrance-animation signal for a section element. The element is
/// unobserved on the first qualifying intersection, so the signal never
/// reverts once it has fired.
#[hook]
fn use_reveal(node: NodeRef) -> bool {
    let reveal = use_state(Reveal::default);

    {
        let reveal = reveal.clone();
        use_effect_with(node, move |node| {
            let mut observer: Option<IntersectionObserver> = None;
            let mut on_intersect: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>> =
                None;

            if let Some(element) = node.cast::<Element>() {
                let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                continue;
                            };

                            if entry.is_intersecting() {
                                let mut next = *reveal;
                                next.mark_seen();
                                reveal.set(next);
                                observer.unobserve(&entry.target());
                            }
                        }
                    },
                );

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

                if let Ok(created) = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    created.observe(&element);
                    observer = Some(created);
                }

                on_intersect = Some(callback);
            }

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(on_intersect);
            }
        });
    }

    reveal.is_seen()
}

fn reveal_class(seen: bool) -> Classes {
    classes!("reveal", seen.then_some("is-revealed"))
}

fn arrow_mark() -> Html {
    html! { <span class="arrow" aria-hidden="true">{"→"}</span> }
}

fn theme_icon(theme: Theme) -> Html {
    match theme {
        Theme::Dark => html! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="20"
                height="20"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                <circle cx="12" cy="12" r="4" />
                <path d="M12 2v2m0 16v2M4.93 4.93l1.41 1.41m11.32 11.32 1.41 1.41M2 12h2m16 0h2M4.93 19.07l1.41-1.41M17.66 6.34l1.41-1.41" />
            </svg>
        },
        Theme::Light => html! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="20"
                height="20"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" />
            </svg>
        },
    }
}

fn menu_icon(open: bool) -> Html {
    let path = if open {
        "M18 6L6 18M6 6l12 12"
    } else {
        "M4 12h16M4 6h16M4 18h16"
    };

    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d={path} />
        </svg>
    }
}

fn nav_button(
    id: SectionId,
    active: SectionId,
    on_navigate: &Callback<SectionId>,
    extra_class: Option<&'static str>,
) -> Html {
    let onclick = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(id))
    };

    html! {
        <button
            type="button"
            class={classes!("nav-link", extra_class, (active == id).then_some("is-active"))}
            aria-current={(active == id).then_some("true")}
            onclick={onclick}
        >
            { id.nav_label() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a class="link" href={props.href.clone()} target="_blank" rel="noopener noreferrer">
            { props.label.clone() }
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct ThemeToggleProps {
    theme: Theme,
    on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let pulsing = use_state(|| false);

    let onclick = {
        let pulsing = pulsing.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| {
            on_toggle.emit(());
            pulsing.set(true);

            let pulsing = pulsing.clone();
            Timeout::new(THEME_PULSE_MS, move || pulsing.set(false)).forget();
        })
    };

    html! {
        <button
            class={classes!("theme-toggle", (*pulsing).then_some("is-pulsing"))}
            type="button"
            aria-label={props.theme.toggle_label()}
            aria-pressed={props.theme.pressed().to_string()}
            onclick={onclick}
        >
            { theme_icon(props.theme) }
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    active: SectionId,
    theme: Theme,
    menu_open: bool,
    on_navigate: Callback<SectionId>,
    on_toggle_theme: Callback<()>,
    on_toggle_menu: Callback<()>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let on_lets_talk = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(SectionId::Contact))
    };

    let on_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };

    html! {
        <header class="site-header">
            <div class="header-inner">
                <a class="brand" href="/">{"Portfolio"}</a>
                <nav class="desktop-nav" aria-label="Primary">
                    { for SectionId::ALL
                        .iter()
                        .map(|id| nav_button(*id, props.active, &props.on_navigate, None)) }
                </nav>
                <div class="header-actions">
                    <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                    <button type="button" class="button button-primary lets-talk" onclick={on_lets_talk}>
                        {"Let's Talk"}
                        { arrow_mark() }
                    </button>
                    <button
                        type="button"
                        class="menu-toggle"
                        aria-label="Toggle navigation menu"
                        aria-expanded={props.menu_open.to_string()}
                        onclick={on_menu}
                    >
                        { menu_icon(props.menu_open) }
                    </button>
                </div>
            </div>
            { props.menu_open.then(|| html! {
                <nav class="mobile-nav" aria-label="Primary">
                    { for SectionId::ALL
                        .iter()
                        .map(|id| nav_button(*id, props.active, &props.on_navigate, Some("mobile"))) }
                </nav>
            }) }
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let project = props.project;

    html! {
        <a
            class={classes!("project-card-link", (*hovered).then_some("is-hovered"))}
            href={project.link}
            target="_blank"
            rel="noopener noreferrer"
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <div class="card project-card">
                <div class="project-media">
                    <img src={project.image} alt={project.title} loading="lazy" />
                    <div class="project-media-overlay"></div>
                </div>
                <div class="project-body">
                    <h3>{ project.title }</h3>
                    <p class="muted">{ project.description }</p>
                    <ul class="tag-list">
                        { for project.tags.iter().map(|tag| html! {
                            <li key={*tag} class="tag">{ *tag }</li>
                        }) }
                    </ul>
                    <span class="project-cta">
                        {"View Project"}
                        { arrow_mark() }
                    </span>
                </div>
            </div>
        </a>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ContactStatus {
    Idle,
    Sending,
    Sent,
    Failed,
}

#[derive(Clone, PartialEq, Serialize)]
struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

async fn deliver_contact_message(message: &ContactMessage) -> bool {
    let Ok(request) = Request::post(CONTACT_ENDPOINT).json(message) else {
        return false;
    };

    match request.send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| ContactStatus::Idle);

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            name.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            email.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_message_input = {
        let message = message.clone();
        Callback::from(move |event: InputEvent| {
            message.set(event.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if *status == ContactStatus::Sending {
                return;
            }

            let payload = ContactMessage {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            status.set(ContactStatus::Sending);

            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let status = status.clone();
            spawn_local(async move {
                if deliver_contact_message(&payload).await {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    status.set(ContactStatus::Sent);
                } else {
                    status.set(ContactStatus::Failed);
                }
            });
        })
    };

    let status_line = match *status {
        ContactStatus::Idle => None,
        ContactStatus::Sending => Some(("form-status", "Sending your message…")),
        ContactStatus::Sent => Some((
            "form-status is-success",
            "Thanks! Your message has been sent.",
        )),
        ContactStatus::Failed => Some((
            "form-status is-error",
            "Something went wrong. Please try again.",
        )),
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <label class="field">
                <span class="field-label">{"Name"}</span>
                <input
                    type="text"
                    name="name"
                    required={true}
                    value={(*name).clone()}
                    oninput={on_name_input}
                />
            </label>
            <label class="field">
                <span class="field-label">{"Email"}</span>
                <input
                    type="email"
                    name="email"
                    required={true}
                    value={(*email).clone()}
                    oninput={on_email_input}
                />
            </label>
            <label class="field">
                <span class="field-label">{"Message"}</span>
                <textarea
                    name="message"
                    rows="6"
                    required={true}
                    value={(*message).clone()}
                    oninput={on_message_input}
                />
            </label>
            <button
                type="submit"
                class="button button-primary"
                disabled={*status == ContactStatus::Sending}
            >
                {"Send Message"}
            </button>
            { for status_line.map(|(class, text)| html! {
                <p class={class} role="status">{ text }</p>
            }) }
        </form>
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(resolve_theme);
    let menu_open = use_state(|| false);

    let hero_ref = use_node_ref();
    let about_ref = use_node_ref();
    let projects_ref = use_node_ref();
    let contact_ref = use_node_ref();

    let refs = SectionRefs {
        hero: hero_ref.clone(),
        about: about_ref.clone(),
        projects: projects_ref.clone(),
        contact: contact_ref.clone(),
    };

    let active = use_active_section(refs.clone());

    let hero_seen = use_reveal(hero_ref.clone());
    let about_seen = use_reveal(about_ref.clone());
    let projects_seen = use_reveal(projects_ref.clone());
    let contact_seen = use_reveal(contact_ref.clone());

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| {
            let next = (*theme).toggled();
            persist_theme(next);
            apply_theme(next);
            theme.set(next);
        })
    };

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |()| menu_open.set(!*menu_open))
    };

    // Navigation always dismisses the mobile overlay, even when the target
    // section is not mounted and the scroll itself is a no-op.
    let on_navigate = {
        let refs = refs.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |id: SectionId| {
            menu_open.set(false);
            scroll_to_section(&refs, id);
        })
    };

    let on_view_work = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(SectionId::Projects))
    };

    let on_contact_me = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(SectionId::Contact))
    };

    html! {
        <div class="page-shell">
            <Header
                active={active}
                theme={*theme}
                menu_open={*menu_open}
                on_navigate={on_navigate.clone()}
                on_toggle_theme={on_toggle_theme}
                on_toggle_menu={on_toggle_menu}
            />

            <main class="page-main">
                <section id="hero" ref={hero_ref} class="section section-hero">
                    <div class={reveal_class(hero_seen)}>
                        <div class="hero-grid">
                            <div class="hero-copy">
                                <span class="badge">{"Full Stack Developer"}</span>
                                <h1>
                                    {"Hi, I'm "}
                                    <span class="accent">{"Jason"}</span>
                                </h1>
                                <p class="lede">
                                    {"I build exceptional digital experiences that are fast, accessible, and visually appealing."}
                                </p>
                                <div class="hero-actions">
                                    <button type="button" class="button button-primary" onclick={on_view_work}>
                                        {"View My Work"}
                                        { arrow_mark() }
                                    </button>
                                    <button type="button" class="button button-outline" onclick={on_contact_me}>
                                        {"Contact Me"}
                                    </button>
                                </div>
                            </div>
                            <div class="hero-portrait">
                                <img src="/images/portrait.svg" alt="Portrait" />
                            </div>
                        </div>
                    </div>
                </section>

                <section id="about" ref={about_ref} class="section">
                    <div class={reveal_class(about_seen)}>
                        <div class="section-heading">
                            <span class="badge">{"About Me"}</span>
                            <h2>{"My Background"}</h2>
                        </div>
                        <div class="about-grid">
                            <div class="about-prose">
                                <p class="muted">
                                    {"I'm a frontend developer with a passion for creating beautiful, functional, and accessible websites. With over 5 years of experience in the industry, I've worked on a variety of projects from small business websites to large-scale web applications."}
                                </p>
                                <p class="muted">
                                    {"My approach combines clean code, thoughtful design, and attention to detail to create exceptional user experiences that help businesses achieve their goals."}
                                </p>
                            </div>
                            <div class="about-skills">
                                <h3>{"My Skills"}</h3>
                                <div class="skills-grid">
                                    { for SKILLS.iter().enumerate().map(|(index, skill)| html! {
                                        <div
                                            key={*skill}
                                            class={classes!("card", "skill-card", reveal_class(about_seen))}
                                            style={format!("animation-delay: {}ms", index * 100)}
                                        >
                                            <p>{ *skill }</p>
                                        </div>
                                    }) }
                                </div>
                            </div>
                        </div>
                    </div>
                </section>

                <section id="projects" ref={projects_ref} class="section">
                    <div class={reveal_class(projects_seen)}>
                        <div class="section-heading">
                            <span class="badge">{"My Work"}</span>
                            <h2>{"Featured Projects"}</h2>
                        </div>
                        <div class="projects-grid">
                            { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                                <div
                                    key={project.title}
                                    class={reveal_class(projects_seen)}
                                    style={format!("animation-delay: {}ms", index * 200)}
                                >
                                    <ProjectCard project={project} />
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="contact" ref={contact_ref} class="section">
                    <div class={reveal_class(contact_seen)}>
                        <div class="section-heading">
                            <span class="badge">{"Get in Touch"}</span>
                            <h2>{"Let's Work Together"}</h2>
                            <p class="muted">
                                {"Have a project in mind? I'd love to hear about it. Send me a message and let's create something amazing."}
                            </p>
                        </div>
                        <div class="contact-grid">
                            <ContactForm />
                            <div class="contact-details">
                                <div>
                                    <h3>{"Email"}</h3>
                                    <p class="muted">{ CONTACT_EMAIL }</p>
                                </div>
                                <div>
                                    <h3>{"Location"}</h3>
                                    <p class="muted">{ CONTACT_LOCATION }</p>
                                </div>
                                <div>
                                    <h3>{"Social"}</h3>
                                    <ul class="social-list">
                                        { for SOCIAL_LINKS.iter().map(|link| html! {
                                            <li key={link.label}>
                                                <ExternalLink href={link.href} label={link.label} />
                                            </li>
                                        }) }
                                    </ul>
                                </div>
                            </div>
                        </div>
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <p class="muted">{"© 2025 Dotsoft. All rights reserved."}</p>
                <nav class="footer-links" aria-label="Legal">
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms of Service"}</a>
                </nav>
            </footer>
        </div>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|win| win.document())
            .and_then(|document| document.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
