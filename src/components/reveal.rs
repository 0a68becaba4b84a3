use yew::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use crate::content::{ExtraContent, SectionDescriptor};

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub descriptor: SectionDescriptor,
}

/// Two-column content block that plays a one-shot entrance animation the
/// first time it scrolls into view. The reveal never reverses: once the
/// observer reports an intersection the section stays visible and the
/// observer is disconnected.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let revealed = use_state(|| false);
    let section_ref = use_node_ref();

    {
        let revealed = revealed.clone();
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut subscription: Option<(
                    IntersectionObserver,
                    Closure<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>,
                )> = None;

                if let Some(element) = section_ref.cast::<Element>() {
                    let on_intersect = {
                        let revealed = revealed.clone();
                        Closure::wrap(Box::new(
                            move |entries: Vec<IntersectionObserverEntry>,
                                  observer: IntersectionObserver| {
                                if entries.iter().any(|entry| entry.is_intersecting()) {
                                    revealed.set(true);
                                    // Fire once.
                                    observer.disconnect();
                                }
                            },
                        )
                            as Box<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>)
                    };

                    // The observer reports the initial state as well, so a
                    // section already inside the viewport at mount reveals
                    // without waiting for a scroll event.
                    match IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()) {
                        Ok(observer) => {
                            observer.observe(&element);
                            subscription = Some((observer, on_intersect));
                        }
                        Err(_) => {
                            // No observer support: show the content rather
                            // than leaving it hidden forever.
                            revealed.set(true);
                        }
                    }
                }

                move || {
                    if let Some((observer, _on_intersect)) = subscription {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let descriptor = &props.descriptor;
    let section_class = classes!(
        "reveal-section",
        descriptor.reversed.then_some("reversed"),
        (*revealed).then_some("revealed"),
    );

    let text_column = html! {
        <div class="reveal-text">
            <span class="section-tag">{descriptor.tag}</span>
            <h2>
                {descriptor.title}
                {" "}
                <span class="highlight">{descriptor.title_highlight}</span>
            </h2>
            <p>{descriptor.description}</p>
            {
                match &descriptor.extra {
                    Some(extra) => render_extra(extra),
                    None => html! {},
                }
            }
        </div>
    };

    let visual_column = html! {
        <div class="reveal-visual">
            <div class="reveal-image-container">
                <img src={descriptor.image} alt={descriptor.image_alt} />
            </div>
        </div>
    };

    html! {
        <section id={descriptor.id} class={section_class} ref={section_ref}>
            <div class="reveal-columns">
                {
                    if descriptor.reversed {
                        html! { <>{visual_column}{text_column}</> }
                    } else {
                        html! { <>{text_column}{visual_column}</> }
                    }
                }
            </div>
        </section>
    }
}

fn render_extra(extra: &ExtraContent) -> Html {
    match extra {
        ExtraContent::FeatureGrid(cards) => html! {
            <div class="features-grid">
                {
                    for cards.iter().map(|card| html! {
                        <div class={classes!("feature-card", card.highlight.then_some("tax-highlight"))}>
                            <div class="feature-icon">
                                <i class={card.icon}></i>
                            </div>
                            <h3>{card.title}</h3>
                            <p>{card.description}</p>
                        </div>
                    })
                }
            </div>
        },
        ExtraContent::PrivacyPoints(points) => html! {
            <div class="privacy-points">
                {
                    for points.iter().map(|point| html! {
                        <div class="privacy-point">
                            <div class="privacy-point-icon">
                                <i class={point.icon}></i>
                            </div>
                            <h4>{point.title}</h4>
                            <p>{point.description}</p>
                        </div>
                    })
                }
            </div>
        },
    }
}
