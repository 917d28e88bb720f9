use yew::prelude::*;
use stylist::yew::styled_component;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use gloo_timers::callback::Interval;
use log::info;

use crate::content::PRODUCT_STEPS;
use crate::motion::scroll_events::ScrollSubscription;
use crate::motion::spring::Spring;
use crate::motion::stepper::StepTimeline;

// Fill-bar smoothing. The active step itself always switches instantly.
const FILL_STIFFNESS: f64 = 14.0;
const SPRING_TICK_MS: u32 = 30;

/// Page-absolute measurements of the tall wrapper, or `None` while the DOM
/// isn't ready to be measured (in which case the caller skips the update and
/// retries on the next event).
fn measure(wrapper: &HtmlElement) -> Option<(f64, f64, f64, f64)> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let rect = wrapper.get_bounding_client_rect();
    Some((scroll_y, rect.top() + scroll_y, viewport, rect.height()))
}

#[styled_component(ProductStepper)]
pub fn product_stepper() -> Html {
    let wrapper_ref = use_node_ref();
    let active = use_state_eq(|| 0usize);
    let fill = use_state_eq(|| 0.0f64);
    let spring = use_mut_ref(|| Spring::new(0.0, FILL_STIFFNESS));

    // Scroll/resize drive the step index and the spring's target. The first
    // call runs at mount with the spring snapped, so a page restored
    // mid-scroll renders the right step immediately instead of animating up
    // from zero.
    {
        let wrapper_ref = wrapper_ref.clone();
        let active = active.clone();
        let fill = fill.clone();
        let spring = spring.clone();
        use_effect_with_deps(
            move |_| {
                let timeline = StepTimeline::new(PRODUCT_STEPS.len());
                let update = {
                    let wrapper_ref = wrapper_ref.clone();
                    let spring = spring.clone();
                    move || {
                        let Some(wrapper) = wrapper_ref.cast::<HtmlElement>() else {
                            return;
                        };
                        let Some((scroll_y, top, viewport, height)) = measure(&wrapper) else {
                            return;
                        };
                        let sample = timeline.sample(scroll_y, top, viewport, height);
                        active.set(sample.active_index);
                        spring.borrow_mut().set_target(sample.fill_progress);
                    }
                };

                update();
                {
                    let mut spring = spring.borrow_mut();
                    spring.snap_to_target();
                    fill.set(spring.value());
                }

                let subscription = ScrollSubscription::subscribe(update);
                move || drop(subscription)
            },
            (),
        );
    }

    // A small repeating timer advances the spring toward its target; writes
    // stop as soon as it settles, so idle frames don't re-render anything.
    {
        let fill = fill.clone();
        let spring = spring.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(SPRING_TICK_MS, move || {
                    let value = {
                        let mut spring = spring.borrow_mut();
                        if spring.settled() {
                            return;
                        }
                        spring.step(f64::from(SPRING_TICK_MS) / 1_000.0)
                    };
                    fill.set(value);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let jump_to = {
        let wrapper_ref = wrapper_ref.clone();
        Callback::from(move |index: usize| {
            let Some(wrapper) = wrapper_ref.cast::<HtmlElement>() else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some((_, top, viewport, height)) = measure(&wrapper) else {
                return;
            };
            info!("stepper jump to step {}", index + 1);
            let timeline = StepTimeline::new(PRODUCT_STEPS.len());
            let target = timeline.jump_target(index, top, viewport, height);
            let options = ScrollToOptions::new();
            options.set_top(target);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })
    };

    let style = css!(
        r#"
        position: relative;

        .stepper-panel {
            position: sticky;
            top: 0;
            height: 100vh;
            display: flex;
            align-items: center;
            overflow: hidden;
        }

        .stepper-grid {
            width: min(1080px, 92%);
            margin: 0 auto;
            display: grid;
            grid-template-columns: minmax(0, 5fr) minmax(0, 6fr);
            gap: 4rem;
            align-items: center;
        }

        .stepper-heading {
            grid-column: 1 / -1;
            margin: 0 0 1rem;
            font-size: 2.2rem;
            color: #f4f1ea;
        }

        .step-list {
            display: flex;
            flex-direction: column;
            gap: 1.1rem;
        }

        .step-row {
            display: grid;
            grid-template-columns: auto 1fr auto;
            gap: 1.2rem;
            align-items: center;
            padding: 1.1rem 1.3rem;
            background: rgba(255, 255, 255, 0.03);
            border: 1px solid rgba(255, 255, 255, 0.07);
            border-radius: 18px;
            text-align: left;
            cursor: pointer;
            transition: background 0.3s ease, border-color 0.3s ease, opacity 0.3s ease;
            opacity: 0.55;
        }

        .step-row:hover {
            background: rgba(255, 255, 255, 0.06);
        }

        .step-row.active {
            opacity: 1;
            background: rgba(255, 255, 255, 0.07);
        }

        .step-number {
            font-size: 0.85rem;
            letter-spacing: 0.12em;
            color: #9a9688;
        }

        .step-name {
            display: block;
            font-size: 1.15rem;
            font-weight: 600;
            color: #f4f1ea;
        }

        .step-copy {
            display: block;
            margin-top: 0.2rem;
            font-size: 0.9rem;
            line-height: 1.45;
            color: #9a9688;
        }

        .step-price {
            font-size: 1rem;
            color: #f4f1ea;
        }

        .fill-track {
            grid-column: 1 / -1;
            height: 3px;
            border-radius: 2px;
            background: rgba(255, 255, 255, 0.08);
            overflow: hidden;
        }

        .fill-bar {
            height: 100%;
            border-radius: 2px;
        }

        .step-visual {
            position: relative;
            aspect-ratio: 4 / 5;
            max-height: 72vh;
            border-radius: 28px;
            overflow: hidden;
            transition: box-shadow 0.4s ease, border-color 0.4s ease;
        }

        .step-visual img {
            position: absolute;
            inset: 0;
            width: 100%;
            height: 100%;
            object-fit: cover;
            opacity: 0;
            transition: opacity 0.45s ease;
        }

        .step-visual img.visible {
            opacity: 1;
        }

        .visual-caption {
            position: absolute;
            left: 1.4rem;
            right: 1.4rem;
            bottom: 1.2rem;
            display: flex;
            justify-content: space-between;
            align-items: center;
            gap: 1rem;
        }

        .visual-caption span {
            color: #f4f1ea;
            font-size: 1.05rem;
            font-weight: 600;
            text-shadow: 0 2px 14px rgba(0, 0, 0, 0.55);
        }

        .step-cta {
            padding: 0.65rem 1.3rem;
            border-radius: 999px;
            color: #101311;
            font-size: 0.9rem;
            font-weight: 600;
            text-decoration: none;
            white-space: nowrap;
        }

        @media (max-width: 860px) {
            .stepper-grid {
                grid-template-columns: 1fr;
                gap: 1.6rem;
            }

            .step-visual {
                order: -1;
                max-height: 44vh;
            }

            .stepper-heading {
                font-size: 1.6rem;
            }
        }
        "#
    );

    let step = &PRODUCT_STEPS[*active];
    let fill_percent = (*fill).clamp(0.0, 1.0) * 100.0;

    html! {
        <section
            id="products"
            class={classes!(style, "product-stepper")}
            ref={wrapper_ref}
            style={format!("height: {}vh;", (PRODUCT_STEPS.len() + 1) * 100)}
        >
            <div class="stepper-panel">
                <div class="stepper-grid">
                    <h2 class="stepper-heading">{"One ritual, three moments"}</h2>
                    <div class="step-list">
                        {
                            for PRODUCT_STEPS.iter().enumerate().map(|(index, product)| {
                                let onclick = {
                                    let jump_to = jump_to.clone();
                                    Callback::from(move |_: MouseEvent| jump_to.emit(index))
                                };
                                let width = if index < *active {
                                    100.0
                                } else if index == *active {
                                    fill_percent
                                } else {
                                    0.0
                                };
                                html! {
                                    <button
                                        type="button"
                                        class={classes!("step-row", (index == *active).then_some("active"))}
                                        {onclick}
                                    >
                                        <span class="step-number">{format!("{:02}", index + 1)}</span>
                                        <span>
                                            <span class="step-name">{product.name}</span>
                                            <span class="step-copy">{product.tagline}</span>
                                        </span>
                                        <span class="step-price">{product.price}</span>
                                        <span class="fill-track">
                                            <span
                                                class="fill-bar"
                                                style={format!(
                                                    "display: block; width: {:.2}%; background: {};",
                                                    width, product.accent
                                                )}
                                            />
                                        </span>
                                    </button>
                                }
                            })
                        }
                    </div>
                    <div
                        class="step-visual"
                        style={format!(
                            "border: 1px solid {accent}55; box-shadow: 0 30px 90px {accent}2e;",
                            accent = step.accent
                        )}
                    >
                        {
                            for PRODUCT_STEPS.iter().enumerate().map(|(index, product)| {
                                html! {
                                    <img
                                        src={product.image}
                                        alt={product.name}
                                        loading="lazy"
                                        class={classes!((index == *active).then_some("visible"))}
                                    />
                                }
                            })
                        }
                        <div class="visual-caption">
                            <span>{format!("{} · {}", step.name, step.price)}</span>
                            <a
                                class="step-cta"
                                style={format!("background: {};", step.accent)}
                                href={crate::config::get_shop_url()}
                            >
                                {"Add to ritual"}
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
