use yew::prelude::*;
use yew_hooks::use_interval;
use web_sys::js_sys::Date;
use web_sys::MouseEvent;

use crate::content::CAROUSEL_SLIDES;
use crate::motion::rotator::Rotator;

const SLIDE_PERIOD_MS: f64 = 2_400.0;
const TICK_MS: u32 = 100;

#[function_component(ProductCarousel)]
pub fn product_carousel() -> Html {
    let rotator = use_mut_ref(|| Rotator::new(CAROUSEL_SLIDES.len(), SLIDE_PERIOD_MS, Date::now()));
    let active = use_state_eq(|| 0usize);

    // Coarse tick; the rotator decides when a full period has elapsed.
    {
        let rotator = rotator.clone();
        let active = active.clone();
        use_interval(
            move || {
                if rotator.borrow_mut().tick(Date::now()) {
                    active.set(rotator.borrow().active());
                }
            },
            TICK_MS,
        );
    }

    let onmouseenter = {
        let rotator = rotator.clone();
        Callback::from(move |_: MouseEvent| rotator.borrow_mut().pause())
    };

    let onmouseleave = {
        let rotator = rotator.clone();
        Callback::from(move |_: MouseEvent| rotator.borrow_mut().resume(Date::now()))
    };

    html! {
        <section class="life-carousel">
            <div class="carousel-header">
                <h2>{"Life with Loma"}</h2>
                <p>{"Five small moments our customers keep sending us. Hover to linger."}</p>
            </div>
            <div class="carousel-frame" {onmouseenter} {onmouseleave}>
                {
                    for CAROUSEL_SLIDES.iter().enumerate().map(|(index, slide)| {
                        html! {
                            <figure class={classes!("carousel-slide", (index == *active).then_some("visible"))}>
                                <img src={slide.image} alt={slide.caption} loading="lazy" />
                                <figcaption>{slide.caption}</figcaption>
                            </figure>
                        }
                    })
                }
                <div class="carousel-dots">
                    {
                        for (0..CAROUSEL_SLIDES.len()).map(|index| {
                            let onclick = {
                                let rotator = rotator.clone();
                                let active = active.clone();
                                Callback::from(move |_: MouseEvent| {
                                    rotator.borrow_mut().select(index, Date::now());
                                    active.set(index);
                                })
                            };
                            html! {
                                <button
                                    type="button"
                                    aria-label={format!("Show slide {}", index + 1)}
                                    class={classes!("carousel-dot", (index == *active).then_some("current"))}
                                    {onclick}
                                />
                            }
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                    .life-carousel {
                        padding: 7rem 2rem;
                        background: #141714;
                    }

                    .carousel-header {
                        max-width: 640px;
                        margin: 0 auto 2.6rem;
                        text-align: center;
                    }

                    .carousel-header h2 {
                        margin: 0 0 0.6rem;
                        font-size: 2.2rem;
                        color: #f4f1ea;
                    }

                    .carousel-header p {
                        margin: 0;
                        color: #9a9688;
                        font-size: 1.05rem;
                    }

                    .carousel-frame {
                        position: relative;
                        width: min(880px, 100%);
                        aspect-ratio: 16 / 9;
                        margin: 0 auto;
                        border-radius: 26px;
                        overflow: hidden;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                    }

                    .carousel-slide {
                        position: absolute;
                        inset: 0;
                        margin: 0;
                        opacity: 0;
                        transition: opacity 0.6s ease;
                        pointer-events: none;
                    }

                    .carousel-slide.visible {
                        opacity: 1;
                    }

                    .carousel-slide img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .carousel-slide figcaption {
                        position: absolute;
                        left: 1.6rem;
                        bottom: 3.4rem;
                        color: #f4f1ea;
                        font-size: 1.15rem;
                        font-weight: 600;
                        text-shadow: 0 2px 16px rgba(0, 0, 0, 0.6);
                    }

                    .carousel-dots {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 1.1rem;
                        display: flex;
                        justify-content: center;
                        gap: 0.55rem;
                    }

                    .carousel-dot {
                        width: 9px;
                        height: 9px;
                        padding: 0;
                        border: none;
                        border-radius: 50%;
                        background: rgba(244, 241, 234, 0.35);
                        cursor: pointer;
                        transition: background 0.25s ease, transform 0.25s ease;
                    }

                    .carousel-dot.current {
                        background: #f4f1ea;
                        transform: scale(1.25);
                    }

                    @media (max-width: 700px) {
                        .life-carousel {
                            padding: 4.5rem 1rem;
                        }

                        .carousel-frame {
                            aspect-ratio: 4 / 5;
                        }

                        .carousel-slide figcaption {
                            font-size: 1rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
