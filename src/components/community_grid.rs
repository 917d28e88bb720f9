use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use stylist::yew::styled_component;
use gloo_timers::callback::{Interval, Timeout};
use web_sys::js_sys::{Date, Math};

use crate::content::{WALL_POOL, WALL_SLOTS};
use crate::motion::slot_shuffle::{next_swap_delay_ms, RandomSource, SlotBoard};

const TICK_MS: u32 = 100;
/// How long a freshly swapped card keeps its highlight.
const SWAP_FLAG_MS: u32 = 700;

/// Browser randomness behind the seam the selection logic asks for.
struct JsRandom;

impl RandomSource for JsRandom {
    fn next_f64(&mut self) -> f64 {
        Math::random()
    }
}

#[styled_component(CommunityGrid)]
pub fn community_grid() -> Html {
    let board = use_mut_ref(|| SlotBoard::new(WALL_SLOTS, WALL_POOL.len()));
    let slots = use_state_eq(|| board.borrow().slots().to_vec());
    let flagged = use_state_eq(|| None::<usize>);

    // One coarse timer polls a randomized due time; each due tick swaps a
    // single card and arms a one-shot highlight clear. Both handles die with
    // the effect, so nothing keeps running once the wall unmounts.
    {
        let board = board.clone();
        let slots = slots.clone();
        let flagged = flagged.clone();
        use_effect_with_deps(
            move |_| {
                let next_due = RefCell::new(Date::now() + next_swap_delay_ms(&mut JsRandom));
                let flag_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

                let interval = {
                    let flag_timer = flag_timer.clone();
                    Interval::new(TICK_MS, move || {
                        let now = Date::now();
                        if now < *next_due.borrow() {
                            return;
                        }
                        let mut rng = JsRandom;
                        *next_due.borrow_mut() = now + next_swap_delay_ms(&mut rng);

                        let Some(swap) = board.borrow_mut().swap_one(&mut rng) else {
                            return;
                        };
                        slots.set(board.borrow().slots().to_vec());
                        flagged.set(Some(swap.slot));

                        let clear = {
                            let flagged = flagged.clone();
                            Timeout::new(SWAP_FLAG_MS, move || flagged.set(None))
                        };
                        // Re-arming drops any clear still pending from the
                        // previous swap.
                        *flag_timer.borrow_mut() = Some(clear);
                    })
                };

                move || {
                    drop(interval);
                    flag_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let style = css!(
        r#"
        padding: 7rem 2rem;
        background: #101310;

        .wall-header {
            max-width: 640px;
            margin: 0 auto 2.6rem;
            text-align: center;
        }

        .wall-header h2 {
            margin: 0 0 0.6rem;
            font-size: 2.2rem;
            color: #f4f1ea;
        }

        .wall-header p {
            margin: 0;
            color: #9a9688;
            font-size: 1.05rem;
        }

        .wall-grid {
            width: min(1080px, 100%);
            margin: 0 auto;
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1.1rem;
        }

        .wall-card {
            position: relative;
            aspect-ratio: 1 / 1;
            border-radius: 20px;
            overflow: hidden;
            outline: 2px solid transparent;
            outline-offset: -2px;
            transform: scale(1);
            transition: outline-color 0.3s ease, transform 0.3s ease;
        }

        .wall-card img {
            width: 100%;
            height: 100%;
            object-fit: cover;
        }

        .wall-card figcaption {
            position: absolute;
            left: 0.9rem;
            bottom: 0.7rem;
            color: #f4f1ea;
            font-size: 0.85rem;
            text-shadow: 0 2px 12px rgba(0, 0, 0, 0.65);
        }

        .wall-card.swapped {
            outline-color: #c9f06a;
            transform: scale(1.03);
        }

        @media (max-width: 860px) {
            .wall-grid {
                grid-template-columns: repeat(2, 1fr);
            }
        }

        @media (max-width: 520px) {
            .wall-grid {
                grid-template-columns: 1fr;
            }

            .wall-card {
                aspect-ratio: 4 / 3;
            }
        }
        "#
    );

    html! {
        <section class={classes!(style, "community-wall")}>
            <div class="wall-header">
                <h2>{"The #lomaritual wall"}</h2>
                <p>{"Tag us and you might rotate in. The wall reshuffles itself while you watch."}</p>
            </div>
            <div class="wall-grid">
                {
                    for slots.iter().enumerate().map(|(slot_index, item_index)| {
                        let photo = &WALL_POOL[*item_index];
                        html! {
                            <figure
                                key={slot_index}
                                class={classes!(
                                    "wall-card",
                                    (*flagged == Some(slot_index)).then_some("swapped"),
                                )}
                                style="margin: 0;"
                            >
                                <img src={photo.image} alt={photo.handle} loading="lazy" />
                                <figcaption>{photo.handle}</figcaption>
                            </figure>
                        }
                    })
                }
            </div>
        </section>
    }
}
