use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::components::Link;

use crate::components::community_grid::CommunityGrid;
use crate::components::product_carousel::ProductCarousel;
use crate::components::product_stepper::ProductStepper;
use crate::config;
use crate::content::TESTIMONIALS;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <header class="hero">
                <div class="hero-glow"></div>
                <div class="hero-content">
                    <h1 class="hero-title">
                        <span class="hero-word" style="animation-delay: 0s;">{"Feel"}</span>
                        <span class="hero-word" style="animation-delay: 0.12s;">{"bright,"}</span>
                        <span class="hero-word" style="animation-delay: 0.24s;">{"every"}</span>
                        <span class="hero-word" style="animation-delay: 0.36s;">{"day."}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Three honest formulas. No proprietary blends, no 40-ingredient kitchen sink. \
                          Just the doses that showed up in the research, in capsules and powders \
                          you'll actually take."}
                    </p>
                    <div class="hero-cta-group">
                        <a href={config::get_shop_url()} class="forward-link">
                            <button class="hero-cta">{"Shop the stack"}</button>
                        </a>
                        <a href="#products" class="quiet-link">{"See what's inside"}</a>
                    </div>
                </div>
            </header>

            <div class="feature-block">
                <div class="feature-content">
                    <h2>{"Formulas that respect your body"}</h2>
                    <p>{"Every Loma tub lists exact milligrams on the front, because the label is the product."}</p>
                    <ul class="feature-list">
                        <li>{"🌿 Whole-food actives, farm-traceable by lot number"}</li>
                        <li>{"🧪 Third-party tested, every single batch, results published"}</li>
                        <li>{"💊 Zero fillers, dyes or \"flow agents\""}</li>
                        <li>{"📋 Clinically-studied doses, not fairy dust"}</li>
                    </ul>
                </div>
                <div class="feature-image">
                    <img src="/assets/feature-sourcing.jpg" loading="lazy" alt="Raw greens being weighed in the Loma lab" />
                </div>
            </div>

            <div class="feature-block reversed">
                <div class="feature-content">
                    <h2>{"A ritual, not a chore"}</h2>
                    <p>{"Supplements only work when you keep taking them. Loma is built around the moments you already have."}</p>
                    <ul class="feature-list">
                        <li>{"☀️ Greens with your first glass of water"}</li>
                        <li>{"🧠 Omegas when the afternoon fog rolls in"}</li>
                        <li>{"🌙 Magnesium as the lights go down"}</li>
                        <li>{"📦 Refills arrive before the tub runs out"}</li>
                    </ul>
                </div>
                <div class="feature-image">
                    <img src="/assets/feature-ritual.jpg" loading="lazy" alt="Morning kitchen counter with a glass of Daily Greens" />
                </div>
            </div>

            <section class="how-it-works">
                <h2>{"How the ritual builds"}</h2>
                <p>{"Nothing here works overnight. Here's the honest time line."}</p>
                <div class="steps-grid">
                    <div class="step">
                        <h3>{"Pick your stack"}</h3>
                        <p>{"Start with one formula or all three. Each one stands alone, they're just better as a set."}</p>
                    </div>
                    <div class="step">
                        <h3>{"Anchor the habit"}</h3>
                        <p>{"Tie each dose to something you already do every day. The jar on the counter does the remembering."}</p>
                    </div>
                    <div class="step">
                        <h3>{"Let it compound"}</h3>
                        <p>{"Weeks two through six are where people notice. Steadier mornings, clearer afternoons, deeper nights."}</p>
                    </div>
                </div>
            </section>

            <ProductStepper />

            <ProductCarousel />

            <section class="reviews" id="reviews">
                <h2>{"Fourteen thousand rituals and counting"}</h2>
                <div class="review-grid">
                    {
                        for TESTIMONIALS.iter().map(|t| html! {
                            <blockquote class="review-card">
                                <span class="review-stars" aria-label="Five out of five stars">{"★★★★★"}</span>
                                <p class="review-quote">{t.quote}</p>
                                <footer>
                                    <span class="review-name">{t.name}</span>
                                    <span class="review-detail">{t.detail}</span>
                                </footer>
                            </blockquote>
                        })
                    }
                </div>
            </section>

            <CommunityGrid />

            <footer class="footer-cta">
                <div class="footer-content">
                    <h2>{"Ready to feel the difference?"}</h2>
                    <p class="subtitle">{"Free shipping on every subscription. Pause or cancel in two taps, no retention call, no guilt trip."}</p>
                    <a href={config::get_shop_url()} class="forward-link">
                        <button class="hero-cta">{"Start your ritual"}</button>
                    </a>
                    <p class="disclaimer">
                        {"These statements have not been evaluated by the Food and Drug Administration. \
                          This product is not intended to diagnose, treat, cure, or prevent any disease."}
                    </p>
                    <div class="development-links">
                        <p>{"Follow the ritual at "}
                            <a href="https://instagram.com/lomanutrition" target="_blank" rel="noopener noreferrer">{"instagram.com/lomanutrition"}</a>
                            {" and "}
                            <a href="https://x.com/lomanutrition" target="_blank" rel="noopener noreferrer">{"x.com/lomanutrition"}</a>
                        </p>
                        <div class="legal-links">
                            <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
                            {" | "}
                            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                        </div>
                    </div>
                </div>
            </footer>

            <style>
                {r#"
                    .home-page {
                        background: #101310;
                        color: #f4f1ea;
                        font-family: 'Inter', system-ui, sans-serif;
                        overflow-x: hidden;
                    }

                    /* Hero */

                    .hero {
                        position: relative;
                        min-height: 92vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 6rem 2rem 4rem;
                    }

                    .hero-glow {
                        position: absolute;
                        top: -20%;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 70vw;
                        height: 70vw;
                        max-width: 900px;
                        max-height: 900px;
                        background: radial-gradient(circle, rgba(201, 240, 106, 0.16) 0%, transparent 65%);
                        pointer-events: none;
                    }

                    .hero-content {
                        position: relative;
                        max-width: 760px;
                    }

                    .hero-title {
                        margin: 0 0 1.4rem;
                        font-size: clamp(3rem, 8vw, 5.2rem);
                        line-height: 1.05;
                        letter-spacing: -0.02em;
                    }

                    .hero-word {
                        display: inline-block;
                        margin-right: 0.28em;
                        opacity: 0;
                        transform: translateY(0.6em);
                        animation: word-rise 0.7s cubic-bezier(0.22, 1, 0.36, 1) forwards;
                    }

                    @keyframes word-rise {
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }

                    .hero-subtitle {
                        margin: 0 auto 2.4rem;
                        max-width: 560px;
                        color: #b5b1a2;
                        font-size: 1.15rem;
                        line-height: 1.65;
                    }

                    .hero-cta-group {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1.6rem;
                        flex-wrap: wrap;
                    }

                    .hero-cta {
                        padding: 0.95rem 2.4rem;
                        border: none;
                        border-radius: 999px;
                        background: #c9f06a;
                        color: #101310;
                        font-size: 1.05rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }

                    .hero-cta:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 10px 30px rgba(201, 240, 106, 0.25);
                    }

                    .forward-link {
                        text-decoration: none;
                    }

                    .quiet-link {
                        color: #b5b1a2;
                        text-decoration: none;
                        border-bottom: 1px solid rgba(181, 177, 162, 0.4);
                        padding-bottom: 2px;
                        transition: color 0.2s ease;
                    }

                    .quiet-link:hover {
                        color: #f4f1ea;
                    }

                    /* Feature blocks */

                    .feature-block {
                        display: flex;
                        align-items: center;
                        gap: 4rem;
                        max-width: 1080px;
                        margin: 0 auto;
                        padding: 5rem 2rem;
                    }

                    .feature-block.reversed {
                        flex-direction: row-reverse;
                    }

                    .feature-content {
                        flex: 1;
                    }

                    .feature-content h2 {
                        margin: 0 0 1rem;
                        font-size: 2.1rem;
                    }

                    .feature-content > p {
                        color: #b5b1a2;
                        margin: 0 0 1.6rem;
                        line-height: 1.6;
                    }

                    .feature-list {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: grid;
                        gap: 0.9rem;
                    }

                    .feature-list li {
                        color: #ddd8c9;
                        font-size: 1.02rem;
                    }

                    .feature-image {
                        flex: 1;
                    }

                    .feature-image img {
                        width: 100%;
                        border-radius: 24px;
                        display: block;
                    }

                    /* How it works */

                    .how-it-works {
                        max-width: 1080px;
                        margin: 0 auto;
                        padding: 5rem 2rem;
                        text-align: center;
                    }

                    .how-it-works h2 {
                        margin: 0 0 0.6rem;
                        font-size: 2.1rem;
                    }

                    .how-it-works > p {
                        color: #9a9688;
                        margin: 0 0 2.8rem;
                    }

                    .steps-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.4rem;
                        text-align: left;
                    }

                    .step {
                        background: #181c17;
                        border: 1px solid #242a22;
                        border-radius: 20px;
                        padding: 1.8rem;
                    }

                    .step h3 {
                        margin: 0 0 0.6rem;
                        color: #c9f06a;
                        font-size: 1.15rem;
                    }

                    .step p {
                        margin: 0;
                        color: #b5b1a2;
                        line-height: 1.55;
                    }

                    /* Reviews */

                    .reviews {
                        max-width: 1080px;
                        margin: 0 auto;
                        padding: 6rem 2rem 3rem;
                        scroll-margin-top: 90px;
                    }

                    .reviews h2 {
                        margin: 0 0 2.4rem;
                        font-size: 2.1rem;
                        text-align: center;
                    }

                    .review-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.4rem;
                    }

                    .review-card {
                        margin: 0;
                        background: #181c17;
                        border: 1px solid #242a22;
                        border-radius: 20px;
                        padding: 1.8rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                    }

                    .review-stars {
                        color: #c9f06a;
                        letter-spacing: 0.2em;
                        margin-bottom: 0.8rem;
                    }

                    .review-quote {
                        margin: 0 0 1.4rem;
                        color: #ddd8c9;
                        line-height: 1.6;
                        font-style: italic;
                    }

                    .review-card footer {
                        display: flex;
                        flex-direction: column;
                        gap: 0.15rem;
                    }

                    .review-name {
                        color: #f4f1ea;
                        font-weight: 600;
                    }

                    .review-detail {
                        color: #9a9688;
                        font-size: 0.9rem;
                    }

                    /* Footer */

                    .footer-cta {
                        padding: 7rem 2rem 4rem;
                        text-align: center;
                        background: linear-gradient(180deg, #101310 0%, #14180f 100%);
                    }

                    .footer-content {
                        max-width: 640px;
                        margin: 0 auto;
                    }

                    .footer-cta h2 {
                        margin: 0 0 0.8rem;
                        font-size: 2.3rem;
                    }

                    .footer-cta .subtitle {
                        color: #b5b1a2;
                        margin: 0 0 2rem;
                        line-height: 1.6;
                    }

                    .footer-cta .disclaimer {
                        margin: 2.6rem auto 0;
                        max-width: 520px;
                        color: #6f6c60;
                        font-size: 0.8rem;
                        line-height: 1.5;
                    }

                    .development-links {
                        margin-top: 2.2rem;
                        color: #9a9688;
                        font-size: 0.9rem;
                    }

                    .development-links a {
                        color: #c9f06a;
                        text-decoration: none;
                    }

                    .legal-links {
                        margin-top: 0.8rem;
                    }

                    .legal-links a {
                        color: #9a9688;
                        text-decoration: underline;
                    }

                    @media (max-width: 900px) {
                        .feature-block,
                        .feature-block.reversed {
                            flex-direction: column;
                            gap: 2.4rem;
                            padding: 3.5rem 1.5rem;
                        }

                        .steps-grid,
                        .review-grid {
                            grid-template-columns: 1fr;
                        }

                        .hero {
                            min-height: 80vh;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
