use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. What This Site Collects"}</h2>
                <p>{"This site is a product showcase. It collects:"}</p>
                <ul>
                    <li>{"Nothing. No accounts, no forms, no tracking pixels."}</li>
                    <li>{"Standard server logs (IP address, user agent) retained by our hosting provider for up to 30 days for abuse prevention."}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. Purchases"}</h2>
                <p>{"All purchases happen on our separate shop at shop.lomanutrition.com, which has its own privacy policy covering:"}</p>
                <ul>
                    <li>{"Order and shipping information"}</li>
                    <li>{"Payment processing (handled by our payment provider, never stored by us)"}</li>
                    <li>{"Subscription management"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Cookies"}</h2>
                <p>{"This site sets no cookies. The community wall photos are served from our own asset host with no third-party embeds."}</p>
            </section>

            <section>
                <h2>{"4. Social Content"}</h2>
                <p>{"Photos on the #lomaritual wall are republished with the explicit permission of each account holder. To have yours removed, email us and it comes down within 48 hours."}</p>
            </section>

            <section>
                <h2>{"5. Your Rights"}</h2>
                <p>{"Under GDPR and CCPA you may request access to or deletion of any personal data we hold. Given section 1, the honest answer is usually that we hold none, but we will always confirm in writing."}</p>
            </section>

            <section>
                <h2>{"6. Contact"}</h2>
                <p>{"For privacy-related inquiries:"}</p>
                <p>{"Email: hello@lomanutrition.com"}</p>
                <p>{"Loma Nutrition Co., Portland, Oregon"}</p>
            </section>
            <div class="legal-links">
                <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
            </div>
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-content terms-and-conditions">
            <h1>{"Loma Nutrition Terms and Conditions"}</h1>
            <p class="company-name">{"Provided by Loma Nutrition Co."}</p>

            <section>
                <h2>{"1. Introduction"}</h2>
                <p>{"These Terms and Conditions (\"Terms\") govern your use of the lomanutrition.com website (\"Site\"). By accessing the Site you agree to be bound by these Terms. Purchases made through our shop are additionally governed by the shop's terms of sale."}</p>
            </section>

            <section>
                <h2>{"2. Informational Content"}</h2>
                <p>{"Content on this Site is provided for general information about our products. It is not medical advice. Consult a qualified health professional before starting any supplement, particularly if you are pregnant, nursing, taking medication, or have a medical condition."}</p>
            </section>

            <section>
                <h2>{"3. Product Claims"}</h2>
                <ul>
                    <li>{"Statements on this Site have not been evaluated by the Food and Drug Administration."}</li>
                    <li>{"Our products are not intended to diagnose, treat, cure, or prevent any disease."}</li>
                    <li>{"Testimonials reflect individual experiences and are not a promise of results."}</li>
                    <li>{"Batch test results published on the Site reflect the specific lot tested."}</li>
                </ul>
            </section>

            <section>
                <h2>{"4. Acceptable Use"}</h2>
                <p>{"You agree not to use the Site for any unlawful purpose, to scrape it at abusive rates, or to misrepresent our products or test results in derivative material."}</p>
            </section>

            <section>
                <h2>{"5. Intellectual Property"}</h2>
                <p>{"All content on the Site, including text, photography, logos, and software, is the property of Loma Nutrition Co. or its licensors and is protected by intellectual property laws. Community wall photos remain the property of their original posters and appear with permission."}</p>
            </section>

            <section>
                <h2>{"6. Limitation of Liability"}</h2>
                <p>{"The Site is provided \"as is\" without warranties of any kind. Loma Nutrition Co. will not be liable for any damages arising from the use or inability to use the Site."}</p>
            </section>

            <section>
                <h2>{"7. Changes to Terms"}</h2>
                <p>{"We may update these Terms from time to time. Continued use of the Site after any such changes constitutes your acceptance of the new Terms."}</p>
            </section>

            <section>
                <h2>{"8. Governing Law"}</h2>
                <p>{"These Terms are governed by and construed in accordance with the laws of the State of Oregon, United States."}</p>
            </section>

            <section>
                <h2>{"9. Contact"}</h2>
                <p>{"Questions about these Terms:"}</p>
                <p>{"Email: hello@lomanutrition.com"}</p>
            </section>
            <div class="legal-links">
                <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
            </div>
        </div>
    }
}
