use leptos::prelude::*;

const CARD: &str = "background: white; padding: 24px; border-radius: 8px; box-shadow: 0 4px 6px rgba(0,0,0,0.1);";
const CARD_TITLE: &str = "font-size: 1.25rem; font-weight: 600; color: #111827; margin: 0;";
const CARD_TEXT: &str = "margin-top: 16px; color: #6b7280;";

/// Static informational page. No data dependencies; the only effect is
/// setting the document title on mount.
#[component]
pub fn AboutPage() -> impl IntoView {
    Effect::new(move |_| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title("About Us - His & Her Essentials");
        }
    });

    view! {
        <section style="width: 100%; min-height: 100vh; background: #f9fafb;">
            <div style="padding: 64px 16px; max-width: 1100px; margin: 0 auto;">
                <div style="text-align: center;">
                    <h1 style="font-size: 2.5rem; font-weight: 700; color: #111827; margin: 0;">
                        "About His & Her Essentials"
                    </h1>
                    <p style="margin: 12px auto 0; max-width: 42rem; font-size: 1.25rem; color: #6b7280;">
                        "Your one-stop destination for premium fashion and lifestyle products"
                    </p>
                </div>

                <div style="margin-top: 64px; display: grid; grid-template-columns: 1fr 1fr; gap: 48px;">
                    <div>
                        <h2 style="font-size: 1.875rem; font-weight: 700; color: #111827; margin: 0 0 24px 0;">"Our Story"</h2>
                        <p style="font-size: 1.125rem; color: #6b7280; margin: 0;">
                            "Founded with a passion for bringing quality fashion to everyone, His & Her Essentials \
                             has grown from a small boutique to a comprehensive online destination for fashion \
                             enthusiasts. We believe that everyone deserves access to high-quality, stylish \
                             clothing and accessories that make them feel confident and comfortable."
                        </p>
                    </div>
                    <div>
                        <h2 style="font-size: 1.875rem; font-weight: 700; color: #111827; margin: 0 0 24px 0;">"Our Mission"</h2>
                        <p style="font-size: 1.125rem; color: #6b7280; margin: 0;">
                            "We strive to provide our customers with carefully curated collections that blend \
                             timeless elegance with contemporary trends. Our commitment to quality, sustainability, \
                             and customer satisfaction drives everything we do."
                        </p>
                    </div>
                </div>

                <div style="margin-top: 64px;">
                    <h2 style="font-size: 1.875rem; font-weight: 700; color: #111827; text-align: center; margin: 0;">"Our Values"</h2>
                    <div style="margin-top: 32px; display: grid; grid-template-columns: repeat(3, 1fr); gap: 32px;">
                        <div style=CARD>
                            <h3 style=CARD_TITLE>"Quality"</h3>
                            <p style=CARD_TEXT>
                                "We source only the finest materials and partner with trusted manufacturers to ensure \
                                 premium quality in every product."
                            </p>
                        </div>
                        <div style=CARD>
                            <h3 style=CARD_TITLE>"Sustainability"</h3>
                            <p style=CARD_TEXT>
                                "We're committed to reducing our environmental impact through eco-friendly practices \
                                 and sustainable sourcing."
                            </p>
                        </div>
                        <div style=CARD>
                            <h3 style=CARD_TITLE>"Customer Focus"</h3>
                            <p style=CARD_TEXT>
                                "Your satisfaction is our priority. We're dedicated to providing exceptional service \
                                 and support at every step."
                            </p>
                        </div>
                    </div>
                </div>

                <div style="margin-top: 64px;">
                    <h2 style="font-size: 1.875rem; font-weight: 700; color: #111827; text-align: center; margin: 0;">"Our Location"</h2>
                    <div style="margin-top: 32px; display: grid; grid-template-columns: 1fr 1fr; gap: 32px;">
                        <div style=CARD>
                            <h3 style=CARD_TITLE>"Visit Us"</h3>
                            <p style=CARD_TEXT>
                                "We are located in the heart of the city, making it easy for you to visit us and \
                                 experience our products in person. Our friendly staff is always ready to assist you."
                            </p>
                            <p style=CARD_TEXT><strong>"Address: "</strong>"123 Fashion Street, Downtown, Cityville, 12345"</p>
                            <p style="margin-top: 8px; color: #6b7280;"><strong>"Phone: "</strong>"+1 (123) 456-7890"</p>
                            <p style="margin-top: 8px; color: #6b7280;"><strong>"Email: "</strong>"info@hisandheressentials.com"</p>
                        </div>
                        <div style=CARD>
                            <iframe
                                title="Our Location"
                                src="https://www.openstreetmap.org/export/embed.html?bbox=73.08,19.20,73.09,19.22&layer=mapnik"
                                width="100%"
                                height="400"
                                style="border: 0;"
                                loading="lazy"
                            ></iframe>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
