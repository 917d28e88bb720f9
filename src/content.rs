//! Fixed marketing catalog for the site. The motion logic never looks inside
//! these beyond their lengths.

pub struct ProductStep {
    pub name: &'static str,
    pub tagline: &'static str,
    pub price: &'static str,
    pub accent: &'static str,
    pub image: &'static str,
}

/// The three products the pinned stepper walks through, in scroll order.
pub const PRODUCT_STEPS: [ProductStep; 3] = [
    ProductStep {
        name: "Daily Greens",
        tagline: "32 nutrient-dense superfoods in one scoop. Tastes like mint, not like a lawn.",
        price: "$39",
        accent: "#4CAF7D",
        image: "/assets/daily-greens.png",
    },
    ProductStep {
        name: "Omega Focus",
        tagline: "Algae-sourced omega-3s for clear-headed afternoons. No fishy burps, ever.",
        price: "$29",
        accent: "#3D8BFF",
        image: "/assets/omega-focus.png",
    },
    ProductStep {
        name: "Night Magnesium",
        tagline: "Triple-form magnesium with tart cherry for the deep-rest kind of sleep.",
        price: "$24",
        accent: "#8A63E8",
        image: "/assets/night-magnesium.png",
    },
];

pub struct Slide {
    pub image: &'static str,
    pub caption: &'static str,
}

/// Lifestyle carousel, auto-advancing.
pub const CAROUSEL_SLIDES: [Slide; 5] = [
    Slide {
        image: "/assets/slide-morning-ritual.jpg",
        caption: "6:40am. Greens first, inbox later.",
    },
    Slide {
        image: "/assets/slide-trail-run.jpg",
        caption: "Mile nine felt like mile two.",
    },
    Slide {
        image: "/assets/slide-desk-focus.jpg",
        caption: "The 3pm slump never showed up.",
    },
    Slide {
        image: "/assets/slide-kitchen-shake.jpg",
        caption: "One scoop, twelve seconds, done.",
    },
    Slide {
        image: "/assets/slide-wind-down.jpg",
        caption: "Lights low, magnesium in, phone away.",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub detail: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "I've tried every greens powder with a billboard. This is the first one I finished \
                and reordered before the tub ran out.",
        name: "Maren K.",
        detail: "Daily Greens, 14 months in",
    },
    Testimonial {
        quote: "The afternoon fog at work just quietly stopped being a thing. Took me three weeks \
                to connect it to Omega Focus.",
        name: "Deshawn R.",
        detail: "Omega Focus subscriber",
    },
    Testimonial {
        quote: "My watch says my deep sleep is up 40 minutes a night. My toddler disagrees, but \
                that's not Loma's fault.",
        name: "Priya S.",
        detail: "Night Magnesium, 6 months in",
    },
];

pub struct WallPhoto {
    pub image: &'static str,
    pub handle: &'static str,
}

/// How many wall slots are visible at once. The pool below is deliberately
/// larger so swaps usually pull in something not already on screen.
pub const WALL_SLOTS: usize = 6;

pub const WALL_POOL: [WallPhoto; 12] = [
    WallPhoto { image: "/assets/wall-01.jpg", handle: "@sunrise.sana" },
    WallPhoto { image: "/assets/wall-02.jpg", handle: "@coachmikko" },
    WallPhoto { image: "/assets/wall-03.jpg", handle: "@el.runs.far" },
    WallPhoto { image: "/assets/wall-04.jpg", handle: "@greens.before.screens" },
    WallPhoto { image: "/assets/wall-05.jpg", handle: "@tovagetsit" },
    WallPhoto { image: "/assets/wall-06.jpg", handle: "@benchandbrunch" },
    WallPhoto { image: "/assets/wall-07.jpg", handle: "@quietmornings_" },
    WallPhoto { image: "/assets/wall-08.jpg", handle: "@marcusliftsthings" },
    WallPhoto { image: "/assets/wall-09.jpg", handle: "@nadia.fuel" },
    WallPhoto { image: "/assets/wall-10.jpg", handle: "@trailnotes.jo" },
    WallPhoto { image: "/assets/wall-11.jpg", handle: "@the8pmshutdown" },
    WallPhoto { image: "/assets/wall-12.jpg", handle: "@ritualoverhype" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_pool_is_larger_than_the_visible_grid() {
        assert!(WALL_POOL.len() > WALL_SLOTS);
    }

    #[test]
    fn catalog_tables_hold_the_advertised_counts() {
        assert_eq!(PRODUCT_STEPS.len(), 3);
        assert_eq!(CAROUSEL_SLIDES.len(), 5);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(WALL_SLOTS, 6);
        assert_eq!(WALL_POOL.len(), 12);
    }
}
