use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

pub const SITE_TITLE: &str = "Campus Circle";
pub const LOGO_SRC: &str = "/assets/logo.svg";
pub const HERO_IMAGE_SRC: &str = "/assets/hero.svg";
pub const HERO_LINES: [&str; 3] = ["Stay in", "school", "peeps"];
pub const SUBTEXT: &str =
    "Mentoring and study support for students who want to finish strong.";
pub const CTA_LABEL: &str = "Join the program";
pub const CTA_HREF: &str = "/contact";
pub const APPLY_LABEL: &str = "Apply now";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=SITE_TITLE/>
        <div class="min-h-screen bg-surface">
            <header class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <img src=LOGO_SRC alt="Campus Circle logo" class="h-10 w-10"/>
                        <h1 class="text-xl font-semibold text-fg">{SITE_TITLE}</h1>
                    </div>
                    <nav class="flex items-center gap-4">
                        <span class="text-sm font-medium text-fg-muted">{APPLY_LABEL}</span>
                        // Decorative only; the landing page has no menu to open.
                        <button
                            type="button"
                            class="inline-flex items-center justify-center p-2 rounded-md text-fg-muted"
                            aria-label="Menu"
                        >
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M4 6h16M4 12h16M4 18h16"
                                />
                            </svg>
                        </button>
                    </nav>
                </div>
            </header>
            <main class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="grid gap-10 lg:grid-cols-2 lg:items-center">
                    <div>
                        <h2 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                            {HERO_LINES
                                .iter()
                                .map(|line| view! { <span class="block">{*line}</span> })
                                .collect_view()}
                        </h2>
                        <p class="mt-3 max-w-md text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl">
                            {SUBTEXT}
                        </p>
                        <div class="mt-5 lg:mt-8">
                            <A
                                href=CTA_HREF
                                class="inline-flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover lg:py-4 lg:text-lg lg:px-10"
                            >
                                {CTA_LABEL}
                            </A>
                        </div>
                    </div>
                    <img
                        src=HERO_IMAGE_SRC
                        alt="Students studying together"
                        class="w-full rounded-2xl shadow"
                    />
                </div>
            </main>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render_home() -> String {
        render_to_string(|| view! { <HomePage/> })
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn home_page_renders_each_fixed_string_once() {
        let html = render_home();
        for line in HERO_LINES {
            assert_eq!(count(&html, line), 1, "hero line {:?}", line);
        }
        assert_eq!(count(&html, SUBTEXT), 1);
        assert_eq!(count(&html, CTA_LABEL), 1);
        assert_eq!(count(&html, APPLY_LABEL), 1);
    }

    #[test]
    fn home_page_references_both_images_once() {
        let html = render_home();
        assert_eq!(count(&html, LOGO_SRC), 1);
        assert_eq!(count(&html, HERO_IMAGE_SRC), 1);
    }

    #[test]
    fn call_to_action_points_at_contact_page() {
        let html = render_home();
        assert!(html.contains("href=\"/contact\""));
    }
}
