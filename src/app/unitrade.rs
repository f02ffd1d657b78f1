use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use super::icon::{Icon, IconKind};
use super::ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Image};

struct Feature {
    title: &'static str,
    body: &'static str,
    icon: IconKind,
}

struct Step {
    title: &'static str,
    body: &'static str,
}

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    avatar_alt: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Easy Trading",
        body: "Quickly find and trade items with other students on your campus.",
        icon: IconKind::RefreshCcw,
    },
    Feature {
        title: "Save Money",
        body: "Reduce your expenses by trading instead of buying new items.",
        icon: IconKind::BarChart,
    },
    Feature {
        title: "Build Community",
        body: "Connect with fellow students and create a supportive network.",
        icon: IconKind::Users,
    },
];

const STEPS: [Step; 3] = [
    Step {
        title: "List Your Items",
        body: "Add the groceries or supplies you're willing to trade.",
    },
    Step {
        title: "Find What You Need",
        body: "Browse listings from other students on your campus.",
    },
    Step {
        title: "Make the Trade",
        body: "Connect and exchange items with fellow students.",
    },
];

const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        quote: "UniTrade has been a game-changer! I've saved so much money on groceries and made new friends in the process.",
        author: "Sarah, Junior",
        avatar_alt: "Student 1",
    },
    Testimonial {
        quote: "I love how easy it is to find what I need. UniTrade has made campus life so much more convenient!",
        author: "Mike, Sophomore",
        avatar_alt: "Student 2",
    },
];

const NAV_LINKS: [(&str, &str); 3] = [
    ("#features", "Features"),
    ("#how-it-works", "How It Works"),
    ("#testimonials", "Testimonials"),
];

const CTA_BUTTON: &str = "h-9 px-4 py-2 shadow transition-colors hover:bg-primary/90";
const SECTION_HEADING: &str = "text-3xl font-bold tracking-tighter sm:text-5xl text-center mb-12";

#[component]
pub fn UniTradePage() -> impl IntoView {
    view! {
        <Title text="UniTrade" />
        <Meta
            name="description"
            content="Trade groceries and supplies with fellow students. Save money, reduce waste, and build community."
        />
        <div class="flex flex-col min-h-screen w-full bg-black text-white">
            <header class="px-4 lg:px-6 h-14 flex items-center bg-gray-900">
                <a class="flex items-center justify-center" href="#">
                    <Icon kind=IconKind::ShoppingBag class="h-6 w-6 text-white" />
                    <span class="ml-2 text-2xl font-bold">"UniTrade"</span>
                </a>
                <nav class="ml-auto flex gap-4 sm:gap-6">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    class="text-sm font-medium hover:underline underline-offset-4"
                                    href=href
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </header>
            <main class="flex-1">
                <section class="w-full py-12 md:py-24 lg:py-32 xl:py-48">
                    <div class="container px-4 md:px-6">
                        <div class="flex flex-col items-center space-y-4 text-center">
                            <div class="space-y-2">
                                <h1 class="text-3xl font-bold tracking-tighter sm:text-4xl md:text-5xl lg:text-6xl/none animated-title">
                                    "Trade Groceries & Supplies with Fellow Students"
                                </h1>
                                <p class="mx-auto max-w-[700px] text-gray-300 md:text-xl text-center">
                                    "UniTrade connects you with other students to exchange what you need. Save money, reduce waste, and build community."
                                </p>
                            </div>
                            <div class="space-x-4 flex justify-center">
                                <Button class=CTA_BUTTON>"Get Started"</Button>
                                <Button variant=ButtonVariant::Outline>"Learn More"</Button>
                            </div>
                        </div>
                    </div>
                </section>
                <section id="features" class="w-full py-12 md:py-24 lg:py-32 bg-gray-800">
                    <div class="container px-4 md:px-6">
                        <h2 class=SECTION_HEADING>"Key Features"</h2>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                            {FEATURES
                                .iter()
                                .map(|f| {
                                    view! {
                                        <Card class="bg-gray-700">
                                            <CardHeader>
                                                <CardTitle>{f.title}</CardTitle>
                                            </CardHeader>
                                            <CardContent>
                                                <Icon kind=f.icon class="h-12 w-12 mb-4 text-white" />
                                                <p class="text-gray-300">{f.body}</p>
                                            </CardContent>
                                        </Card>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </section>
                <section id="how-it-works" class="w-full py-12 md:py-24 lg:py-32">
                    <div class="container px-4 md:px-6">
                        <h2 class=SECTION_HEADING>"How It Works"</h2>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                            {STEPS
                                .iter()
                                .enumerate()
                                .map(|(i, step)| {
                                    let number = i + 1;
                                    view! {
                                        <div
                                            class="flex flex-col items-center text-center"
                                            data-step=number.to_string()
                                        >
                                            <div class="rounded-full bg-primary text-primary-foreground p-3 mb-4">
                                                {number}
                                            </div>
                                            <h3 class="text-xl font-bold mb-2">{step.title}</h3>
                                            <p class="text-gray-300">{step.body}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </section>
                <section id="testimonials" class="w-full py-12 md:py-24 lg:py-32 bg-gray-800">
                    <div class="container px-4 md:px-6">
                        <h2 class=SECTION_HEADING>"What Students Say"</h2>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                            {TESTIMONIALS
                                .iter()
                                .map(|t| {
                                    view! {
                                        <Card class="bg-gray-700">
                                            <CardContent class="flex flex-col items-center text-center p-6">
                                                <Image
                                                    src="/placeholder.svg?height=100&width=100"
                                                    alt=t.avatar_alt
                                                    width=100
                                                    height=100
                                                    class="rounded-full mb-4"
                                                />
                                                <p class="mb-2 text-gray-300">"\u{201c}" {t.quote} "\u{201d}"</p>
                                                <p class="font-bold">"- " {t.author}</p>
                                            </CardContent>
                                        </Card>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </section>
                <section class="w-full py-12 md:py-24 lg:py-32">
                    <div class="container px-4 md:px-6">
                        <div class="flex flex-col items-center space-y-4 text-center">
                            <div class="space-y-2">
                                <h2 class="text-3xl font-bold tracking-tighter sm:text-5xl text-center">
                                    "Ready to Start Trading?"
                                </h2>
                                <p class="mx-auto max-w-[600px] text-gray-300 md:text-xl text-center">
                                    "Join UniTrade today and start exchanging groceries and supplies with fellow students on your campus."
                                </p>
                            </div>
                            <div class="space-x-4 flex justify-center">
                                <Button class=CTA_BUTTON>
                                    "Sign Up Now"
                                    <Icon kind=IconKind::ArrowRight class="ml-2 h-4 w-4" />
                                </Button>
                            </div>
                        </div>
                    </div>
                </section>
            </main>
            <footer class="flex flex-col gap-2 sm:flex-row py-6 w-full shrink-0 items-center px-4 md:px-6 border-t border-gray-600">
                <p class="text-xs text-gray-500">"© 2023 UniTrade. All rights reserved."</p>
                <nav class="sm:ml-auto flex gap-4 sm:gap-6">
                    <a class="text-xs hover:underline underline-offset-4" href="#">
                        "Terms of Service"
                    </a>
                    <a class="text-xs hover:underline underline-offset-4" href="#">
                        "Privacy"
                    </a>
                </nav>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_exist() {
        // every header link points at a section rendered on the page
        let ids = ["features", "how-it-works", "testimonials"];
        for (href, _) in NAV_LINKS {
            assert!(ids.contains(&href.trim_start_matches('#')), "{href}");
        }
    }

    #[test]
    fn test_feature_icons_are_distinct() {
        for (i, a) in FEATURES.iter().enumerate() {
            for b in &FEATURES[i + 1..] {
                assert_ne!(a.icon, b.icon);
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_page_renders_every_section() {
        let owner = Owner::new();
        let html = owner.with(|| {
            leptos_meta::provide_meta_context();
            view! { <UniTradePage /> }.to_html()
        });

        for (href, label) in NAV_LINKS {
            assert!(html.contains(&format!("href=\"{href}\"")), "{href}");
            assert!(html.contains(label));
            let id = format!("id=\"{}\"", href.trim_start_matches('#'));
            assert!(html.contains(&id), "missing section {id}");
        }

        for f in &FEATURES {
            assert!(html.contains(f.title));
            assert!(html.contains(&format!("data-icon=\"{}\"", f.icon.name())));
        }

        let steps = ["1", "2", "3"]
            .iter()
            .map(|n| html.find(&format!("data-step=\"{n}\"")).expect("step rendered"))
            .collect::<Vec<_>>();
        assert!(steps.windows(2).all(|w| w[0] < w[1]));
        for (at, step) in steps.iter().zip(&STEPS) {
            assert!(html[*at..].contains(step.title));
        }

        assert_eq!(html.matches("alt=\"Student").count(), TESTIMONIALS.len());
        for t in &TESTIMONIALS {
            assert!(html.contains(t.author));
        }

        assert!(html.contains("UniTrade. All rights reserved."));
        assert!(html.contains("Terms of Service"));
        assert!(html.contains("Privacy"));
    }
}
