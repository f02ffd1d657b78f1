use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use super::icon::{Icon, IconKind};
use super::technologies::TechnologiesPanel;
use super::ui::{Button, ButtonSize, ButtonVariant};

const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/blog", "Blog"),
    ("/projects", "Projects"),
    ("/about", "About"),
    ("/resume", "Resume"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <Meta
            name="description"
            content="Cybersecurity-focused portfolio: web development projects and security research."
        />
        <div class="min-h-screen flex flex-col w-full">
            <HomeHeader />
            <main class="flex-grow flex flex-col items-center justify-center text-center p-4">
                <PulseRings />
                <h1 class="text-5xl font-bold mb-4">"Hi, I'm Jack!"</h1>
                <p class="max-w-2xl mb-8 text-gray-300">
                    "Welcome to my cybersecurity-focused portfolio where I showcase my web development projects
                    and share insights on the latest in cybersecurity research.
                    Exploring the intersection of web technologies and digital security."
                </p>
                <Button>"Get in Touch"</Button>
            </main>
            <TechnologiesPanel />
        </div>
    }
}

#[component]
fn HomeHeader() -> impl IntoView {
    view! {
        <header class="p-4">
            <nav class="flex items-center justify-between max-w-6xl mx-auto">
                <A href="/" attr:class="text-2xl font-bold" attr:aria-label="Home">
                    <Icon kind=IconKind::BarChart class="w-8 h-8" />
                </A>
                <ul class="hidden md:flex space-x-4">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <A href=href attr:class="hover:text-gray-300">
                                        {label}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="flex items-center space-x-2">
                    <Button variant=ButtonVariant::Ghost size=ButtonSize::Icon aria_label="Search">
                        <Icon kind=IconKind::Search class="w-5 h-5" />
                    </Button>
                    <Button variant=ButtonVariant::Ghost size=ButtonSize::Icon aria_label="Stats">
                        <Icon kind=IconKind::BarChart class="w-5 h-5" />
                    </Button>
                    <Button variant=ButtonVariant::Ghost size=ButtonSize::Icon aria_label="Theme">
                        <Icon kind=IconKind::Sun class="w-5 h-5" />
                    </Button>
                </div>
            </nav>
        </header>
    }
}

/// Three concentric circles pulsing out of phase.
#[component]
fn PulseRings() -> impl IntoView {
    view! {
        <div class="relative w-64 h-64 mb-8" aria-hidden="true">
            <div class="absolute inset-0 bg-blue-500 rounded-full animate-pulse"></div>
            <div class="absolute inset-4 bg-blue-700 rounded-full animate-pulse delay-75"></div>
            <div class="absolute inset-8 bg-blue-900 rounded-full animate-pulse delay-150"></div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_rings_nest_inward() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <PulseRings /> }.to_html());
        assert_eq!(html.matches("animate-pulse").count(), 3);
        let outer = html.find("inset-0").unwrap();
        let middle = html.find("inset-4").unwrap();
        let inner = html.find("inset-8").unwrap();
        assert!(outer < middle && middle < inner);
    }
}
