use leptos::prelude::*;

/// Outline glyphs from the lucide set, drawn on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    BarChart,
    RefreshCcw,
    Search,
    ShoppingBag,
    Sun,
    Users,
}

impl IconKind {
    pub fn name(self) -> &'static str {
        match self {
            IconKind::ArrowRight => "arrow-right",
            IconKind::BarChart => "bar-chart",
            IconKind::RefreshCcw => "refresh-ccw",
            IconKind::Search => "search",
            IconKind::ShoppingBag => "shopping-bag",
            IconKind::Sun => "sun",
            IconKind::Users => "users",
        }
    }

    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconKind::BarChart => &["M12 20V10", "M18 20V4", "M6 20v-4"],
            IconKind::RefreshCcw => &[
                "M21 12a9 9 0 0 0-9-9 9.75 9.75 0 0 0-6.74 2.74L3 8",
                "M3 3v5h5",
                "M3 12a9 9 0 0 0 9 9 9.75 9.75 0 0 0 6.74-2.74L21 16",
                "M16 16h5v5",
            ],
            IconKind::Search => &["M19 11a8 8 0 1 1-16 0 8 8 0 0 1 16 0", "m21 21-4.3-4.3"],
            IconKind::ShoppingBag => &[
                "M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z",
                "M3 6h18",
                "M16 10a4 4 0 0 1-8 0",
            ],
            IconKind::Sun => &[
                "M16 12a4 4 0 1 1-8 0 4 4 0 0 1 8 0",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            IconKind::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            data-icon=kind.name()
            aria-hidden="true"
        >
            {kind.paths().iter().copied().map(|d| view! { <path d=d /> }).collect_view()}
        </svg>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_icon_renders_every_path() {
        let owner = Owner::new();
        let html =
            owner.with(|| view! { <Icon kind=IconKind::Users class="h-12 w-12" /> }.to_html());
        assert!(html.contains("data-icon=\"users\""));
        assert!(html.contains("class=\"h-12 w-12\""));
        assert_eq!(
            html.matches("<path").count(),
            IconKind::Users.paths().len()
        );
    }
}
