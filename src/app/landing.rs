use leptos::prelude::*;
use leptos_meta::Title;

const MENU_ITEMS: [&str; 3] = ["Item 1", "Item 2", "Item 3"];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text="Welcome" />
        <div class="menu-header">
            <h1 class="title">"Welcome to the Landing Page"</h1>
            <div class="menu-items">
                {MENU_ITEMS
                    .into_iter()
                    .map(|item| view! { <div class="menu-item">{item}</div> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_menu_items_in_order() {
        let owner = Owner::new();
        let html = owner.with(|| {
            leptos_meta::provide_meta_context();
            view! { <LandingPage /> }.to_html()
        });

        assert!(html.contains("Welcome to the Landing Page"));
        assert_eq!(html.matches("class=\"menu-item\"").count(), MENU_ITEMS.len());
        let positions = MENU_ITEMS
            .iter()
            .map(|item| html.find(item).expect("menu item rendered"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
