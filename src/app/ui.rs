//! Small ShadCN-style building blocks shared by the pages.
//!
//! Every primitive takes an extra `class` that is appended to its base classes,
//! so call sites can restyle without re-implementing the component.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Icon,
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-primary disabled:pointer-events-none disabled:opacity-50";

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant = match variant {
        ButtonVariant::Default => "bg-primary text-primary-foreground shadow hover:bg-primary/90",
        ButtonVariant::Outline => {
            "border border-input bg-transparent shadow-sm hover:bg-accent hover:text-accent-foreground"
        }
        ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
    };
    let size = match size {
        ButtonSize::Default => "h-9 px-4 py-2",
        ButtonSize::Icon => "h-9 w-9",
    };
    [BUTTON_BASE, variant, size, extra]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] aria_label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=button_class(variant, size, class) aria-label=aria_label>
            {children()}
        </button>
    }
}

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=format!("rounded-xl border shadow {class}")>{children()}</div> }
}

#[component]
pub fn CardHeader(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=format!("flex flex-col space-y-1.5 p-6 {class}")>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <h3 class=format!("font-semibold leading-none tracking-tight {class}")>{children()}</h3>
    }
}

#[component]
pub fn CardContent(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=format!("p-6 pt-0 {class}")>{children()}</div> }
}

/// Sized image with lazy loading; the asset itself is served from `public/`.
#[component]
pub fn Image(
    src: &'static str,
    alt: &'static str,
    width: u32,
    height: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <img
            src=src
            alt=alt
            width=width.to_string()
            height=height.to_string()
            loading="lazy"
            class=class
        />
    }
}

#[derive(Debug, Clone, Copy)]
struct TabsContext {
    active: RwSignal<String>,
}

/// Owns no state itself: the active tab value lives in `active` and is shared
/// with triggers and panels through context.
#[component]
pub fn Tabs(
    active: RwSignal<String>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    provide_context(TabsContext { active });
    view! { <div class=class>{children()}</div> }
}

#[component]
pub fn TabsList(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div role="tablist" class=format!("inline-flex items-center justify-center {class}")>
            {children()}
        </div>
    }
}

#[component]
pub fn TabsTrigger(
    value: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let ctx = expect_context::<TabsContext>();
    let is_active = move || ctx.active.with(|a| a == value);
    view! {
        <button
            type="button"
            role="tab"
            class=class
            aria-selected=move || is_active().to_string()
            data-state=move || { if is_active() { "active" } else { "inactive" } }
            on:click=move |_| ctx.active.set(value.to_string())
        >
            {children()}
        </button>
    }
}

#[component]
pub fn TabsContent(
    value: &'static str,
    #[prop(optional)] class: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let ctx = expect_context::<TabsContext>();
    view! {
        <Show when=move || ctx.active.with(|a| a == value)>
            <div role="tabpanel" data-value=value class=class>
                {children()}
            </div>
        </Show>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_button_class_merges_extra() {
        let class = button_class(ButtonVariant::Outline, ButtonSize::Default, "w-full");
        assert!(class.starts_with(BUTTON_BASE));
        assert!(class.contains("border-input"));
        assert!(class.ends_with("w-full"));

        let class = button_class(ButtonVariant::Ghost, ButtonSize::Icon, "");
        assert!(class.ends_with("h-9 w-9"));
    }

    #[test]
    fn test_tabs_show_only_active_panel() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let active = RwSignal::new("two".to_string());
            view! {
                <Tabs active>
                    <TabsList>
                        <TabsTrigger value="one">"One"</TabsTrigger>
                        <TabsTrigger value="two">"Two"</TabsTrigger>
                    </TabsList>
                    <TabsContent value="one">"first panel"</TabsContent>
                    <TabsContent value="two">"second panel"</TabsContent>
                </Tabs>
            }
            .to_html()
        });
        assert_eq!(html.matches("role=\"tab\"").count(), 2);
        assert_eq!(html.matches("data-state=\"active\"").count(), 1);
        assert!(html.contains("second panel"));
        assert!(!html.contains("first panel"));
    }
}
